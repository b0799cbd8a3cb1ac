use std::process;

use clap::Parser;
use dotenv::dotenv;
use ethers_core::types::TransactionReceipt;
use game_win_scripts::command_options::Win4Opt;
use game_win_scripts::{plan, Config, Interface, Result};

async fn run(opt: Win4Opt) -> Result<TransactionReceipt> {
    let config = Config::from_options(&opt.common, Interface::Game4)?;
    let plan = plan::game4_win(opt.value);
    game_win_scripts::execute(&config, &plan).await
}

#[tokio::main]
async fn main() {
    dotenv().ok();
    env_logger::init();

    let opt = Win4Opt::parse();
    process::exit(game_win_scripts::finish(run(opt).await));
}
