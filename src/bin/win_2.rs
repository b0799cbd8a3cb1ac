use std::process;

use clap::Parser;
use dotenv::dotenv;
use ethers_core::types::TransactionReceipt;
use game_win_scripts::command_options::Win2Opt;
use game_win_scripts::{plan, Config, Interface, Result};

async fn run(opt: Win2Opt) -> Result<TransactionReceipt> {
    let config = Config::from_options(&opt.common, Interface::Game2)?;
    let plan = plan::game2_win(opt.x, opt.y);
    game_win_scripts::execute(&config, &plan).await
}

#[tokio::main]
async fn main() {
    dotenv().ok();
    env_logger::init();

    let opt = Win2Opt::parse();
    process::exit(game_win_scripts::finish(run(opt).await));
}
