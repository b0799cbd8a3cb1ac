//! Typed bindings for the game contracts.
//!
//! The bindings are generated from human-readable ABIs, and the generated ABI
//! is what a call plan gets checked against before anything is sent.

use std::fmt;
use std::str::FromStr;

use ethers_core::abi::Abi;

use crate::error::Error;

pub mod game2 {
    ethers::contract::abigen!(
        Game2,
        r#"[
            function setX(uint256 x) external
            function setY(uint256 y) external
            function win() external
            event Winner(address winner)
        ]"#,
    );
}

pub mod game4 {
    ethers::contract::abigen!(
        Game4,
        r#"[
            function win(uint8 y) external
            event Winner(address winner)
        ]"#,
    );
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Interface {
    Game2,
    Game4,
}

impl Interface {
    pub fn name(&self) -> &'static str {
        match self {
            Interface::Game2 => "Game2",
            Interface::Game4 => "Game4",
        }
    }

    pub fn abi(&self) -> &'static Abi {
        match self {
            Interface::Game2 => &game2::GAME2_ABI,
            Interface::Game4 => &game4::GAME4_ABI,
        }
    }
}

impl fmt::Display for Interface {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Interface {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "game2" => Ok(Interface::Game2),
            "game4" => Ok(Interface::Game4),
            _ => Err(Error::UnknownInterface(s.to_string())),
        }
    }
}
