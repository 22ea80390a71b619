//! Driver library for chains of cascaded MAX7219 LED dot matrix drivers.

#![cfg_attr(not(feature = "std"), no_std)]

#[macro_use]
extern crate log;

pub mod command;
pub mod config;
pub mod display;
pub mod error;
pub mod font;
pub mod interface;

// Re-exports for primary API.
pub use command::{consts, Register};
pub use config::Config;
pub use display::Display;
pub use error::Error;
pub use font::{glyph, Glyph};
pub use interface::spi::SpiInterface;
pub use interface::ChainInterface;
