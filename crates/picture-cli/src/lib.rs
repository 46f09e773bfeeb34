//! Picture CLI - command-line driver for the Picture transformation engine.
//!
//! Usage:
//!   picture invert <INPUT> <OUTPUT>
//!   picture grayscale <INPUT> <OUTPUT>
//!   picture rotate <90|180|270> <INPUT> <OUTPUT>
//!   picture flip <H|V> <INPUT> <OUTPUT>
//!   picture blend <INPUT>... <OUTPUT>
//!   picture blur <INPUT> <OUTPUT>
//!   picture mosaic <TILE_SIZE> <INPUT>... <OUTPUT>

pub mod cli;
pub mod config;
pub mod logging;
pub mod runner;

pub use cli::{Cli, Commands, Request};
pub use config::CliConfig;
