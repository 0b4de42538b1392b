//! This crate contains the source code for the binary for the treasure grid game.

#![expect(
    clippy::cargo_common_metadata,
    reason = "Temporary allow during development."
)]
#![expect(
    unused_crate_dependencies,
    reason = "The dependencies are used in the library crate."
)]

use clap::Parser as _;
use color_eyre::{eyre::Result, install};
use treasure_grid::Cli;

fn main() -> Result<()> {
    install()?;

    let cli = Cli::parse();
    treasure_grid::init_logging(cli.verbose);
    treasure_grid::run(&cli)
}
