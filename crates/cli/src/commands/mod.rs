//! Entry points for `sd-cli` subcommands.

pub mod migrate;
pub mod order;
