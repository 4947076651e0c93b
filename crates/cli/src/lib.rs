//! Salesdesk CLI library.
//!
//! The `sd-cli` binary is a thin clap front end over this library so the
//! order email workflow can be driven from tests with scripted answers and
//! in-memory stores.
//!
//! # Modules
//!
//! - [`workflow`] - The interactive order email update and its collaborator traits
//! - [`prompt`] - Line-based terminal prompts
//! - [`db`] - `PostgreSQL` implementations of the collaborator traits
//! - [`config`] - Environment configuration
//! - [`commands`] - Entry points for each subcommand

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod commands;
pub mod config;
pub mod db;
pub mod prompt;
pub mod workflow;
