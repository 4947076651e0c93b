//! Salesdesk Core - Shared types library.
//!
//! This crate provides the types shared by the salesdesk components:
//! - `cli` - The operator console (`sd-cli`) and its store adapters
//! - `integration-tests` - End-to-end runs against `PostgreSQL`
//!
//! # Architecture
//!
//! The core crate contains only types - no I/O, no database access,
//! no terminal handling. Validation lives on the types themselves so an
//! `Email` or `IncrementId` in hand is always well formed.
//!
//! # Modules
//!
//! - [`types`] - Newtype wrappers for ids, increment ids, emails and order states
//! - [`models`] - Orders, customers and websites as seen by the console

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod models;
pub mod types;

pub use models::*;
pub use types::*;
