//! Core types for salesdesk.
//!
//! This module provides type-safe wrappers for common domain concepts.

pub mod email;
pub mod id;
pub mod increment_id;
pub mod status;

pub use email::{Email, EmailError};
pub use id::*;
pub use increment_id::{IncrementId, IncrementIdError};
pub use status::OrderState;
