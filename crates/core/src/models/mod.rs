//! Domain models shared by the console and its store adapters.

pub mod customer;
pub mod order;
pub mod website;

pub use customer::Customer;
pub use order::Order;
pub use website::Website;
