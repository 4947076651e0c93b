//! Websites (customer account scopes).

use core::fmt;

use serde::{Deserialize, Serialize};

use crate::types::WebsiteId;

/// A website: one or more storefronts sharing a customer namespace.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Website {
    pub id: WebsiteId,
    pub name: String,
}

/// Renders as the `<id> : <name>` line shown when choosing a scope.
impl fmt::Display for Website {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} : {}", self.id, self.name)
    }
}
