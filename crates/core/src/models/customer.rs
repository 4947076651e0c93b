//! Customer accounts.

use serde::{Deserialize, Serialize};

use crate::types::{CustomerId, Email, WebsiteId};

/// A registered customer account.
///
/// Email addresses are unique per website, not globally: the same address
/// may belong to different customers on different websites.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Customer {
    pub id: CustomerId,
    pub email: Email,
    pub website_id: WebsiteId,
}
