//! Sales orders.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::types::{CustomerId, Email, IncrementId, OrderId, OrderState, StoreId, WebsiteId};

/// A sales order, as far as its contact details are concerned.
///
/// `customer_email` is kept as raw text: orders placed with a malformed
/// address must still load so the address can be corrected.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Order {
    /// Internal row key.
    pub id: OrderId,
    /// Order number shown to customers and operators.
    pub increment_id: IncrementId,
    /// Store view the order was placed in.
    pub store_id: StoreId,
    /// Website owning that store view.
    pub website_id: WebsiteId,
    pub state: OrderState,
    pub customer_email: String,
    /// Linked customer account, `None` for guest orders.
    pub customer_id: Option<CustomerId>,
    pub customer_is_guest: bool,
    pub created_at: DateTime<Utc>,
}

impl Order {
    /// Replace the contact email. Customer linkage is left as is.
    pub fn set_customer_email(&mut self, email: &Email) {
        email.as_str().clone_into(&mut self.customer_email);
    }

    /// Link the order to a customer account, which makes it a non-guest order.
    pub const fn associate_customer(&mut self, customer_id: CustomerId) {
        self.customer_id = Some(customer_id);
        self.customer_is_guest = false;
    }
}
