//! The mutation applied to each target order, decided before anything is saved.

use salesdesk_core::{Customer, CustomerId, Email, IncrementId, Order, WebsiteId};

/// What the operator decided: the new address, and optionally the customer
/// the orders should be linked to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpdatePlan {
    new_email: Email,
    association: Option<CustomerId>,
}

impl UpdatePlan {
    /// Build the plan from the validated email and the re-association answer.
    ///
    /// `reassociate` only has an effect when a customer was found.
    #[must_use]
    pub fn new(new_email: Email, customer: Option<&Customer>, reassociate: bool) -> Self {
        let association = customer.filter(|_| reassociate).map(|customer| customer.id);
        Self {
            new_email,
            association,
        }
    }

    /// The address every target order receives.
    #[must_use]
    pub const fn new_email(&self) -> &Email {
        &self.new_email
    }

    /// The customer every target order is linked to, if re-association was accepted.
    #[must_use]
    pub const fn association(&self) -> Option<CustomerId> {
        self.association
    }

    /// The first order that may not be linked to a customer of `scope`.
    ///
    /// Only relevant when the plan re-associates: the email alone can change
    /// on orders of any website.
    #[must_use]
    pub fn out_of_scope<'o>(&self, orders: &'o [Order], scope: WebsiteId) -> Option<&'o Order> {
        self.association?;
        orders.iter().find(|order| order.website_id != scope)
    }

    /// Apply the plan to one order in place.
    pub fn apply(&self, order: &mut Order) {
        order.set_customer_email(&self.new_email);
        if let Some(customer_id) = self.association {
            order.associate_customer(customer_id);
        }
    }
}

/// Orders saved by a confirmed update, in save order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommitReport {
    pub updated: Vec<IncrementId>,
}
