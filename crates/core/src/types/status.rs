//! Order lifecycle state.

use serde::{Deserialize, Serialize};

/// Lifecycle state of a sales order.
///
/// Stored as snake case text (`pending_payment`, `holded`, ...). Any state
/// can have its email corrected; the console only displays it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum OrderState {
    #[default]
    New,
    PendingPayment,
    Processing,
    Complete,
    Closed,
    Canceled,
    /// On hold. The spelling matches the stored value.
    Holded,
}

impl OrderState {
    /// The stored representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::New => "new",
            Self::PendingPayment => "pending_payment",
            Self::Processing => "processing",
            Self::Complete => "complete",
            Self::Closed => "closed",
            Self::Canceled => "canceled",
            Self::Holded => "holded",
        }
    }
}

impl std::fmt::Display for OrderState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for OrderState {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "new" => Ok(Self::New),
            "pending_payment" => Ok(Self::PendingPayment),
            "processing" => Ok(Self::Processing),
            "complete" => Ok(Self::Complete),
            "closed" => Ok(Self::Closed),
            "canceled" => Ok(Self::Canceled),
            "holded" => Ok(Self::Holded),
            _ => Err(format!("invalid order state: {s}")),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_from_str_matches_display() {
        for state in [
            OrderState::New,
            OrderState::PendingPayment,
            OrderState::Processing,
            OrderState::Complete,
            OrderState::Closed,
            OrderState::Canceled,
            OrderState::Holded,
        ] {
            assert_eq!(state.to_string().parse::<OrderState>().unwrap(), state);
        }
    }

    #[test]
    fn test_from_str_unknown() {
        assert!("shipped".parse::<OrderState>().is_err());
    }

    #[test]
    fn test_serde_uses_stored_spelling() {
        let json = serde_json::to_string(&OrderState::PendingPayment).unwrap();
        assert_eq!(json, "\"pending_payment\"");
    }
}
