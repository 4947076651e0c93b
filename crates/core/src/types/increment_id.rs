//! Human-facing order numbers.

use core::fmt;

use serde::{Deserialize, Serialize};

/// Errors that can occur when parsing an [`IncrementId`].
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum IncrementIdError {
    /// The input string is empty.
    #[error("increment id cannot be empty")]
    Empty,
    /// The input string is too long.
    #[error("increment id must be at most {max} digits")]
    TooLong {
        /// Maximum allowed length.
        max: usize,
    },
    /// The input contains something other than ASCII digits.
    #[error("increment id must contain only digits")]
    NotNumeric,
}

/// The order number printed on invoices and emails (e.g. `100000123`).
///
/// Distinct from the internal [`OrderId`](crate::OrderId) row key. Stored as
/// text because the store keeps leading zeros, but always made of digits.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(try_from = "String", into = "String")]
pub struct IncrementId(String);

impl IncrementId {
    /// Longest increment id the store accepts.
    pub const MAX_LENGTH: usize = 32;

    /// Parse an `IncrementId`, ignoring surrounding whitespace and a leading `#`.
    ///
    /// # Errors
    ///
    /// Returns an error if the input is empty, longer than 32 characters or
    /// not made of ASCII digits.
    pub fn parse(s: &str) -> Result<Self, IncrementIdError> {
        let s = s.trim();
        let s = s.strip_prefix('#').unwrap_or(s);

        if s.is_empty() {
            return Err(IncrementIdError::Empty);
        }

        if s.len() > Self::MAX_LENGTH {
            return Err(IncrementIdError::TooLong {
                max: Self::MAX_LENGTH,
            });
        }

        if !s.bytes().all(|b| b.is_ascii_digit()) {
            return Err(IncrementIdError::NotNumeric);
        }

        Ok(Self(s.to_owned()))
    }

    /// Returns the increment id as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for IncrementId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::str::FromStr for IncrementId {
    type Err = IncrementIdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for IncrementId {
    type Error = IncrementIdError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<IncrementId> for String {
    fn from(id: IncrementId) -> Self {
        id.0
    }
}

#[cfg(feature = "postgres")]
impl sqlx::Type<sqlx::Postgres> for IncrementId {
    fn type_info() -> sqlx::postgres::PgTypeInfo {
        <String as sqlx::Type<sqlx::Postgres>>::type_info()
    }

    fn compatible(ty: &sqlx::postgres::PgTypeInfo) -> bool {
        <String as sqlx::Type<sqlx::Postgres>>::compatible(ty)
    }
}

#[cfg(feature = "postgres")]
impl sqlx::Encode<'_, sqlx::Postgres> for IncrementId {
    fn encode_by_ref(
        &self,
        buf: &mut sqlx::postgres::PgArgumentBuffer,
    ) -> Result<sqlx::encode::IsNull, sqlx::error::BoxDynError> {
        <String as sqlx::Encode<sqlx::Postgres>>::encode_by_ref(&self.0, buf)
    }
}
