use std::fmt;

use crate::domain::validation::ValidationError;

#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
/// Integrated Circuit Card Identifier of a SIM.
///
/// Invariant: non-empty after trimming.
pub struct Iccid(String);

impl Iccid {
    /// Query parameter name used by SimPro (`iccid`).
    pub const FIELD: &'static str = "iccid";

    /// Create a validated [`Iccid`].
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::Empty { field: Self::FIELD });
        }
        Ok(Self(trimmed.to_owned()))
    }

    /// Borrow the validated ICCID.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Iccid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
/// SimPro billing account number.
///
/// Invariant: non-empty after trimming.
pub struct AccountNumber(String);

impl AccountNumber {
    /// Query parameter name used by `GET /sims` (`account_number`).
    pub const FIELD: &'static str = "account_number";

    /// Create a validated [`AccountNumber`].
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::Empty { field: Self::FIELD });
        }
        Ok(Self(trimmed.to_owned()))
    }

    /// Borrow the validated account number.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for AccountNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
/// Pagination controls shared by the list endpoints that support them.
///
/// Zero values are treated as "not set" and omitted from the query.
pub struct Page {
    pub page: Option<u32>,
    pub limit: Option<u32>,
}

impl Page {
    pub fn new(page: u32, limit: u32) -> Self {
        Self {
            page: Some(page),
            limit: Some(limit),
        }
    }
}
