//! Lookup classes and cache-key construction.
//!
//! Every lookup the registry supports belongs to one [`OperationClass`].
//! A [`CacheKey`] renders a class plus its parameters into the exact
//! query string the registry serves it under; that string is used both as
//! the request path and as the cache key, so equal parameter tuples always
//! coalesce onto the same entry.

use std::fmt;

/// The five lookup kinds the registry exposes.
///
/// Each class has its own cache expiration and its own concurrency gate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OperationClass {
    /// Basic entity record by tax key.
    EntityBasic,

    /// Full entity record (basic fields plus exclusions and special records).
    EntityFull,

    /// Special-record entry by tax key and rule.
    SpecialRecord,

    /// Bank account detail by account address.
    BankAccountDetail,

    /// Ownership validation of an account against a tax key.
    BankAccountOwnership,
}

impl OperationClass {
    /// Stable name, used in logs.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::EntityBasic => "EntityDataBasic",
            Self::EntityFull => "EntityDataFull",
            Self::SpecialRecord => "SpecialRecord",
            Self::BankAccountDetail => "BankAccountDetails",
            Self::BankAccountOwnership => "BankAccountOwnership",
        }
    }
}

impl fmt::Display for OperationClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A fully-parameterized lookup, one variant per [`OperationClass`].
///
/// Rendering is pure and deterministic: identical parameter tuples always
/// produce the identical string, and any differing parameter produces a
/// different one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CacheKey<'a> {
    /// `EntityDataBasic?key=<cuit>`
    EntityBasic { key: &'a str },

    /// `EntityDataFull?key=<cuit>`
    EntityFull { key: &'a str },

    /// `SpecialRecord?key=<cuit>&rule=<rule>`
    SpecialRecord { key: &'a str, rule: &'a str },

    /// `BankAccountDetails?key=<cbu>`
    BankAccountDetail { key: &'a str },

    /// `BankAccountOwnership?account_address=<cbu>&owner_key=<cuit>`
    BankAccountOwnership { account: &'a str, owner: &'a str },
}

impl CacheKey<'_> {
    /// The operation class this key belongs to.
    pub fn class(&self) -> OperationClass {
        match self {
            Self::EntityBasic { .. } => OperationClass::EntityBasic,
            Self::EntityFull { .. } => OperationClass::EntityFull,
            Self::SpecialRecord { .. } => OperationClass::SpecialRecord,
            Self::BankAccountDetail { .. } => OperationClass::BankAccountDetail,
            Self::BankAccountOwnership { .. } => OperationClass::BankAccountOwnership,
        }
    }
}

impl fmt::Display for CacheKey<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EntityBasic { key } => write!(f, "EntityDataBasic?key={}", key),
            Self::EntityFull { key } => write!(f, "EntityDataFull?key={}", key),
            Self::SpecialRecord { key, rule } => {
                write!(f, "SpecialRecord?key={}&rule={}", key, rule)
            }
            Self::BankAccountDetail { key } => write!(f, "BankAccountDetails?key={}", key),
            Self::BankAccountOwnership { account, owner } => {
                write!(
                    f,
                    "BankAccountOwnership?account_address={}&owner_key={}",
                    account, owner
                )
            }
        }
    }
}
