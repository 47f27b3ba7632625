//! Strongly-typed pagination values.
//!
//! List endpoints count pages and page sizes from one. Callers hand in whatever
//! their controls produce, so the lenient constructors clamp to the smallest
//! valid value instead of failing; `try_new` is there for call sites that want
//! to reject bad input outright.
use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors produced when strictly constructing a pagination value.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TypeConstraintError {
    /// Provided value is zero or negative.
    #[error("value must be greater than zero")]
    NonPositive,
}

fn clamp_positive(value: i64) -> usize {
    usize::try_from(value.max(1)).unwrap_or(usize::MAX)
}

/// Macro to generate newtypes for one-based pagination counters.
macro_rules! positive_newtype {
    ($name:ident, $doc:expr) => {
        #[doc = $doc]
        #[derive(
            Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash,
        )]
        #[serde(from = "i64", into = "usize")]
        pub struct $name(usize);

        impl $name {
            /// Smallest valid value.
            pub const MIN: Self = Self(1);

            /// Creates a value, clamping anything below one up to one.
            pub fn new(value: i64) -> Self {
                Self(clamp_positive(value))
            }

            /// Creates a value, rejecting anything below one.
            pub fn try_new(value: i64) -> Result<Self, TypeConstraintError> {
                if value > 0 {
                    Ok(Self::new(value))
                } else {
                    Err(TypeConstraintError::NonPositive)
                }
            }

            /// Returns the raw `usize` backing this value.
            pub const fn get(self) -> usize {
                self.0
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self::MIN
            }
        }

        impl Display for $name {
            fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl From<i64> for $name {
            fn from(value: i64) -> Self {
                Self::new(value)
            }
        }

        impl From<usize> for $name {
            fn from(value: usize) -> Self {
                Self(value.max(1))
            }
        }

        impl From<$name> for usize {
            fn from(value: $name) -> Self {
                value.0
            }
        }
    };
}

positive_newtype!(PageNumber, "One-based index of the requested page.");
positive_newtype!(PageSize, "Number of items requested per page.");
