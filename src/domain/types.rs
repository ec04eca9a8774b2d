//! Strongly-typed value objects used by domain entities.
//!
//! Identifiers handed out by Pipedrive are always positive integers. The
//! wrappers below make that an invariant so a resolved id can be trusted once
//! it reaches an entity.
use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors produced when attempting to construct a constrained value object.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TypeConstraintError {
    /// Provided identifier is zero or negative.
    #[error("id must be greater than zero")]
    NonPositiveId,
}

/// Macro to generate lightweight newtypes for positive remote identifiers.
macro_rules! id_newtype {
    ($name:ident, $doc:expr) => {
        #[doc = $doc]
        #[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
        #[serde(try_from = "i64", into = "i64")]
        pub struct $name(i64);

        impl $name {
            /// Creates a new identifier ensuring it is greater than zero.
            pub fn new(value: i64) -> Result<Self, TypeConstraintError> {
                if value > 0 {
                    Ok(Self(value))
                } else {
                    Err(TypeConstraintError::NonPositiveId)
                }
            }

            /// Returns the raw `i64` backing this identifier.
            pub const fn get(self) -> i64 {
                self.0
            }
        }

        impl Display for $name {
            fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl TryFrom<i64> for $name {
            type Error = TypeConstraintError;

            fn try_from(value: i64) -> Result<Self, Self::Error> {
                Self::new(value)
            }
        }

        impl From<$name> for i64 {
            fn from(value: $name) -> Self {
                value.0
            }
        }
    };
}

id_newtype!(OrganizationId, "Remote identifier of an organization.");
id_newtype!(PersonId, "Remote identifier of a person.");
id_newtype!(DealId, "Remote identifier of a deal.");
id_newtype!(UserId, "Remote identifier of a Pipedrive user (owner of records).");

/// Interprets the zero-means-unset convention used by settings files.
///
/// `0` yields `None`, positive values are wrapped, negative values are
/// rejected.
pub fn optional_user_id(value: i64) -> Result<Option<UserId>, TypeConstraintError> {
    match value {
        0 => Ok(None),
        other => UserId::new(other).map(Some),
    }
}

/// Trims every entry and drops the ones left blank.
pub(crate) fn normalize_list<I, S>(values: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    values
        .into_iter()
        .map(|s| s.into().trim().to_string())
        .filter(|s| !s.is_empty())
        .collect()
}
