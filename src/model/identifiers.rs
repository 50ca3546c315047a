//! Identifier newtypes with smart constructors.
//!
//! All identifiers validate non-empty strings at construction time.
//! Raw constructors are never exported - use smart constructors only.

use serde::Deserialize;
use std::fmt;

/// Error returned by identifier smart constructors.
///
/// Carries the identifier kind so error messages name the offending field
/// without a separate error type per identifier.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{kind} cannot be empty")]
pub struct EmptyId {
    /// Human-readable identifier kind (e.g. "course id").
    kind: &'static str,
}

macro_rules! string_id {
    ($(#[$doc:meta])* $name:ident, $kind:literal) => {
        $(#[$doc])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, Deserialize)]
        #[serde(try_from = "String")]
        pub struct $name(String);

        impl $name {
            /// Smart constructor: validates a non-empty identifier.
            pub fn new(raw: impl Into<String>) -> Result<Self, EmptyId> {
                let raw = raw.into();
                if raw.is_empty() {
                    Err(EmptyId { kind: $kind })
                } else {
                    Ok(Self(raw))
                }
            }

            /// The identifier as a string slice.
            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl TryFrom<String> for $name {
            type Error = EmptyId;

            fn try_from(raw: String) -> Result<Self, Self::Error> {
                Self::new(raw)
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }
    };
}

string_id!(
    /// Course run identifier scoping every discussion route.
    CourseId,
    "course id"
);

string_id!(
    /// Thread identifier. The route layer calls this `postId`.
    PostId,
    "post id"
);

string_id!(
    /// Discussion topic identifier.
    TopicId,
    "topic id"
);

string_id!(
    /// Learner username targeted by learner-specific routes.
    Username,
    "username"
);
