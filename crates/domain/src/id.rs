//! Identifier newtypes for API-assigned ids.
//!
//! The API owns id allocation. Depending on the backing store it emits ids as
//! JSON numbers (`1`) or strings (`"a1b2"`); the representation received is
//! kept so that an id echoed back (e.g. `postId` on a new comment) matches the
//! store's own type.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

/// Wire representation of an identifier.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
enum RawId {
    Number(u64),
    Text(String),
}

macro_rules! define_id {
    ($(#[doc = $doc:expr])* $name:ident) => {
        $(#[doc = $doc])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(RawId);

        impl $name {
            /// Wrap a numeric identifier.
            #[must_use]
            pub fn from_number(value: u64) -> Self {
                Self(RawId::Number(value))
            }

            /// Return the numeric value when the id is numeric.
            #[must_use]
            pub fn as_number(&self) -> Option<u64> {
                match &self.0 {
                    RawId::Number(value) => Some(*value),
                    RawId::Text(_) => None,
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                match &self.0 {
                    RawId::Number(value) => value.fmt(f),
                    RawId::Text(value) => f.write_str(value),
                }
            }
        }

        impl FromStr for $name {
            type Err = ValidationError;

            /// Canonical decimal strings become numeric ids; anything else
            /// non-blank is kept verbatim.
            fn from_str(s: &str) -> Result<Self, Self::Err> {
                if s.trim().is_empty() {
                    return Err(ValidationError::EmptyId);
                }
                match s.parse::<u64>() {
                    Ok(value) if value.to_string() == s => Ok(Self(RawId::Number(value))),
                    _ => Ok(Self(RawId::Text(s.to_string()))),
                }
            }
        }
    };
}

define_id!(
    /// Unique identifier for a [`Post`](crate::post::Post).
    PostId
);

define_id!(
    /// Unique identifier for a [`Comment`](crate::comment::Comment).
    CommentId
);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_parse_decimal_string_as_number() {
        let id: PostId = "42".parse().unwrap();
        assert_eq!(id.as_number(), Some(42));
        assert_eq!(id, PostId::from_number(42));
    }

    #[test]
    fn should_keep_leading_zeros_as_text() {
        let id: PostId = "007".parse().unwrap();
        assert_eq!(id.as_number(), None);
        assert_eq!(id.to_string(), "007");
    }

    #[test]
    fn should_reject_blank_id() {
        assert_eq!("  ".parse::<PostId>(), Err(ValidationError::EmptyId));
        assert_eq!("".parse::<CommentId>(), Err(ValidationError::EmptyId));
    }

    #[test]
    fn should_preserve_wire_representation_through_serde() {
        let numeric: PostId = serde_json::from_str("1").unwrap();
        let textual: PostId = serde_json::from_str("\"1\"").unwrap();

        assert_eq!(serde_json::to_string(&numeric).unwrap(), "1");
        assert_eq!(serde_json::to_string(&textual).unwrap(), "\"1\"");
        assert_ne!(numeric, textual);
        assert_eq!(numeric.to_string(), textual.to_string());
    }

    #[test]
    fn should_accept_opaque_string_ids() {
        let id: CommentId = serde_json::from_str("\"f3a9\"").unwrap();
        assert_eq!(id.to_string(), "f3a9");
    }
}
