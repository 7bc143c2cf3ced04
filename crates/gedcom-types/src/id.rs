//! Record identifier types.
//!
//! Individuals and families live in separate identifier spaces. Each kind
//! gets its own newtype so that a family lookup can never be handed an
//! individual's identifier by accident.

use std::borrow::Borrow;
use std::fmt;

macro_rules! record_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
        #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
        #[cfg_attr(feature = "serde", serde(transparent))]
        pub struct $name(String);

        impl $name {
            /// Wraps an identifier as written in the source file.
            pub fn new(id: impl Into<String>) -> Self {
                Self(id.into())
            }

            /// Returns the identifier text.
            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl From<&str> for $name {
            fn from(id: &str) -> Self {
                Self::new(id)
            }
        }

        impl From<String> for $name {
            fn from(id: String) -> Self {
                Self(id)
            }
        }

        impl Borrow<str> for $name {
            fn borrow(&self) -> &str {
                &self.0
            }
        }
    };
}

record_id! {
    /// Identifier of an individual (`0 <id> INDI`).
    ///
    /// # Examples
    ///
    /// ```
    /// use gedcom_types::IndividualId;
    ///
    /// let id = IndividualId::new("I1");
    /// assert_eq!(id.as_str(), "I1");
    /// assert!(IndividualId::new("I1") < IndividualId::new("I2"));
    /// ```
    IndividualId
}

record_id! {
    /// Identifier of a family (`0 <id> FAM`).
    FamilyId
}
