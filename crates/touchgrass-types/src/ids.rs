//! Opaque string identifiers for catalog-backed entities.
//!
//! Items and events are referenced by short snake-case keys such as
//! `energy_drink` or `creek_crossing`. Wrapping them in newtypes keeps the
//! two namespaces from mixing at compile time while still serializing as
//! plain strings. Which identifiers exist is decided by the catalog in
//! `touchgrass-world`, never by this crate.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Generates a newtype wrapper around [`String`] with standard derives.
macro_rules! define_id {
    (
        $(#[$meta:meta])*
        $name:ident
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
        #[serde(transparent)]
        #[ts(export, export_to = "bindings/")]
        pub struct $name(String);

        impl $name {
            /// Create an identifier from its key.
            pub fn new(key: impl Into<String>) -> Self {
                Self(key.into())
            }

            /// Borrow the key as a string slice.
            pub fn as_str(&self) -> &str {
                &self.0
            }

            /// Return the inner [`String`] value.
            pub fn into_inner(self) -> String {
                self.0
            }
        }

        impl core::fmt::Display for $name {
            fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl From<&str> for $name {
            fn from(key: &str) -> Self {
                Self(key.to_owned())
            }
        }

        impl From<String> for $name {
            fn from(key: String) -> Self {
                Self(key)
            }
        }

        impl PartialEq<str> for $name {
            fn eq(&self, other: &str) -> bool {
                self.0 == other
            }
        }

        impl PartialEq<&str> for $name {
            fn eq(&self, other: &&str) -> bool {
                self.0 == *other
            }
        }
    };
}

define_id! {
    /// Identifier of an item definition in the catalog (e.g. `phone`).
    ItemId
}

define_id! {
    /// Identifier of a scripted event attached to a room (e.g. `bear_encounter`).
    EventId
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_compare_against_plain_strings() {
        let item = ItemId::from("compass");
        assert_eq!(item, "compass");
        assert_eq!(item.as_str(), "compass");
        assert_ne!(item, "flashlight");
    }

    #[test]
    fn id_serializes_as_bare_string() {
        let event = EventId::new("creek_crossing");
        let json = serde_json::to_string(&event).ok();
        assert_eq!(json.as_deref(), Some("\"creek_crossing\""));
        let restored: Result<EventId, _> = serde_json::from_str("\"creek_crossing\"");
        assert_eq!(restored.ok(), Some(event));
    }

    #[test]
    fn id_display_matches_key() {
        assert_eq!(ItemId::new("snacks").to_string(), "snacks");
    }
}
