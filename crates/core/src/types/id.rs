//! Newtype IDs for type-safe entity references.
//!
//! The commerce platform identifies addresses, delivery options and items
//! with opaque strings. Use the `define_id!` macro to wrap them so an
//! address ID can never be passed where a delivery option ID is expected.

/// Macro to define a type-safe string ID wrapper.
///
/// Creates a newtype wrapper around `String` with:
/// - `Serialize`/`Deserialize` with `#[serde(transparent)]`
/// - `Debug`, `Clone`, `PartialEq`, `Eq`, `Hash`
/// - Conversion methods: `new()`, `as_str()`, `into_inner()`
/// - `From<String>`, `From<&str>` and `Into<String>` implementations
///
/// # Example
///
/// ```rust
/// # use checkout_shipping_core::define_id;
/// define_id!(WarehouseId);
/// define_id!(DockId);
///
/// let warehouse = WarehouseId::new("wh-1");
/// assert_eq!(warehouse.as_str(), "wh-1");
///
/// // These are different types, so this won't compile:
/// // let _: DockId = warehouse;
/// ```
#[macro_export]
macro_rules! define_id {
    ($name:ident) => {
        #[derive(
            Debug,
            Clone,
            PartialEq,
            Eq,
            Hash,
            PartialOrd,
            Ord,
            ::serde::Serialize,
            ::serde::Deserialize
        )]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            /// Create a new ID from any string-like value.
            #[must_use]
            pub fn new(id: impl Into<String>) -> Self {
                Self(id.into())
            }

            /// Get the ID as a string slice.
            #[must_use]
            pub fn as_str(&self) -> &str {
                &self.0
            }

            /// Convert into the inner string.
            #[must_use]
            pub fn into_inner(self) -> String {
                self.0
            }
        }

        impl ::core::fmt::Display for $name {
            fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                &self.0
            }
        }

        impl From<String> for $name {
            fn from(id: String) -> Self {
                Self(id)
            }
        }

        impl From<&str> for $name {
            fn from(id: &str) -> Self {
                Self(id.to_owned())
            }
        }

        impl From<$name> for String {
            fn from(id: $name) -> Self {
                id.0
            }
        }
    };
}

define_id!(AddressId);
define_id!(DeliveryOptionId);
define_id!(ItemId);
define_id!(OrderFormId);

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_display_matches_inner() {
        let id = DeliveryOptionId::new("Normal");
        assert_eq!(id.to_string(), "Normal");
        assert_eq!(id.as_str(), "Normal");
    }

    #[test]
    fn test_serializes_as_bare_string() {
        let id = AddressId::from("a1b2");
        assert_eq!(serde_json::to_string(&id).unwrap(), "\"a1b2\"");

        let parsed: AddressId = serde_json::from_str("\"a1b2\"").unwrap();
        assert_eq!(parsed, id);
    }

    #[test]
    fn test_into_string() {
        let id = ItemId::new("item-7");
        let s: String = id.into();
        assert_eq!(s, "item-7");
    }
}
