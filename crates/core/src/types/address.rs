//! Checkout address types.

use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::field::Field;
use super::id::AddressId;

/// Kind of address attached to an order form.
///
/// Maps to the platform's `addressType` values. Values this crate does not
/// know about are kept verbatim in [`AddressType::Other`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum AddressType {
    Residential,
    Commercial,
    InStore,
    GiftRegistry,
    Pickup,
    /// Placeholder address created from a postal code search.
    Search,
    Other(String),
}

impl AddressType {
    /// The platform's spelling of this type.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Residential => "residential",
            Self::Commercial => "commercial",
            Self::InStore => "inStore",
            Self::GiftRegistry => "giftRegistry",
            Self::Pickup => "pickup",
            Self::Search => "search",
            Self::Other(value) => value.as_str(),
        }
    }

    /// Whether goods can be delivered to an address of this kind.
    #[must_use]
    pub const fn is_delivery(&self) -> bool {
        matches!(self, Self::Residential | Self::Commercial)
    }
}

impl From<String> for AddressType {
    fn from(value: String) -> Self {
        match value.as_str() {
            "residential" => Self::Residential,
            "commercial" => Self::Commercial,
            "inStore" => Self::InStore,
            "giftRegistry" => Self::GiftRegistry,
            "pickup" => Self::Pickup,
            "search" => Self::Search,
            _ => Self::Other(value),
        }
    }
}

impl From<AddressType> for String {
    fn from(value: AddressType) -> Self {
        match value {
            AddressType::Other(value) => value,
            known => known.as_str().to_owned(),
        }
    }
}

impl fmt::Display for AddressType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A shipping address as exchanged with the commerce platform.
///
/// Only the fields shipping decisions depend on are modelled. Everything else
/// (receiver, street, city...) stays in `extra`, and every modelled field
/// serializes back the way it was received.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Address {
    pub address_id: AddressId,
    #[serde(default, skip_serializing_if = "Field::is_absent")]
    pub address_type: Field<AddressType>,
    #[serde(default, skip_serializing_if = "Field::is_absent")]
    pub postal_code: Field<String>,
    /// `[longitude, latitude]` when the address was geolocated.
    #[serde(default, skip_serializing_if = "Field::is_absent")]
    pub geo_coordinates: Field<Vec<f64>>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Address {
    /// Create an address with only an ID set.
    #[must_use]
    pub fn new(address_id: impl Into<AddressId>) -> Self {
        Self {
            address_id: address_id.into(),
            address_type: Field::Absent,
            postal_code: Field::Absent,
            geo_coordinates: Field::Absent,
            extra: Map::new(),
        }
    }

    #[must_use]
    pub const fn address_type(&self) -> Option<&AddressType> {
        self.address_type.get()
    }

    #[must_use]
    pub fn postal_code(&self) -> Option<&str> {
        self.postal_code.get().map(String::as_str)
    }

    /// Geocoordinates, empty when missing or `null`.
    #[must_use]
    pub fn geo_coordinates(&self) -> &[f64] {
        self.geo_coordinates
            .get()
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// Whether this address can be used as a delivery destination.
    ///
    /// Untyped addresses are treated as deliverable.
    #[must_use]
    pub fn is_delivery_address(&self) -> bool {
        self.address_type().is_none_or(AddressType::is_delivery)
    }
}
