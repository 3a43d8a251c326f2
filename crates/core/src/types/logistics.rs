//! Logistics and delivery option types.
//!
//! A [`LogisticsInfo`] entry exists per order-form line item and lists the
//! delivery options ("SLAs") the platform computed for that item.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::estimate::{EstimateError, ShippingEstimate};
use super::field::Field;
use super::id::{AddressId, DeliveryOptionId, ItemId};

/// How a delivery option hands goods to the customer.
///
/// Channels this crate does not know about are kept verbatim in
/// [`DeliveryChannel::Other`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum DeliveryChannel {
    Delivery,
    PickupInPoint,
    Other(String),
}

impl DeliveryChannel {
    /// The platform's spelling of this channel.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Delivery => "delivery",
            Self::PickupInPoint => "pickup-in-point",
            Self::Other(value) => value.as_str(),
        }
    }
}

impl From<String> for DeliveryChannel {
    fn from(value: String) -> Self {
        match value.as_str() {
            "delivery" => Self::Delivery,
            "pickup-in-point" => Self::PickupInPoint,
            _ => Self::Other(value),
        }
    }
}

impl From<DeliveryChannel> for String {
    fn from(value: DeliveryChannel) -> Self {
        match value {
            DeliveryChannel::Other(value) => value,
            known => known.as_str().to_owned(),
        }
    }
}

impl fmt::Display for DeliveryChannel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A scheduled delivery window offered by a delivery option.
///
/// Kept as the raw JSON the platform sent; a window with a missing or
/// malformed date still deserializes and just reports `None` for it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DeliveryWindow(Value);

impl DeliveryWindow {
    #[must_use]
    pub fn start_date_utc(&self) -> Option<DateTime<Utc>> {
        self.date("startDateUtc")
    }

    #[must_use]
    pub fn end_date_utc(&self) -> Option<DateTime<Utc>> {
        self.date("endDateUtc")
    }

    /// Extra cost for the window, in minor currency units.
    #[must_use]
    pub fn price(&self) -> Option<i64> {
        self.0.get("price").and_then(Value::as_i64)
    }

    #[must_use]
    pub const fn as_value(&self) -> &Value {
        &self.0
    }

    fn date(&self, key: &str) -> Option<DateTime<Utc>> {
        let raw = self.0.get(key)?.as_str()?;
        DateTime::parse_from_rfc3339(raw)
            .ok()
            .map(|date| date.with_timezone(&Utc))
    }
}

impl From<Value> for DeliveryWindow {
    fn from(value: Value) -> Self {
        Self(value)
    }
}

/// Pickup point details attached to a delivery option.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct PickupStoreInfo {
    #[serde(default, skip_serializing_if = "Field::is_absent")]
    pub is_pickup_store: Field<bool>,
    #[serde(default, skip_serializing_if = "Field::is_absent")]
    pub friendly_name: Field<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// A delivery option (SLA) computed for one logistics entry.
///
/// Every field besides `id` may be missing or `null`; the accessors resolve
/// those to neutral values while the fields themselves keep what was sent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeliveryOption {
    pub id: DeliveryOptionId,
    #[serde(default, skip_serializing_if = "Field::is_absent")]
    pub delivery_channel: Field<DeliveryChannel>,
    #[serde(default, skip_serializing_if = "Field::is_absent")]
    pub name: Field<String>,
    /// Compact estimate such as `"5bd"`.
    #[serde(default, skip_serializing_if = "Field::is_absent")]
    pub shipping_estimate: Field<String>,
    /// Price in minor currency units.
    #[serde(default, skip_serializing_if = "Field::is_absent")]
    pub price: Field<i64>,
    #[serde(default, skip_serializing_if = "Field::is_absent")]
    pub available_delivery_windows: Field<Vec<DeliveryWindow>>,
    #[serde(default, skip_serializing_if = "Field::is_absent")]
    pub pickup_store_info: Field<PickupStoreInfo>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl DeliveryOption {
    /// Create a delivery option with only an ID set.
    #[must_use]
    pub fn new(id: impl Into<DeliveryOptionId>) -> Self {
        Self {
            id: id.into(),
            delivery_channel: Field::Absent,
            name: Field::Absent,
            shipping_estimate: Field::Absent,
            price: Field::Absent,
            available_delivery_windows: Field::Absent,
            pickup_store_info: Field::Absent,
            extra: Map::new(),
        }
    }

    #[must_use]
    pub const fn delivery_channel(&self) -> Option<&DeliveryChannel> {
        self.delivery_channel.get()
    }

    #[must_use]
    pub fn name(&self) -> Option<&str> {
        self.name.get().map(String::as_str)
    }

    #[must_use]
    pub fn shipping_estimate(&self) -> Option<&str> {
        self.shipping_estimate.get().map(String::as_str)
    }

    /// Price in minor currency units, zero when not sent.
    #[must_use]
    pub fn price(&self) -> i64 {
        self.price.get().copied().unwrap_or_default()
    }

    #[must_use]
    pub fn available_delivery_windows(&self) -> &[DeliveryWindow] {
        self.available_delivery_windows
            .get()
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// Whether the option delivers to a pickup point rather than the address.
    #[must_use]
    pub fn is_pickup_point(&self) -> bool {
        self.delivery_channel() == Some(&DeliveryChannel::PickupInPoint)
            || self
                .pickup_store_info
                .get()
                .and_then(|info| info.is_pickup_store.get())
                .is_some_and(|&is_pickup_store| is_pickup_store)
    }

    /// Whether the option requires choosing a delivery window.
    #[must_use]
    pub fn is_scheduled(&self) -> bool {
        !self.available_delivery_windows().is_empty()
    }

    /// Parse the compact shipping estimate.
    ///
    /// # Errors
    ///
    /// Returns an error if the platform sent no estimate or one this crate
    /// cannot read.
    pub fn estimate(&self) -> Result<ShippingEstimate, EstimateError> {
        ShippingEstimate::parse(self.shipping_estimate().unwrap_or_default())
    }
}

/// Shipping computation for a single order-form item.
///
/// Payloads sent back to the platform are clones of these entries, so every
/// field serializes exactly as it was received.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct LogisticsInfo {
    #[serde(default, skip_serializing_if = "Field::is_absent")]
    pub item_index: Field<u32>,
    #[serde(default, skip_serializing_if = "Field::is_absent")]
    pub item_id: Field<ItemId>,
    /// ISO 3166-1 alpha-3 codes of the countries this item ships to.
    #[serde(default, skip_serializing_if = "Field::is_absent")]
    pub ships_to: Field<Vec<String>>,
    #[serde(default, skip_serializing_if = "Field::is_absent")]
    pub slas: Field<Vec<DeliveryOption>>,
    /// `null` means nothing is selected yet.
    #[serde(default, skip_serializing_if = "Field::is_absent")]
    pub selected_sla: Field<DeliveryOptionId>,
    #[serde(default, skip_serializing_if = "Field::is_absent")]
    pub selected_delivery_channel: Field<DeliveryChannel>,
    #[serde(default, skip_serializing_if = "Field::is_absent")]
    pub address_id: Field<AddressId>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl LogisticsInfo {
    #[must_use]
    pub fn ships_to(&self) -> &[String] {
        self.ships_to.get().map(Vec::as_slice).unwrap_or_default()
    }

    /// Delivery options, empty when missing or `null`.
    #[must_use]
    pub fn slas(&self) -> &[DeliveryOption] {
        self.slas.get().map(Vec::as_slice).unwrap_or_default()
    }

    #[must_use]
    pub const fn selected_sla(&self) -> Option<&DeliveryOptionId> {
        self.selected_sla.get()
    }

    #[must_use]
    pub const fn address_id(&self) -> Option<&AddressId> {
        self.address_id.get()
    }

    /// Look up one of this entry's delivery options by ID.
    #[must_use]
    pub fn delivery_option(&self, id: &DeliveryOptionId) -> Option<&DeliveryOption> {
        self.slas().iter().find(|sla| &sla.id == id)
    }
}
