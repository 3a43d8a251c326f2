//! Shapes produced for the platform API and for the checkout view.

use serde::{Deserialize, Serialize};

use crate::types::{Address, DeliveryOptionId, LogisticsInfo};

/// Request body for updating an order form's shipping attachment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShippingRequestPayload {
    pub logistics_info: Vec<LogisticsInfo>,
    pub selected_addresses: Vec<Address>,
    /// Sent only for geolocated addresses. The key is left out of the JSON
    /// entirely otherwise; the platform treats an explicit `false` and a
    /// missing key differently.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub clear_address_if_postal_code_not_found: Option<bool>,
}

/// A delivery option merged across every logistics entry, ready to display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FormattedDeliveryOption {
    pub id: DeliveryOptionId,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Sum of the option's price over all items, in minor currency units.
    pub price: i64,
    /// Longest estimate among the items, in the platform's notation.
    pub estimate: String,
    /// Every item currently has this option selected.
    pub is_selected: bool,
}

/// Shipping summary shown by the checkout.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct ShippingView {
    pub available_addresses: Vec<Address>,
    pub countries: Vec<String>,
    pub delivery_options: Vec<FormattedDeliveryOption>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub selected_address: Option<Address>,
}
