//! Order form and shipping data containers.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::address::Address;
use super::id::{AddressId, OrderFormId};
use super::logistics::LogisticsInfo;
use super::null_as_default;

/// Shipping section of an order form.
///
/// `logistics_info` stays optional: the platform omits it before any item
/// has been added, and callers need to tell that apart from an empty cart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct ShippingData {
    #[serde(default)]
    pub logistics_info: Option<Vec<LogisticsInfo>>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub selected_addresses: Vec<Address>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub available_addresses: Vec<Address>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl ShippingData {
    /// Logistics entries, or an empty slice when the platform sent none.
    #[must_use]
    pub fn logistics_info(&self) -> &[LogisticsInfo] {
        self.logistics_info.as_deref().unwrap_or_default()
    }

    /// Find one of the customer's available addresses by ID.
    #[must_use]
    pub fn available_address(&self, id: &AddressId) -> Option<&Address> {
        self.available_addresses
            .iter()
            .find(|address| &address.address_id == id)
    }
}

/// A checkout order form.
///
/// Only the shipping section is modelled; everything else the platform
/// returns is kept in `extra`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct OrderForm {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub order_form_id: Option<OrderFormId>,
    #[serde(default)]
    pub shipping_data: Option<ShippingData>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl OrderForm {
    /// Logistics entries of the shipping section, if both are present.
    #[must_use]
    pub fn logistics_info(&self) -> Option<&[LogisticsInfo]> {
        self.shipping_data
            .as_ref()
            .and_then(|data| data.logistics_info.as_deref())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_null_shipping_data() {
        let form: OrderForm =
            serde_json::from_value(json!({ "orderFormId": "of-1", "shippingData": null }))
                .unwrap();
        assert!(form.shipping_data.is_none());
        assert!(form.logistics_info().is_none());
    }

    #[test]
    fn test_absent_logistics_info_differs_from_empty() {
        let absent: ShippingData = serde_json::from_value(json!({})).unwrap();
        let empty: ShippingData = serde_json::from_value(json!({ "logisticsInfo": [] })).unwrap();

        assert!(absent.logistics_info.is_none());
        assert_eq!(empty.logistics_info, Some(Vec::new()));
        assert!(absent.logistics_info().is_empty());
    }

    #[test]
    fn test_available_address_lookup() {
        let data = ShippingData {
            available_addresses: vec![Address::new("home"), Address::new("work")],
            ..ShippingData::default()
        };
        assert!(data.available_address(&"work".into()).is_some());
        assert!(data.available_address(&"gym".into()).is_none());
    }

    #[test]
    fn test_unmodelled_sections_preserved() {
        let form: OrderForm = serde_json::from_value(json!({
            "items": [{ "id": "1" }],
            "shippingData": { "selectedAddresses": null }
        }))
        .unwrap();
        assert!(form.extra.contains_key("items"));
        assert!(form.shipping_data.unwrap().selected_addresses.is_empty());
    }
}
