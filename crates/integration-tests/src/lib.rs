//! Integration tests for Checkout Shipping.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p checkout-shipping-integration-tests
//! ```
//!
//! # Test Categories
//!
//! - `shipping_view` - Deriving the checkout view from order forms
//! - `shipping_request` - Address and delivery option request payloads
//! - `custom_rules` - Plugging a store-specific `ShippingRules`
//!
//! This library holds the order-form fixtures those tests share.

use checkout_shipping_core::OrderForm;
use serde_json::{Value, json};

/// Parse a JSON value into an order form.
///
/// # Panics
///
/// Panics if the value is not a valid order form; fixtures are expected to be.
#[must_use]
pub fn order_form(value: Value) -> OrderForm {
    serde_json::from_value(value).expect("fixture is a valid order form")
}

/// A residential address, optionally geolocated.
#[must_use]
pub fn residential_address(id: &str, geolocated: bool) -> Value {
    let geo_coordinates = if geolocated {
        json!([-43.182, -22.945])
    } else {
        json!([])
    };

    json!({
        "addressId": id,
        "addressType": "residential",
        "receiverName": "Ana Souza",
        "postalCode": "22250-040",
        "city": "Rio de Janeiro",
        "state": "RJ",
        "country": "BRA",
        "street": "Praia de Botafogo",
        "number": "300",
        "geoCoordinates": geo_coordinates,
        "isDisposable": false
    })
}

/// A home delivery option.
#[must_use]
pub fn sla(id: &str, price: i64, estimate: &str) -> Value {
    json!({
        "id": id,
        "deliveryChannel": "delivery",
        "name": id,
        "shippingEstimate": estimate,
        "price": price,
        "availableDeliveryWindows": [],
        "pickupStoreInfo": { "isPickupStore": false, "friendlyName": null, "address": null }
    })
}

/// A pickup-point delivery option.
#[must_use]
pub fn pickup_sla(id: &str) -> Value {
    json!({
        "id": id,
        "deliveryChannel": "pickup-in-point",
        "name": id,
        "shippingEstimate": "2bd",
        "price": 0,
        "availableDeliveryWindows": [],
        "pickupStoreInfo": { "isPickupStore": true, "friendlyName": "Loja Centro" }
    })
}

/// A delivery option that requires choosing a delivery window.
#[must_use]
pub fn scheduled_sla(id: &str) -> Value {
    json!({
        "id": id,
        "deliveryChannel": "delivery",
        "name": id,
        "shippingEstimate": "3bd",
        "price": 1200,
        "availableDeliveryWindows": [{
            "startDateUtc": "2026-10-21T08:00:00+00:00",
            "endDateUtc": "2026-10-21T12:00:00+00:00",
            "price": 0,
            "lisPrice": 0
        }]
    })
}

/// A logistics entry for one item.
#[must_use]
pub fn logistics_entry(index: u32, ships_to: &[&str], slas: Vec<Value>, selected: Option<&str>) -> Value {
    json!({
        "itemIndex": index,
        "itemId": format!("sku-{index}"),
        "shipsTo": ships_to,
        "slas": slas,
        "selectedSla": selected,
        "selectedDeliveryChannel": "delivery",
        "deliveryChannels": [{ "id": "delivery" }, { "id": "pickup-in-point" }]
    })
}

/// A two-item order form shipping to Brazil.
///
/// The first item offers `Normal`, `Express`, a pickup point and a scheduled
/// option; the second only `Normal` and `Express`.
#[must_use]
pub fn two_item_order_form() -> Value {
    json!({
        "orderFormId": "of-42",
        "items": [{ "id": "1" }, { "id": "2" }],
        "shippingData": {
            "address": null,
            "logisticsInfo": [
                logistics_entry(
                    0,
                    &["BRA"],
                    vec![
                        sla("Normal", 1000, "5bd"),
                        sla("Express", 2500, "1bd"),
                        pickup_sla("Retirada"),
                        scheduled_sla("Agendada"),
                    ],
                    Some("Normal"),
                ),
                logistics_entry(
                    1,
                    &["BRA", "ARG"],
                    vec![sla("Normal", 800, "7bd"), sla("Express", 2000, "2bd")],
                    Some("Normal"),
                ),
            ],
            "selectedAddresses": [residential_address("home", true)],
            "availableAddresses": [
                residential_address("home", true),
                residential_address("work", false)
            ]
        }
    })
}
