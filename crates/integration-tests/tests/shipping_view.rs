//! Integration tests for deriving the checkout shipping view.

#![allow(clippy::unwrap_used, clippy::indexing_slicing)]

use checkout_shipping_core::{
    ShippingRulesConfig, ShippingView, StandardShippingRules, derive_shipping_view,
};
use checkout_shipping_integration_tests::{
    logistics_entry, order_form, sla, two_item_order_form,
};
use serde_json::json;

fn option_ids(view: &ShippingView) -> Vec<&str> {
    view.delivery_options
        .iter()
        .map(|option| option.id.as_str())
        .collect()
}

// =============================================================================
// Degraded Input
// =============================================================================

#[test]
fn test_null_shipping_data_yields_empty_view() {
    let form = order_form(json!({ "orderFormId": "of-1", "shippingData": null }));
    let view = derive_shipping_view(&StandardShippingRules::default(), &form);

    let value = serde_json::to_value(&view).unwrap();
    assert_eq!(
        value,
        json!({ "availableAddresses": [], "countries": [], "deliveryOptions": [] })
    );
    assert!(value.get("selectedAddress").is_none());
}

#[test]
fn test_missing_shipping_data_key() {
    let form = order_form(json!({}));
    let view = derive_shipping_view(&StandardShippingRules::default(), &form);
    assert_eq!(view, ShippingView::default());
}

#[test]
fn test_null_logistics_info() {
    let form = order_form(json!({
        "shippingData": {
            "logisticsInfo": null,
            "selectedAddresses": [],
            "availableAddresses": null
        }
    }));
    let view = derive_shipping_view(&StandardShippingRules::default(), &form);

    assert!(view.countries.is_empty());
    assert!(view.delivery_options.is_empty());
    assert!(view.available_addresses.is_empty());
    assert!(view.selected_address.is_none());
}

#[test]
fn test_window_without_dates_still_derives_view() {
    let mut scheduled = sla("Agendada", 1200, "3bd");
    scheduled["availableDeliveryWindows"] = json!([{ "startDateUtc": null, "price": 0 }]);
    let form = order_form(json!({
        "shippingData": {
            "logisticsInfo": [
                logistics_entry(0, &["BRA"], vec![sla("Normal", 1000, "5bd"), scheduled], None)
            ]
        }
    }));

    let view = derive_shipping_view(&StandardShippingRules::default(), &form);
    assert_eq!(option_ids(&view), vec!["Normal"]);
}

// =============================================================================
// Countries and Options
// =============================================================================

#[test]
fn test_shared_countries_deduplicated() {
    let form = order_form(json!({
        "shippingData": {
            "logisticsInfo": [
                logistics_entry(0, &["BR"], vec![sla("sla1", 0, "1bd"), sla("sla2", 0, "1bd")], None),
                logistics_entry(1, &["BR"], vec![sla("sla1", 0, "1bd")], None)
            ]
        }
    }));
    let view = derive_shipping_view(&StandardShippingRules::default(), &form);

    assert_eq!(view.countries, vec!["BR"]);
    assert_eq!(option_ids(&view), vec!["sla1"]);
}

#[test]
fn test_two_item_order_form_view() {
    let form = order_form(two_item_order_form());
    let view = derive_shipping_view(&StandardShippingRules::default(), &form);

    assert_eq!(view.countries, vec!["BRA", "ARG"]);
    assert_eq!(view.available_addresses.len(), 2);
    assert_eq!(
        view.selected_address.as_ref().map(|a| a.address_id.as_str()),
        Some("home")
    );

    // Pickup and scheduled options exist only on the first item and are hidden anyway.
    assert_eq!(option_ids(&view), vec!["Normal", "Express"]);

    let normal = &view.delivery_options[0];
    assert_eq!(normal.price, 1800);
    assert_eq!(normal.estimate, "7bd");
    assert!(normal.is_selected);

    let express = &view.delivery_options[1];
    assert_eq!(express.price, 4500);
    assert_eq!(express.estimate, "2bd");
    assert!(!express.is_selected);
}

#[test]
fn test_view_serializes_platform_field_names() {
    let form = order_form(two_item_order_form());
    let view = derive_shipping_view(&StandardShippingRules::default(), &form);
    let value = serde_json::to_value(&view).unwrap();

    assert_eq!(
        value["deliveryOptions"][0],
        json!({
            "id": "Normal",
            "name": "Normal",
            "price": 1800,
            "estimate": "7bd",
            "isSelected": true
        })
    );
    assert_eq!(value["selectedAddress"]["addressId"], "home");
    assert_eq!(value["selectedAddress"]["isDisposable"], false);
}

#[test]
fn test_pickup_and_scheduled_can_be_enabled() {
    let form = order_form(json!({
        "shippingData": {
            "logisticsInfo": [
                logistics_entry(
                    0,
                    &["BRA"],
                    vec![
                        sla("Normal", 1000, "5bd"),
                        checkout_shipping_integration_tests::pickup_sla("Retirada"),
                        checkout_shipping_integration_tests::scheduled_sla("Agendada"),
                    ],
                    None,
                )
            ]
        }
    }));

    let standard = derive_shipping_view(&StandardShippingRules::default(), &form);
    assert_eq!(option_ids(&standard), vec!["Normal"]);

    let rules = StandardShippingRules::new(ShippingRulesConfig {
        include_pickup_points: true,
        include_scheduled: true,
        ..ShippingRulesConfig::default()
    });
    let permissive = derive_shipping_view(&rules, &form);
    assert_eq!(option_ids(&permissive), vec!["Normal", "Retirada", "Agendada"]);
}
