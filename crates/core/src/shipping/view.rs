//! Checkout shipping view derived from an order form.

use std::collections::HashSet;

use tracing::debug;

use crate::types::{DeliveryOption, LogisticsInfo, OrderForm};

use super::payload::ShippingView;
use super::rules::ShippingRules;

/// Summarize an order form's shipping section for display.
///
/// An order form without shipping data yields empty lists and no selected
/// address; nothing here fails.
#[must_use]
pub fn derive_shipping_view(rules: &impl ShippingRules, order_form: &OrderForm) -> ShippingView {
    let shipping_data = order_form.shipping_data.as_ref();
    let logistics_info = order_form.logistics_info().unwrap_or_default();

    let countries = ship_to_countries(logistics_info);

    let available_addresses = shipping_data
        .map(|data| data.available_addresses.clone())
        .unwrap_or_default();

    let selected_address = shipping_data
        .and_then(|data| rules.selected_delivery_address(&data.selected_addresses))
        .cloned();

    let options = unique_delivery_options(logistics_info);
    let offered = options.len();
    let filtered = rules.filter_delivery_options(options, logistics_info);
    let delivery_options = rules.format_delivery_options(&filtered, logistics_info);

    debug!(
        entries = logistics_info.len(),
        countries = countries.len(),
        offered,
        shown = delivery_options.len(),
        "Derived shipping view"
    );

    ShippingView {
        available_addresses,
        countries,
        delivery_options,
        selected_address,
    }
}

/// Every country any item ships to, once each, in first-seen order.
fn ship_to_countries(logistics_info: &[LogisticsInfo]) -> Vec<String> {
    let mut seen = HashSet::new();
    logistics_info
        .iter()
        .flat_map(LogisticsInfo::ships_to)
        .filter(|country| seen.insert(country.as_str()))
        .cloned()
        .collect()
}

/// Every delivery option of every item, once per ID, in first-seen order.
fn unique_delivery_options(logistics_info: &[LogisticsInfo]) -> Vec<DeliveryOption> {
    let mut seen = HashSet::new();
    logistics_info
        .iter()
        .flat_map(LogisticsInfo::slas)
        .filter(|option| seen.insert(&option.id))
        .cloned()
        .collect()
}
