//! Shipping commands.
//!
//! # Usage
//!
//! ```bash
//! # Show countries, addresses and delivery options for an order form
//! shipping-cli view --order-form order-form.json
//!
//! # Build the payload for selecting a delivery option
//! shipping-cli select --order-form order-form.json --option Express
//!
//! # Build the payload for shipping to a saved address
//! shipping-cli address --order-form order-form.json --address-id home
//! ```

use std::path::Path;

use checkout_shipping_core::{
    AddressId, DeliveryOptionId, ShippingError, StandardShippingRules,
    apply_delivery_option_selection, build_address_request, derive_shipping_view,
};
use tracing::info;

use super::{CommandError, read_order_form, to_json};

/// Derive the shipping view of an order form.
///
/// # Errors
///
/// Returns an error if the order form cannot be loaded.
pub fn view(
    rules: &StandardShippingRules,
    order_form: &Path,
    pretty: bool,
) -> Result<String, CommandError> {
    let order_form = read_order_form(order_form)?;
    let view = derive_shipping_view(rules, &order_form);

    info!(
        countries = view.countries.len(),
        delivery_options = view.delivery_options.len(),
        "Derived shipping view"
    );

    to_json(&view, pretty)
}

/// Build the request payload for selecting a delivery option.
///
/// # Errors
///
/// Returns an error if the order form cannot be loaded, has no shipping
/// data, or has no selected delivery address.
pub fn select(
    rules: &StandardShippingRules,
    order_form: &Path,
    option: &str,
    pretty: bool,
) -> Result<String, CommandError> {
    let order_form = read_order_form(order_form)?;
    let shipping_data = order_form
        .shipping_data
        .as_ref()
        .ok_or(ShippingError::MissingShippingData)?;

    let option = DeliveryOptionId::new(option);
    let payload = apply_delivery_option_selection(rules, shipping_data, &option)?;

    let selected = payload
        .logistics_info
        .iter()
        .filter(|entry| entry.selected_sla() == Some(&option))
        .count();
    info!(
        delivery_option = %option,
        selected,
        entries = payload.logistics_info.len(),
        "Applied delivery option"
    );

    to_json(&payload, pretty)
}

/// Build the request payload for shipping to one of the customer's addresses.
///
/// # Errors
///
/// Returns an error if the order form cannot be loaded or the address is
/// not one of its available addresses.
pub fn address(
    rules: &StandardShippingRules,
    order_form: &Path,
    address_id: &str,
    pretty: bool,
) -> Result<String, CommandError> {
    let order_form = read_order_form(order_form)?;
    let address_id = AddressId::new(address_id);
    let payload = build_address_request(rules, &order_form, &address_id)?;

    info!(
        address_id = %address_id,
        entries = payload.logistics_info.len(),
        "Built address request"
    );

    to_json(&payload, pretty)
}
