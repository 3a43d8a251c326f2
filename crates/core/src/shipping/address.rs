//! Address helpers used when building shipping payloads.

use crate::types::Address;

/// Whether the address was geolocated by the platform.
#[must_use]
pub fn address_has_geocoordinates(address: &Address) -> bool {
    !address.geo_coordinates().is_empty()
}

/// The address goods will be delivered to, among an order form's
/// `selectedAddresses`.
///
/// Search and pickup addresses are skipped; the first deliverable one wins.
#[must_use]
pub fn selected_delivery_address(addresses: &[Address]) -> Option<&Address> {
    addresses.iter().find(|address| address.is_delivery_address())
}
