//! Request payloads sent back to the platform after a shipping change.

use tracing::debug;

use crate::types::{Address, AddressId, DeliveryOptionId, LogisticsInfo, OrderForm, ShippingData};

use super::error::ShippingError;
use super::payload::ShippingRequestPayload;
use super::rules::ShippingRules;

/// Attach `address` to every logistics entry.
///
/// Each entry is cloned with only its `address_id` replaced, so every other
/// field goes back to the platform as it was received; `None` yields an
/// empty list. `clearAddressIfPostalCodeNotFound: false` is added only when
/// the address is geolocated, so the platform keeps it even if the postal
/// code lookup fails.
#[must_use]
pub fn build_shipping_request(
    rules: &impl ShippingRules,
    address: &Address,
    logistics_info: Option<&[LogisticsInfo]>,
) -> ShippingRequestPayload {
    let has_geocoordinates = rules.address_has_geocoordinates(address);

    let logistics_info: Vec<LogisticsInfo> = logistics_info
        .unwrap_or_default()
        .iter()
        .map(|entry| {
            let mut entry = entry.clone();
            entry.address_id = address.address_id.clone().into();
            entry
        })
        .collect();

    debug!(
        address_id = %address.address_id,
        entries = logistics_info.len(),
        has_geocoordinates,
        "Built shipping request"
    );

    ShippingRequestPayload {
        logistics_info,
        selected_addresses: vec![address.clone()],
        clear_address_if_postal_code_not_found: has_geocoordinates.then_some(false),
    }
}

/// Select `delivery_option_id` on every entry that offers it.
///
/// Entries without the option keep their current selection. The payload is
/// built for the order form's selected delivery address.
///
/// # Errors
///
/// Returns [`ShippingError::NoSelectedAddress`] if none of the selected
/// addresses is a delivery address.
pub fn apply_delivery_option_selection(
    rules: &impl ShippingRules,
    shipping_data: &ShippingData,
    delivery_option_id: &DeliveryOptionId,
) -> Result<ShippingRequestPayload, ShippingError> {
    let logistics_info: Vec<LogisticsInfo> = shipping_data
        .logistics_info()
        .iter()
        .map(|entry| {
            let mut entry = entry.clone();
            if rules.has_delivery_option(entry.slas(), delivery_option_id) {
                entry.selected_sla = delivery_option_id.clone().into();
            }
            entry
        })
        .collect();

    let address = rules
        .selected_delivery_address(&shipping_data.selected_addresses)
        .ok_or(ShippingError::NoSelectedAddress)?;

    debug!(
        delivery_option = %delivery_option_id,
        address_id = %address.address_id,
        "Applying delivery option selection"
    );

    Ok(build_shipping_request(rules, address, Some(logistics_info.as_slice())))
}

/// Ship the order form to one of the customer's available addresses.
///
/// # Errors
///
/// Returns [`ShippingError::MissingShippingData`] if the order form has no
/// shipping section, or [`ShippingError::AddressNotFound`] if `address_id`
/// is not one of its available addresses.
pub fn build_address_request(
    rules: &impl ShippingRules,
    order_form: &OrderForm,
    address_id: &AddressId,
) -> Result<ShippingRequestPayload, ShippingError> {
    let shipping_data = order_form
        .shipping_data
        .as_ref()
        .ok_or(ShippingError::MissingShippingData)?;

    let address = shipping_data
        .available_address(address_id)
        .ok_or_else(|| ShippingError::AddressNotFound(address_id.clone()))?;

    Ok(build_shipping_request(
        rules,
        address,
        shipping_data.logistics_info.as_deref(),
    ))
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::indexing_slicing)]
mod tests {
    use super::*;
    use crate::shipping::rules::StandardShippingRules;
    use crate::types::{AddressType, DeliveryOption, Field};
    use serde_json::json;

    const RULES: StandardShippingRules =
        StandardShippingRules::new(crate::shipping::ShippingRulesConfig {
            include_pickup_points: false,
            include_scheduled: false,
            require_common_options: true,
        });

    fn entry(slas: &[&str], selected: Option<&str>) -> LogisticsInfo {
        LogisticsInfo {
            slas: slas
                .iter()
                .map(|id| DeliveryOption::new(*id))
                .collect::<Vec<_>>()
                .into(),
            selected_sla: selected.map_or(Field::Null, |id| DeliveryOptionId::from(id).into()),
            ..LogisticsInfo::default()
        }
    }

    fn home() -> Address {
        Address {
            address_type: AddressType::Residential.into(),
            ..Address::new("home")
        }
    }

    #[test]
    fn test_every_entry_gets_address_id() {
        let logistics = vec![entry(&["a"], None), entry(&["b"], None)];
        let payload = build_shipping_request(&RULES, &home(), Some(logistics.as_slice()));

        assert_eq!(payload.logistics_info.len(), 2);
        assert!(
            payload
                .logistics_info
                .iter()
                .all(|e| e.address_id().map(AddressId::as_str) == Some("home"))
        );
        assert_eq!(payload.selected_addresses, vec![home()]);
    }

    #[test]
    fn test_absent_logistics_is_empty() {
        let payload = build_shipping_request(&RULES, &home(), None);
        assert!(payload.logistics_info.is_empty());
    }

    #[test]
    fn test_input_entries_untouched() {
        let logistics = vec![entry(&["a"], None)];
        let _ = build_shipping_request(&RULES, &home(), Some(logistics.as_slice()));
        assert!(logistics[0].address_id().is_none());
    }

    #[test]
    fn test_clear_flag_follows_geocoordinates() {
        let plain = build_shipping_request(&RULES, &home(), None);
        assert_eq!(plain.clear_address_if_postal_code_not_found, None);

        let mut located = home();
        located.geo_coordinates = vec![-43.2, -22.9].into();
        let payload = build_shipping_request(&RULES, &located, None);
        assert_eq!(payload.clear_address_if_postal_code_not_found, Some(false));
    }

    #[test]
    fn test_selection_only_where_offered() {
        let shipping_data = ShippingData {
            logistics_info: Some(vec![
                entry(&["Normal", "Express"], Some("Normal")),
                entry(&["Normal"], Some("Normal")),
            ]),
            selected_addresses: vec![home()],
            ..ShippingData::default()
        };

        let payload =
            apply_delivery_option_selection(&RULES, &shipping_data, &"Express".into()).unwrap();
        let selected: Vec<_> = payload
            .logistics_info
            .iter()
            .map(|e| e.selected_sla().map(DeliveryOptionId::as_str))
            .collect();
        assert_eq!(selected, vec![Some("Express"), Some("Normal")]);
    }

    #[test]
    fn test_selection_is_idempotent() {
        let shipping_data = ShippingData {
            logistics_info: Some(vec![entry(&["Normal"], None), entry(&["Express"], None)]),
            selected_addresses: vec![home()],
            ..ShippingData::default()
        };
        let id = DeliveryOptionId::from("Normal");

        let once = apply_delivery_option_selection(&RULES, &shipping_data, &id).unwrap();
        let again_input = ShippingData {
            logistics_info: Some(once.logistics_info.clone()),
            ..shipping_data
        };
        let twice = apply_delivery_option_selection(&RULES, &again_input, &id).unwrap();
        assert_eq!(once, twice);
    }

    #[test]
    fn test_selection_without_address_fails() {
        let shipping_data = ShippingData {
            logistics_info: Some(vec![entry(&["Normal"], None)]),
            selected_addresses: vec![Address {
                address_type: AddressType::Search.into(),
                ..Address::new("search")
            }],
            ..ShippingData::default()
        };
        let result = apply_delivery_option_selection(&RULES, &shipping_data, &"Normal".into());
        assert_eq!(result, Err(ShippingError::NoSelectedAddress));
    }

    #[test]
    fn test_address_request_uses_available_address() {
        let order_form = OrderForm {
            shipping_data: Some(ShippingData {
                logistics_info: Some(vec![entry(&["Normal"], None)]),
                available_addresses: vec![home(), Address::new("work")],
                ..ShippingData::default()
            }),
            ..OrderForm::default()
        };

        let payload = build_address_request(&RULES, &order_form, &"work".into()).unwrap();
        assert_eq!(payload.selected_addresses[0].address_id.as_str(), "work");
        assert_eq!(
            payload.logistics_info[0].address_id(),
            Some(&AddressId::from("work"))
        );
    }

    #[test]
    fn test_address_request_errors() {
        assert_eq!(
            build_address_request(&RULES, &OrderForm::default(), &"home".into()),
            Err(ShippingError::MissingShippingData)
        );

        let order_form = OrderForm {
            shipping_data: Some(ShippingData::default()),
            ..OrderForm::default()
        };
        assert_eq!(
            build_address_request(&RULES, &order_form, &"home".into()),
            Err(ShippingError::AddressNotFound("home".into()))
        );
    }

    #[test]
    fn test_entries_copied_verbatim_apart_from_address_id() {
        let raw_entry = json!({
            "itemIndex": 0,
            "shipsTo": ["BRA"],
            "slas": [{ "id": "x", "deliveryChannel": "drone" }],
            "selectedSla": null,
            "selectedDeliveryChannel": "drone",
            "lockTTL": "10d"
        });
        let raw_address = json!({
            "addressId": "pad",
            "addressType": "drone-pad",
            "receiverName": null
        });
        let entry: LogisticsInfo = serde_json::from_value(raw_entry.clone()).unwrap();
        let address: Address = serde_json::from_value(raw_address.clone()).unwrap();

        let entries = vec![entry];
        let payload = build_shipping_request(&RULES, &address, Some(entries.as_slice()));
        let value = serde_json::to_value(&payload).unwrap();

        let mut expected_entry = raw_entry;
        expected_entry["addressId"] = json!("pad");
        assert_eq!(value["logisticsInfo"], json!([expected_entry]));
        assert_eq!(value["selectedAddresses"], json!([raw_address]));
    }
}
