//! Delivery option filtering and formatting.
//!
//! The checkout offers a single delivery option for the whole order, while
//! the platform computes options per item. These functions reconcile the
//! per-item lists into one.

use tracing::warn;

use crate::types::{DeliveryOption, DeliveryOptionId, LogisticsInfo, ShippingEstimate};

use super::payload::FormattedDeliveryOption;
use super::rules::ShippingRulesConfig;

/// Whether `options` contains an option with the given ID.
#[must_use]
pub fn has_delivery_option(options: &[DeliveryOption], id: &DeliveryOptionId) -> bool {
    options.iter().any(|option| &option.id == id)
}

/// Drop options the checkout cannot offer as a single order-wide choice.
///
/// Pickup points and scheduled options are removed unless `config` enables
/// them. With `require_common_options`, an option must also be available to
/// every logistics entry.
#[must_use]
pub fn filter_delivery_options(
    options: Vec<DeliveryOption>,
    logistics_info: &[LogisticsInfo],
    config: &ShippingRulesConfig,
) -> Vec<DeliveryOption> {
    options
        .into_iter()
        .filter(|option| config.include_pickup_points || !option.is_pickup_point())
        .filter(|option| config.include_scheduled || !option.is_scheduled())
        .filter(|option| {
            !config.require_common_options
                || (!logistics_info.is_empty()
                    && logistics_info
                        .iter()
                        .all(|entry| has_delivery_option(entry.slas(), &option.id)))
        })
        .collect()
}

/// Merge each option with its per-item counterparts for display.
#[must_use]
pub fn format_delivery_options(
    options: &[DeliveryOption],
    logistics_info: &[LogisticsInfo],
) -> Vec<FormattedDeliveryOption> {
    options
        .iter()
        .map(|option| format_delivery_option(option, logistics_info))
        .collect()
}

fn format_delivery_option(
    option: &DeliveryOption,
    logistics_info: &[LogisticsInfo],
) -> FormattedDeliveryOption {
    let per_item: Vec<&DeliveryOption> = logistics_info
        .iter()
        .filter_map(|entry| entry.delivery_option(&option.id))
        .collect();

    let price = per_item
        .iter()
        .fold(0_i64, |total, sla| total.saturating_add(sla.price()));
    let estimate = longest_estimate(&per_item)
        .unwrap_or_else(|| option.shipping_estimate().unwrap_or_default().to_owned());
    let is_selected = !logistics_info.is_empty()
        && logistics_info
            .iter()
            .all(|entry| entry.selected_sla() == Some(&option.id));

    FormattedDeliveryOption {
        id: option.id.clone(),
        name: option.name().map(str::to_owned),
        price,
        estimate,
        is_selected,
    }
}

fn longest_estimate(options: &[&DeliveryOption]) -> Option<String> {
    options
        .iter()
        .filter_map(|option| match option.estimate() {
            Ok(estimate) => Some(estimate),
            Err(e) => {
                warn!(
                    delivery_option = %option.id,
                    estimate = option.shipping_estimate().unwrap_or_default(),
                    error = %e,
                    "Skipping unreadable shipping estimate"
                );
                None
            }
        })
        .max_by_key(ShippingEstimate::as_minutes)
        .map(|estimate| estimate.to_string())
}
