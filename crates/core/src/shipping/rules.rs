//! Pluggable shipping rules.
//!
//! The transformations in this crate never decide on their own which address
//! is selected or which delivery options are shown. They ask a
//! [`ShippingRules`] implementation, so a store can swap in its own policy.
//! [`StandardShippingRules`] mirrors the platform checkout's behavior.

use crate::types::{Address, DeliveryOption, DeliveryOptionId, LogisticsInfo};

use super::address;
use super::delivery_options;
use super::payload::FormattedDeliveryOption;

/// Which delivery options the checkout may show.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShippingRulesConfig {
    /// Offer pickup-point options alongside home delivery.
    pub include_pickup_points: bool,
    /// Offer options that require picking a delivery window.
    pub include_scheduled: bool,
    /// Only offer options every item can be shipped with.
    pub require_common_options: bool,
}

impl Default for ShippingRulesConfig {
    fn default() -> Self {
        Self {
            include_pickup_points: false,
            include_scheduled: false,
            require_common_options: true,
        }
    }
}

/// Policy hooks consulted by the shipping transformations.
pub trait ShippingRules {
    /// Whether the address carries geocoordinates.
    fn address_has_geocoordinates(&self, address: &Address) -> bool;

    /// The delivery address among an order form's selected addresses.
    fn selected_delivery_address<'a>(&self, addresses: &'a [Address]) -> Option<&'a Address>;

    /// Remove options that should not be offered for the whole order.
    fn filter_delivery_options(
        &self,
        options: Vec<DeliveryOption>,
        logistics_info: &[LogisticsInfo],
    ) -> Vec<DeliveryOption>;

    /// Turn filtered options into their display form.
    fn format_delivery_options(
        &self,
        options: &[DeliveryOption],
        logistics_info: &[LogisticsInfo],
    ) -> Vec<FormattedDeliveryOption>;

    /// Whether a logistics entry's options include `id`.
    fn has_delivery_option(&self, options: &[DeliveryOption], id: &DeliveryOptionId) -> bool;
}

/// The platform checkout's shipping rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct StandardShippingRules {
    config: ShippingRulesConfig,
}

impl StandardShippingRules {
    #[must_use]
    pub const fn new(config: ShippingRulesConfig) -> Self {
        Self { config }
    }

    #[must_use]
    pub const fn config(&self) -> &ShippingRulesConfig {
        &self.config
    }
}

impl ShippingRules for StandardShippingRules {
    fn address_has_geocoordinates(&self, address: &Address) -> bool {
        address::address_has_geocoordinates(address)
    }

    fn selected_delivery_address<'a>(&self, addresses: &'a [Address]) -> Option<&'a Address> {
        address::selected_delivery_address(addresses)
    }

    fn filter_delivery_options(
        &self,
        options: Vec<DeliveryOption>,
        logistics_info: &[LogisticsInfo],
    ) -> Vec<DeliveryOption> {
        delivery_options::filter_delivery_options(options, logistics_info, &self.config)
    }

    fn format_delivery_options(
        &self,
        options: &[DeliveryOption],
        logistics_info: &[LogisticsInfo],
    ) -> Vec<FormattedDeliveryOption> {
        delivery_options::format_delivery_options(options, logistics_info)
    }

    fn has_delivery_option(&self, options: &[DeliveryOption], id: &DeliveryOptionId) -> bool {
        delivery_options::has_delivery_option(options, id)
    }
}
