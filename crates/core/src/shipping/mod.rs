//! Shipping transformations between the order form and the checkout.
//!
//! # Operations
//!
//! - [`build_shipping_request`] - attach an address to every logistics entry
//! - [`apply_delivery_option_selection`] - apply a chosen delivery option
//! - [`build_address_request`] - ship to one of the customer's addresses
//! - [`derive_shipping_view`] - countries, addresses and delivery options to display
//!
//! Every operation borrows its input and returns freshly built values. The
//! address and delivery option policies come from a [`ShippingRules`]
//! implementation; [`StandardShippingRules`] is the default.
//!
//! # Example
//!
//! ```
//! use checkout_shipping_core::{OrderForm, StandardShippingRules, derive_shipping_view};
//!
//! let order_form: OrderForm = serde_json::from_str(r#"{ "shippingData": null }"#).unwrap();
//! let view = derive_shipping_view(&StandardShippingRules::default(), &order_form);
//!
//! assert!(view.countries.is_empty());
//! assert!(view.selected_address.is_none());
//! ```

mod address;
mod delivery_options;
mod error;
mod payload;
mod request;
mod rules;
mod view;

pub use address::{address_has_geocoordinates, selected_delivery_address};
pub use delivery_options::{
    filter_delivery_options, format_delivery_options, has_delivery_option,
};
pub use error::ShippingError;
pub use payload::{FormattedDeliveryOption, ShippingRequestPayload, ShippingView};
pub use request::{apply_delivery_option_selection, build_address_request, build_shipping_request};
pub use rules::{ShippingRules, ShippingRulesConfig, StandardShippingRules};
pub use view::derive_shipping_view;
