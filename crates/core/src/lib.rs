//! Checkout Shipping Core - order-form shipping transformations.
//!
//! This crate converts between the commerce platform's order form and the
//! shapes a checkout needs:
//! - a view of countries, addresses and delivery options to display
//! - request payloads sent back after the customer picks an address or a
//!   delivery option
//!
//! # Architecture
//!
//! The core crate contains only types and pure functions - no I/O, no HTTP
//! clients, no shared state. Callers fetch the order form, run it through
//! these functions, and send the resulting payload themselves.
//!
//! # Modules
//!
//! - [`types`] - Order form, address, logistics and delivery option types
//! - [`shipping`] - The transformations and the [`ShippingRules`] policy seam

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod shipping;
pub mod types;

pub use shipping::*;
pub use types::*;
