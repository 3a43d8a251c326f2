//! Order-form types exchanged with the commerce platform.
//!
//! Field names follow the platform's camelCase JSON exactly.

pub mod address;
pub mod estimate;
pub mod field;
pub mod id;
pub mod logistics;
pub mod order_form;

pub use address::{Address, AddressType};
pub use estimate::{EstimateError, EstimateUnit, ShippingEstimate};
pub use field::Field;
pub use id::*;
pub use logistics::{DeliveryChannel, DeliveryOption, DeliveryWindow, LogisticsInfo, PickupStoreInfo};
pub use order_form::{OrderForm, ShippingData};

use serde::{Deserialize, Deserializer};

/// Deserialize `null` the same way as a missing field.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Option::unwrap_or_default)
}
