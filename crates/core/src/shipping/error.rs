//! Error types for shipping transformations.

use thiserror::Error;

use crate::types::AddressId;

/// Errors that can occur while building shipping payloads.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ShippingError {
    /// None of the order form's selected addresses is a delivery address.
    #[error("order form has no selected delivery address")]
    NoSelectedAddress,

    /// The requested address is not among the customer's available addresses.
    #[error("address not found: {0}")]
    AddressNotFound(AddressId),

    /// The order form carries no shipping section.
    #[error("order form has no shipping data")]
    MissingShippingData,
}
