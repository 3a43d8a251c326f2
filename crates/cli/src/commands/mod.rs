//! Command implementations.

pub mod shipping;

use std::path::Path;

use checkout_shipping_core::{OrderForm, ShippingError};
use serde::Serialize;
use thiserror::Error;
use tracing::info;

/// Errors that can occur while running a command.
#[derive(Debug, Error)]
pub enum CommandError {
    /// The order form file could not be read.
    #[error("Failed to read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// The input or output was not valid JSON.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// The shipping transformation failed.
    #[error("Shipping error: {0}")]
    Shipping(#[from] ShippingError),
}

/// Read an order form from a JSON file.
///
/// # Errors
///
/// Returns an error if the file cannot be read or is not an order form.
pub fn read_order_form(path: &Path) -> Result<OrderForm, CommandError> {
    let content = std::fs::read_to_string(path).map_err(|source| CommandError::Io {
        path: path.display().to_string(),
        source,
    })?;
    let order_form: OrderForm = serde_json::from_str(&content)?;

    info!(
        path = %path.display(),
        has_shipping_data = order_form.shipping_data.is_some(),
        "Loaded order form"
    );

    Ok(order_form)
}

/// Render a value as JSON.
///
/// # Errors
///
/// Returns an error if the value cannot be serialized.
pub fn to_json<T: Serialize>(value: &T, pretty: bool) -> Result<String, CommandError> {
    let json = if pretty {
        serde_json::to_string_pretty(value)?
    } else {
        serde_json::to_string(value)?
    };
    Ok(json)
}
