//! Checkout Shipping CLI - inspect shipping transformations on order forms.
//!
//! # Usage
//!
//! ```bash
//! # Show the checkout shipping view of an order form
//! shipping-cli view --order-form order-form.json
//!
//! # Build the payload for selecting a delivery option
//! shipping-cli --pretty select --order-form order-form.json --option Express
//!
//! # Build the payload for shipping to a saved address
//! shipping-cli address --order-form order-form.json --address-id home
//! ```
//!
//! # Commands
//!
//! - `view` - Derive countries, addresses and delivery options
//! - `select` - Apply a delivery option selection
//! - `address` - Ship to one of the available addresses
//!
//! Configuration is read from the environment, see [`config`].

#![cfg_attr(not(test), forbid(unsafe_code))]

use std::path::PathBuf;

use checkout_shipping_core::StandardShippingRules;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

mod commands;
mod config;

use config::{CliConfig, LogFormat};

#[derive(Parser)]
#[command(name = "shipping-cli")]
#[command(author, version, about = "Checkout shipping tools")]
struct Cli {
    /// Pretty-print JSON output
    #[arg(long, global = true)]
    pretty: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Derive the shipping view of an order form
    View {
        /// Path to the order form JSON
        #[arg(short, long)]
        order_form: PathBuf,
    },
    /// Build the payload for selecting a delivery option
    Select {
        /// Path to the order form JSON
        #[arg(short, long)]
        order_form: PathBuf,

        /// Delivery option ID
        #[arg(long)]
        option: String,
    },
    /// Build the payload for shipping to an available address
    Address {
        /// Path to the order form JSON
        #[arg(short, long)]
        order_form: PathBuf,

        /// Address ID among the order form's available addresses
        #[arg(short, long)]
        address_id: String,
    },
}

fn main() {
    let config = match CliConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            tracing_subscriber::fmt::init();
            tracing::error!("Invalid configuration: {e}");
            std::process::exit(1);
        }
    };

    init_tracing(config.log_format);

    let cli = Cli::parse();

    if let Err(e) = run(cli, &config) {
        tracing::error!("Command failed: {e}");
        std::process::exit(1);
    }
}

/// Initialize tracing, logging to stderr so stdout carries only JSON.
fn init_tracing(format: LogFormat) {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "checkout_shipping_core=info,shipping_cli=info".into());

    let builder = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr);

    match format {
        LogFormat::Text => builder.init(),
        LogFormat::Json => builder.json().init(),
    }
}

#[allow(clippy::print_stdout)]
fn run(cli: Cli, config: &CliConfig) -> Result<(), Box<dyn std::error::Error>> {
    let rules = StandardShippingRules::new(config.rules);

    let output = match cli.command {
        Commands::View { order_form } => commands::shipping::view(&rules, &order_form, cli.pretty)?,
        Commands::Select { order_form, option } => {
            commands::shipping::select(&rules, &order_form, &option, cli.pretty)?
        }
        Commands::Address {
            order_form,
            address_id,
        } => commands::shipping::address(&rules, &order_form, &address_id, cli.pretty)?,
    };

    println!("{output}");
    Ok(())
}
