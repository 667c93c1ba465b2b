//! DeliveryQuote - Main Entry Point
//!
//! Quotes an order against a delivery type and a set of add-ons, or compares
//! every delivery type side by side.

use anyhow::{Context, Result};
use clap::Parser;
use rust_decimal::Decimal;
use serde::Serialize;
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

use delivery_quote::config::loader::load_config;
use delivery_quote::{
    available_base_types, build, cheapest, compare, quote, track_shipment, BaseKind,
    DeliveryStrategy, OptionSet, Order, OrderItem,
};

/// CLI arguments for the application
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to configuration file
    #[arg(short, long, default_value = "delivery.toml")]
    config: String,

    /// Log level (trace, debug, info, warn, error); overrides the config file
    #[arg(long)]
    log_level: Option<String>,

    /// Base delivery type (courier, postal, pickup)
    #[arg(short, long, env = "DELIVERY_BASE")]
    base: Option<String>,

    /// Add express handling
    #[arg(long)]
    express: bool,

    /// Add insurance for the declared value
    #[arg(long)]
    insurance: bool,

    /// Declared value of the goods; defaults to the sum of item prices
    #[arg(long)]
    declared_value: Option<Decimal>,

    /// Guarantee weekend delivery
    #[arg(long)]
    weekend: bool,

    /// Distance to destination in kilometers
    #[arg(short, long)]
    distance: Option<Decimal>,

    /// Item weight in kilograms (repeatable)
    #[arg(short, long = "weight", num_args = 1)]
    weights: Vec<Decimal>,

    /// Item price (repeatable, matched to --weight by position)
    #[arg(long = "price", num_args = 1)]
    prices: Vec<Decimal>,

    /// Look up this tracking number (requires --express)
    #[arg(long)]
    track: Option<String>,

    /// Quote every base delivery type with the same add-ons
    #[arg(long)]
    compare: bool,
}

fn parse_level(level: &str) -> Level {
    match level.to_lowercase().as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::INFO,
    }
}

fn print_json<T: Serialize>(value: &T, pretty: bool) -> Result<()> {
    let text = if pretty {
        serde_json::to_string_pretty(value)?
    } else {
        serde_json::to_string(value)?
    };
    println!("{}", text);
    Ok(())
}

fn main() -> Result<()> {
    // Parse command line arguments
    let args = Args::parse();

    let app = load_config(Some(&args.config)).context("failed to load configuration")?;

    // Initialize logging
    let level = parse_level(args.log_level.as_deref().unwrap_or(&app.settings.log_level));

    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(true)
        .with_writer(std::io::stderr)
        .finish();

    tracing::subscriber::set_global_default(subscriber)?;

    info!("Configuration file: {}", args.config);

    let items: Vec<OrderItem> = args
        .weights
        .iter()
        .enumerate()
        .map(|(i, weight)| {
            let price = args.prices.get(i).copied().unwrap_or_default();
            OrderItem::new(format!("item-{}", i + 1), *weight).with_price(price)
        })
        .collect();

    let distance = args.distance.unwrap_or(app.defaults.distance);
    let mut order = Order::from_items(items, distance);
    if let Some(value) = args.declared_value {
        order.declared_total_value = value;
    }

    let mut options = OptionSet::new();
    options.express = args.express;
    options.weekend = args.weekend;
    if args.insurance {
        options = options.with_insurance(order.declared_total_value);
    }

    if args.compare {
        let chains = BaseKind::all()
            .iter()
            .map(|kind| build(kind.as_str(), &options))
            .collect::<delivery_quote::Result<Vec<_>>>()?;
        let quotes = compare(&order, chains.iter().map(|c| c as &dyn DeliveryStrategy))?;
        if let Some(best) = cheapest(&quotes) {
            info!("Cheapest option: {} at {}", best.description, best.cost);
        }
        return print_json(&quotes, app.settings.pretty_output);
    }

    let base = args.base.unwrap_or_else(|| app.defaults.base_type.clone());
    let chain = build(&base, &options)
        .with_context(|| format!("available delivery types: {:?}", available_base_types()))?;

    let result = quote(&chain, &order)?;
    print_json(&result, app.settings.pretty_output)?;

    if let Some(tracking_id) = args.track {
        let status = track_shipment(&chain, &tracking_id)?;
        print_json(&status, app.settings.pretty_output)?;
        if let Some(service) = chain.express_service() {
            let extras = serde_json::json!({
                "features": service.features(),
                "express_insurance": service.express_insurance(order.declared_total_value),
            });
            print_json(&extras, app.settings.pretty_output)?;
        }
    }

    Ok(())
}
