//! Dashboard example: load records from JSON and print every derived view.
//!
//! Run with: cargo run --example dashboard [records.json] [field]
//!
//! Without a file a small built-in sample is used. Set `RUST_LOG=debug`
//! to see what the library logs while computing.

use std::env;
use std::fs;

use coinframe::prelude::*;

const SAMPLE: &str = r#"{
  "items": [
    {"date": "2024-01-03", "coin": "bitcoin",  "price": 44100.0, "volume": 2.1e10, "market_cap": 8.6e11},
    {"date": "2024-01-01", "coin": "bitcoin",  "price": 42200.0, "volume": 1.8e10, "market_cap": 8.3e11},
    {"date": "2024-01-02", "coin": "bitcoin",  "price": 45000.0, "volume": 2.6e10, "market_cap": 8.8e11},
    {"date": "2024-01-01", "coin": "ethereum", "price": 2280.0,  "volume": 7.9e9,  "market_cap": 2.7e11},
    {"date": "2024-01-02", "coin": "ethereum", "price": 2350.0,  "volume": 9.4e9,  "market_cap": 2.8e11},
    {"date": "2024-01-03", "coin": "ethereum", "price": 2210.0,  "volume": 1.1e10, "market_cap": 2.6e11},
    {"date": "2024-01-01", "coin": "solana",   "price": 101.0,   "volume": 2.2e9,  "market_cap": 4.3e10},
    {"date": "2024-01-02", "coin": "solana",   "price": 109.0,   "volume": 2.9e9,  "market_cap": 4.7e10}
  ]
}"#;

fn main() -> Result<()> {
    env_logger::init();

    let args: Vec<String> = env::args().skip(1).collect();
    let json = match args.first() {
        Some(path) => fs::read_to_string(path)?,
        None => SAMPLE.to_string(),
    };
    let field: Field = match args.get(1) {
        Some(name) => name.parse()?,
        None => Field::Price,
    };

    let records = records_from_json(&json)?;
    println!("=== coinframe dashboard ({} records) ===\n", records.len());

    let config = DashboardConfig::new().field(field).window_size(2).top_n(3);
    let dashboard = Dashboard::compute(&records, &config)?;

    println!("--- Average price by day ---");
    for day in &dashboard.daily_average {
        println!("{}  {:>12.2}", day.date, day.avg_price);
    }

    println!("\n--- Rolling {} (window {}) ---", field, config.window_size);
    for point in &dashboard.rolling {
        println!("{:<10} {}  {:>16.2}", point.coin, point.date, point.value);
    }

    println!("\n--- Top {} by market cap ---", config.top_n);
    for record in &dashboard.top_by_market_cap {
        println!("{:<10} {}  {:>16.3e}", record.coin, record.date, record.market_cap);
    }

    println!("\n--- Daily % change in {} ---", field);
    for change in &dashboard.daily_change {
        println!("{:<10} {}  {:>8.2}%", change.coin, change.date, change.change);
    }

    println!("\n--- Normalized {} ---", field);
    for value in &dashboard.normalized {
        println!("{:<10} {}  {:>6.2}", value.coin, value.date, value.normalized);
    }

    println!("\nCoins: {}", dashboard.coins().join(", "));
    println!("\n--- Joined records ---\n{}", records_to_json(&dashboard.joined)?);
    println!("\n--- JSON ---\n{}", dashboard.to_json()?);

    Ok(())
}
