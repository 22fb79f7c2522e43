//! Basic logger usage example
//!
//! Demonstrates module loggers, the three formatters and the process-wide
//! default logger.
//!
//! Run with: cargo run --example basic_usage

use module_logger::prelude::*;
use module_logger::{attrs, infof};

fn main() -> Result<()> {
    println!("=== Module Logger - Basic Usage Example ===\n");

    // Free functions go through the process-wide "main" logger
    println!("1. Default logger (INFO, line format on stdout):");
    module_logger::info("application starting", &attrs!["version" => "0.1.0"]);
    module_logger::debug("hidden at the default threshold", &[]);

    // A module logger with its own threshold and two outputs
    println!("\n2. Module logger fanning out to tag and JSON formats:");
    let http = Logger::builder("http")
        .level(LogLevel::Debug)
        .output(Output::stdout(TagFormatter::new()))
        .output(Output::stdout(JsonFormatter::new()))
        .build();
    http.debug("request", &attrs!["method" => "GET", "path" => "/health"]);
    infof!(http, "served {} requests", 42);

    // Coloured level column on a terminal
    println!("\n3. Coloured line output:");
    let ui = Logger::builder("ui")
        .output(Output::stdout(LineFormatter::new().with_colors(true)))
        .build();
    ui.warning("low disk space", &attrs!["free_mb" => 512]);

    // Error convenience prepends err=...
    println!("\n4. Errors:");
    let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "config.toml missing");
    let config = Logger::new("config");
    config.error("falling back to defaults", &io_err, &attrs!["path" => "config.toml"]);

    // Raising the process-wide threshold affects every logger without its own
    println!("\n5. Process-wide threshold set to WARN:");
    module_logger::set_default_level(LogLevel::Warning);
    config.info("hidden now", &[]);
    config.warning("still visible", &[]);
    http.debug("unaffected: http has its own threshold", &[]);

    println!("\n=== Example completed successfully! ===");

    Ok(())
}
