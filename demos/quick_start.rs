use logerr::config::{self, ConfigOverrides, LibraryOverrides};
use logerr::hook::{self, LogRecord, LogSink};
use logerr::prelude::*;
use std::collections::HashMap;
use std::sync::Arc;

/// Prints every record, standing in for a real `tracing` subscriber.
struct StdoutSink;

impl LogSink for StdoutSink {
    fn emit(&self, record: &LogRecord) {
        println!("  [{}] {}", record.level, record.message);
    }
}

fn lookup_port(settings: &HashMap<&str, &str>) -> u16 {
    from_nullable(settings.get("port").copied())
        .filter_map(|raw| raw.parse::<u16>().ok())
        .filter(|port| *port >= 1024)
        .unwrap_or(8080)
}

fn parse_amount(raw: &str) -> Outcome<i64, String> {
    match raw.parse::<i64>() {
        Ok(amount) => Outcome::success(amount),
        Err(e) => failure!(format!("bad amount '{raw}': {e}"); raw = raw),
    }
}

fn main() {
    hook::set_sink(Arc::new(StdoutSink));
    println!("Running Quick Start examples...");

    // 1. Optional values
    println!("\n1. Optional values:");
    let settings = HashMap::from([("port", "80")]);
    println!("  port = {}", lookup_port(&settings));
    println!("  port = {}", lookup_port(&HashMap::new()));

    // 2. Outcomes
    println!("\n2. Outcomes:");
    let total = parse_amount("40")
        .chain(|amount| parse_amount("2").map(|tip| amount + tip))
        .unwrap_or(0);
    println!("  total = {total}");
    let fallback = parse_amount("forty").or_default(0);
    println!("  fallback = {fallback}");

    // 3. Panics become values
    println!("\n3. Panicking callbacks:");
    let caught = OptionalValue::present("x").map(|s| s.parse::<i32>().unwrap());
    println!("  {}", caught.reason().unwrap_or("present"));

    // 4. Configuration
    println!("\n4. Configuration:");
    let applied = configure(
        ConfigOverrides::new()
            .level("WARNING")
            .capture_locals(true)
            .format("{library} | {kind} at line {line}: {error} [{locals}]")
            .library("vendor", LibraryOverrides::new().enabled(false)),
    );
    println!("  applied: {}", applied.is_success());
    let _ = parse_amount("ten");
    let rejected = configure(ConfigOverrides::new().level("LOUD"));
    println!("  rejected: {}", rejected.is_failure());

    config::reset_config();
    hook::reset_sink();
}
