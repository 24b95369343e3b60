//! Demonstrates the tracing events emitted on rejections and unmatched variants
//!
//! Run with: cargo run --example tracing_demo --features tracing

use unnulable::brand::{number, string};
use unnulable::data::{Cases, Data, Variant, EMPTY};
use unnulable::{Either, Maybe};

fn main() {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .init();

    tracing::info!("Starting tracing demo");

    // Rejections are logged at debug level with the brand and message
    for raw in ["3", "-2", "7.5", "x"] {
        let digit = Maybe::from_nullable(raw.parse::<f64>().ok())
            .to_either(format!("{} is not a number", raw))
            .flat_map(|n| Either::from_result(number::digit().construct(n).map_err(|e| e.to_string())));

        match digit {
            Either::Ok(d) => tracing::info!("accepted digit {}", d),
            Either::Error(e) => tracing::info!("rejected {:?}: {}", raw, e),
        }
    }

    match string::not_empty::<&str>().construct("   ") {
        Ok(name) => tracing::info!("accepted name {:?}", name.get()),
        Err(e) => tracing::info!("rejected name: {}", e),
    }

    // Unmatched variants are logged at warn level
    let status = Data::new([
        ("Active", Variant::builder(|since: u32| since)),
        ("Suspended", Variant::from(EMPTY)),
    ]);

    match status.value("Suspended") {
        Ok(suspended) => {
            let result = suspended.match_with(Cases::new().case("Active", |since: &u32| *since));
            if let Err(e) = result {
                tracing::error!("match failed: {}", e);
            }
        }
        Err(e) => tracing::error!("lookup failed: {}", e),
    }
}
