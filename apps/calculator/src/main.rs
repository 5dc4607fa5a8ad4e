//! # Layerline Calculator Entry Point
//!
//! Serves the profit calculator over stdin/stdout, one JSON command per line.
//!
//! ```text
//! $ echo '{"command":"set_hours_per_day","args":{"hours":6}}' | layerline-calculator
//! {"ok":{"product":"Custom Phone Stand","hoursPerDay":6.0,...}}
//! ```

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // The actual setup is in lib.rs for better testability
    layerline_calculator::run()
}
