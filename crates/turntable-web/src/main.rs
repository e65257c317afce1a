//! Headless spin simulator (native).
//!
//! Usage: `turntable-sim [config.json]`

#[cfg(feature = "native")]
fn main() {
    use turntable_core::PageConfig;
    use turntable_web::{FlingSample, simulate_fling};

    env_logger::init();

    let config = match std::env::args().nth(1) {
        Some(path) => {
            let loaded = std::fs::read_to_string(&path)
                .map_err(|e| e.to_string())
                .and_then(|json| PageConfig::from_json(&json).map_err(|e| e.to_string()));
            match loaded {
                Ok(config) => config,
                Err(e) => {
                    log::error!("Failed to load {}: {}", path, e);
                    std::process::exit(1);
                }
            }
        }
        None => PageConfig::default(),
    };

    let spin = config.vinyl.spin;
    match serde_json::to_string_pretty(&spin) {
        Ok(json) => log::info!("Spin config: {}", json),
        Err(e) => log::warn!("Failed to print config: {}", e),
    }

    // A quick flick: 12° per 60 Hz sample for a tenth of a second
    let samples: Vec<FlingSample> = (0..7)
        .map(|i| FlingSample {
            angle: (i as f64 * 12.0) % 360.0,
            time_ms: i as f64 * 1000.0 / 60.0,
        })
        .collect();
    let trace = simulate_fling(spin, &samples, 1000.0 / 60.0);

    println!("release velocity: {:.1} deg/s", trace.release_velocity);
    println!("coast frames:     {}", trace.frames.len());
    println!("coast time:       {:.0} ms", trace.coast_ms());
    println!("final rotation:   {:.1} deg", trace.final_rotation());
    if !trace.settled {
        println!("(did not settle)");
    }
}

#[cfg(not(feature = "native"))]
fn main() {
    panic!("Native feature not enabled. Use `cargo run --features native`");
}
