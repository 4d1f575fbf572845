//! Generate the default configuration file
//!
//! Creates a JSON config with all default thresholds, ready for tuning.

use face_scan::AnalysisConfig;
use std::{env, path::Path, process};

fn main() {
    let args: Vec<String> = env::args().collect();

    if args.len() < 2 {
        eprintln!("Usage: {} <output_config.json>", args[0]);
        eprintln!();
        eprintln!("Example:");
        eprintln!("  {} config/face_scan.json", args[0]);
        process::exit(1);
    }

    let output_path = Path::new(&args[1]);

    // Create parent directory if needed
    if let Some(parent) = output_path.parent() {
        if let Err(e) = std::fs::create_dir_all(parent) {
            eprintln!("Error creating directory: {}", e);
            process::exit(1);
        }
    }

    let config = AnalysisConfig::default();

    match config.to_json_file(output_path) {
        Ok(_) => {
            let t = &config.thresholds;
            eprintln!("Configuration saved to {}", output_path.display());
            eprintln!();
            eprintln!("Config summary:");
            eprintln!(
                "  Jaundice:     hue {}, s > {:.2}, v > {:.2}",
                t.jaundice.hue_band, t.jaundice.min_saturation, t.jaundice.min_value
            );
            eprintln!(
                "  Cyanosis:     hue {}, s > {:.2}",
                t.cyanosis.hue_band, t.cyanosis.min_saturation
            );
            eprintln!(
                "  Anemia:       s < {:.2}, v > {:.2}",
                t.anemia.max_saturation, t.anemia.min_value
            );
            eprintln!(
                "  Inflammation: hue {}, redness > {:.2}",
                t.inflammation.hue_band, t.inflammation.min_redness_ratio
            );
            eprintln!(
                "  Fatigue:      darkness > {:.2}, s < {:.2}",
                t.fatigue.min_darkness_index, t.fatigue.max_saturation
            );
            eprintln!(
                "  Regions:      {}",
                if config.regions.enabled { "enabled" } else { "disabled" }
            );
        }
        Err(e) => {
            eprintln!("Error saving config: {}", e);
            process::exit(1);
        }
    }
}
