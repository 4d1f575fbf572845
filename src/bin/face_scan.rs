//! Command-line interface for face_scan
//!
//! Prints the JSON report to stdout and a human-readable summary to stderr.

use std::path::PathBuf;
use std::process;

use clap::Parser;
use face_scan::image_loader::{load_image, load_image_capped};
use face_scan::{analyze_face, AnalysisConfig, AnalysisError, FaceAnalysis, FaceImage};
use tracing::{debug, error, info, warn};
use tracing_subscriber::{fmt, EnvFilter};

/// Screen a facial photo for visible health indicators.
#[derive(Debug, Parser)]
#[command(name = "face_scan", version, about)]
struct Cli {
    /// Image file to analyze (jpg, png, gif, webp, tiff, bmp)
    image: PathBuf,

    /// JSON configuration file; defaults are used when omitted
    #[arg(long)]
    config: Option<PathBuf>,

    /// Skip per-region (forehead, cheeks, chin, under-eyes) analysis
    #[arg(long, default_value_t = false)]
    no_regions: bool,

    /// Downscale images larger than this many pixels before analysis
    #[arg(long)]
    max_pixels: Option<u64>,

    /// Print compact JSON instead of pretty-printed
    #[arg(long, default_value_t = false)]
    compact: bool,
}

fn init_logging() {
    let mut filter = EnvFilter::from_default_env();
    if let Ok(d) = "face_scan=info".parse() {
        filter = filter.add_directive(d);
    }

    fmt().with_env_filter(filter).with_writer(std::io::stderr).init();
}

fn run(cli: &Cli) -> Result<FaceAnalysis, AnalysisError> {
    let mut config = match &cli.config {
        Some(path) => {
            info!(path = %path.display(), "loading configuration");
            AnalysisConfig::from_json_file(path)?
        }
        None => AnalysisConfig::default(),
    };
    if cli.no_regions {
        config.regions.enabled = false;
    }

    let rgb = match cli.max_pixels {
        Some(cap) => load_image_capped(&cli.image, cap)?,
        None => load_image(&cli.image)?,
    };
    let (width, height) = rgb.dimensions();
    debug!(width, height, "decoded image");

    let image = FaceImage::from_rgb(&rgb)?;
    let report = analyze_face(&image, &config)?;

    info!(
        label = %report.diagnosis.label,
        confidence = %report.diagnosis.confidence,
        hue = report.statistics.mean_hue,
        saturation = report.statistics.mean_saturation,
        value = report.statistics.mean_value,
        "analysis complete"
    );
    Ok(report)
}

fn print_summary(report: &FaceAnalysis) {
    let stats = &report.statistics;
    let diagnosis = &report.diagnosis;

    eprintln!();
    eprintln!("Face Scan Summary:");
    eprintln!("  Result:         {} ({} confidence)", diagnosis.label, diagnosis.confidence);
    eprintln!("  Why:            {}", diagnosis.rationale);
    eprintln!("  Health score:   {}/100", diagnosis.health_score);
    eprintln!("  Recommendation: {}", diagnosis.recommendation);
    eprintln!(
        "  HSV means:      h={:.1}°, s={:.2}, v={:.2}",
        stats.mean_hue, stats.mean_saturation, stats.mean_value
    );
    eprintln!(
        "  Redness ratio:  {:.2}, darkness index: {:.2}",
        stats.redness_ratio, stats.darkness_index
    );

    for (region, label) in report.regional_findings() {
        warn!(?region, %label, "regional indicator differs from whole-face result");
    }

    eprintln!();
    eprintln!("This is a color-based screening aid, not a medical diagnosis.");
}

fn main() {
    init_logging();
    let cli = Cli::parse();

    match run(&cli) {
        Ok(report) => {
            let json = if cli.compact {
                serde_json::to_string(&report)
            } else {
                serde_json::to_string_pretty(&report)
            };
            match json {
                Ok(json) => println!("{}", json),
                Err(e) => {
                    error!("failed to serialize report: {}", e);
                    process::exit(1);
                }
            }
            print_summary(&report);
        }
        Err(err) => {
            error!("analysis failed: {}", err);
            eprintln!("{}", err.user_message());
            if err.is_recoverable() {
                eprintln!("Convert the image to RGB and try again.");
            }
            process::exit(1);
        }
    }
}
