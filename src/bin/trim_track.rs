use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use log::{info, LevelFilter};
use trail_track::{
    config::SimplifyConfig, export_data, import_data, logs, summary::SimplifyReport,
    track_simplifier::FirstPointPolicy, utils::Meters,
};

#[derive(Copy, Clone, Debug, ValueEnum)]
enum LogLevel {
    Off,
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<LogLevel> for LevelFilter {
    fn from(value: LogLevel) -> Self {
        match value {
            LogLevel::Off => LevelFilter::Off,
            LogLevel::Error => LevelFilter::Error,
            LogLevel::Warn => LevelFilter::Warn,
            LogLevel::Info => LevelFilter::Info,
            LogLevel::Debug => LevelFilter::Debug,
            LogLevel::Trace => LevelFilter::Trace,
        }
    }
}

/// Drop track points that are closer than a distance threshold to the last
/// kept point.
#[derive(Parser, Debug)]
#[command(name = "trim_track", version)]
struct Args {
    /// GeoJSON FeatureCollection holding the track
    input: PathBuf,

    /// Minimum geodesic distance in meters between kept points
    #[arg(short, long, default_value_t = 100.0)]
    threshold: f64,

    /// Index of the feature whose geometry is the track
    #[arg(short, long, default_value_t = 0)]
    feature: usize,

    #[arg(long, value_enum, default_value_t = FirstPointPolicy::AlwaysKeep)]
    first_point: FirstPointPolicy,

    /// Write the simplified track here (`.gpx` for GPX, GeoJSON otherwise)
    #[arg(short, long)]
    output: Option<PathBuf>,

    #[arg(long, value_enum, default_value_t = LogLevel::Info)]
    log_level: LogLevel,

    #[arg(long)]
    log_file: Option<PathBuf>,
}

fn is_gpx(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| e.eq_ignore_ascii_case("gpx"))
}

fn main() -> Result<()> {
    let args = Args::parse();
    logs::init(args.log_level.into(), args.log_file.as_deref())?;

    let config = SimplifyConfig {
        threshold: Meters(args.threshold),
        first_point: args.first_point,
        feature_index: args.feature,
    };
    info!("running with {config:?}");

    let loaded = import_data::load_geojson(&args.input, config.feature_index)?;
    let simplified = config.apply(&loaded.track)?;
    let report = SimplifyReport::new(&loaded.track, &simplified);
    println!("{report}");

    if let Some(output) = &args.output {
        let mut writer = BufWriter::new(
            File::create(output)
                .with_context(|| format!("failed to create {}", output.display()))?,
        );
        let written = if is_gpx(output) {
            export_data::write_gpx(&simplified, loaded.name.as_deref(), &mut writer)
        } else {
            export_data::write_geojson(&loaded, &simplified, &mut writer)
        };
        written
            .and_then(|_| writer.flush().map_err(anyhow::Error::from))
            .with_context(|| format!("failed to write {}", output.display()))?;
        info!("wrote {} points to {}", simplified.len(), output.display());
    }
    Ok(())
}
