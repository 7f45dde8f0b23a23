use std::fs;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::{Context, Result};
use audio_compare::analysis::{AudioFeatures, FeatureComparator, FeatureExtractor, SimilarityBreakdown};
use audio_compare::config::AppConfig;
use audio_compare::decode::load_wav;
use audio_compare::error::{log_analysis_error, log_decode_error};
use clap::{Parser, Subcommand};
use serde::Serialize;

#[derive(Parser, Debug)]
#[command(
    name = "audio_compare_cli",
    about = "Extract audio fingerprints from WAV files and score their similarity"
)]
struct Cli {
    /// JSON configuration file (defaults are used when omitted or invalid)
    #[arg(long, global = true)]
    config: Option<PathBuf>,
    /// Log extraction and comparison details to stderr
    #[arg(long, short, global = true)]
    verbose: bool,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Print the feature report for one WAV file
    Extract {
        input: PathBuf,
        #[arg(long)]
        output: Option<PathBuf>,
        /// Include the normalized waveform in the report
        #[arg(long)]
        include_waveform: bool,
    },
    /// Score the similarity of two WAV files
    Compare {
        reference: PathBuf,
        candidate: PathBuf,
        /// Exit with status 2 when the score falls below this value
        #[arg(long)]
        threshold: Option<f32>,
        #[arg(long)]
        output: Option<PathBuf>,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match run(cli) {
        Ok(code) => code,
        Err(err) => {
            eprintln!("Error: {err:?}");
            ExitCode::from(1)
        }
    }
}

fn init_logging(verbose: bool) {
    let level = if verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::WARN
    };

    // stdout carries the JSON report
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();
}

fn run(cli: Cli) -> Result<ExitCode> {
    let config = cli
        .config
        .map(AppConfig::load_from_file)
        .unwrap_or_default();

    let extractor = FeatureExtractor::with_config(&config.extraction)?;

    match cli.command {
        Commands::Extract {
            input,
            output,
            include_waveform,
        } => run_extract(&extractor, &input, output, include_waveform),
        Commands::Compare {
            reference,
            candidate,
            threshold,
            output,
        } => {
            let comparator = FeatureComparator::new(config.comparison.weights);
            run_compare(
                &extractor,
                &comparator,
                &reference,
                &candidate,
                threshold,
                output,
            )
        }
    }
}

fn run_extract(
    extractor: &FeatureExtractor,
    input: &Path,
    output_path: Option<PathBuf>,
    include_waveform: bool,
) -> Result<ExitCode> {
    let (sample_rate, features) = extract_file(extractor, input)?;

    let report = FeatureReportPayload::new(input, sample_rate, &features, include_waveform);
    emit(&report, output_path)?;

    Ok(ExitCode::from(0))
}

fn run_compare(
    extractor: &FeatureExtractor,
    comparator: &FeatureComparator,
    reference: &Path,
    candidate: &Path,
    threshold: Option<f32>,
    output_path: Option<PathBuf>,
) -> Result<ExitCode> {
    let (reference_rate, reference_features) = extract_file(extractor, reference)?;
    let (candidate_rate, candidate_features) = extract_file(extractor, candidate)?;

    let breakdown = comparator.breakdown(&reference_features, &candidate_features);
    let matched = threshold.map(|t| breakdown.score >= t);

    let report = ComparisonReportPayload {
        reference: FeatureReportPayload::new(reference, reference_rate, &reference_features, false),
        candidate: FeatureReportPayload::new(candidate, candidate_rate, &candidate_features, false),
        breakdown,
        threshold,
        matched,
    };
    emit(&report, output_path)?;

    match matched {
        Some(false) => Ok(ExitCode::from(2)),
        _ => Ok(ExitCode::from(0)),
    }
}

fn extract_file(extractor: &FeatureExtractor, path: &Path) -> Result<(u32, AudioFeatures)> {
    let clip = load_wav(path)
        .map_err(|err| {
            log_decode_error(&err, "extract_file");
            err
        })
        .with_context(|| format!("decoding {}", path.display()))?;
    let features = clip
        .features(extractor)
        .map_err(|err| {
            log_analysis_error(&err, "extract_file");
            err
        })
        .with_context(|| format!("extracting features from {}", path.display()))?;
    Ok((clip.sample_rate, features))
}

fn emit<T: Serialize>(report: &T, output_path: Option<PathBuf>) -> Result<()> {
    let json = serde_json::to_string_pretty(report)?;

    if let Some(path) = output_path {
        fs::write(&path, json).with_context(|| format!("writing {}", path.display()))?;
    } else {
        println!("{json}");
    }

    Ok(())
}

#[derive(Serialize)]
struct FeatureReportPayload<'a> {
    file: String,
    sample_rate: u32,
    sample_count: usize,
    duration: f32,
    energy: f32,
    zero_crossings: u64,
    zero_crossing_rate: f32,
    max_amplitude: f32,
    spectral_centroid: f32,
    spectral_flatness: f32,
    #[serde(skip_serializing_if = "Option::is_none")]
    waveform: Option<&'a [f32]>,
}

impl<'a> FeatureReportPayload<'a> {
    fn new(
        path: &Path,
        sample_rate: u32,
        features: &'a AudioFeatures,
        include_waveform: bool,
    ) -> Self {
        Self {
            file: path.display().to_string(),
            sample_rate,
            sample_count: features.waveform.len(),
            duration: features.duration,
            energy: features.energy,
            zero_crossings: features.zero_crossings,
            zero_crossing_rate: features.zero_crossing_rate(),
            max_amplitude: features.max_amplitude,
            spectral_centroid: features.spectral_centroid,
            spectral_flatness: features.spectral_flatness,
            waveform: include_waveform.then_some(features.waveform.as_slice()),
        }
    }
}

#[derive(Serialize)]
struct ComparisonReportPayload<'a> {
    reference: FeatureReportPayload<'a>,
    candidate: FeatureReportPayload<'a>,
    #[serde(flatten)]
    breakdown: SimilarityBreakdown,
    #[serde(skip_serializing_if = "Option::is_none")]
    threshold: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    matched: Option<bool>,
}
