//! Integration tests for the extraction → comparison pipeline
//!
//! These tests drive the public API the way a caller would:
//! - Decoded PCM in, AudioFeatures out, score out
//! - Score properties (self-similarity, symmetry, range, duration penalty)
//! - Alternate weightings loaded from configuration
//! - Sharing one extractor/comparator across threads

use std::f32::consts::PI;
use std::sync::Arc;
use std::thread;

use audio_compare::analysis::{FeatureComparator, FeatureExtractor};
use audio_compare::config::{AppConfig, SimilarityWeights};
use audio_compare::error::{AnalysisError, AnalysisErrorCodes, ErrorCode};
use audio_compare::{compare_features, extract_features, AudioFeatures};

const SAMPLE_RATE: f32 = 16000.0;

fn sine(frequency: f32, amplitude: f32, seconds: f32) -> Vec<f32> {
    let len = (SAMPLE_RATE * seconds) as usize;
    (0..len)
        .map(|i| amplitude * (2.0 * PI * frequency * i as f32 / SAMPLE_RATE).sin())
        .collect()
}

fn square(frequency: f32, amplitude: f32, seconds: f32) -> Vec<f32> {
    sine(frequency, 1.0, seconds)
        .into_iter()
        .map(|s| if s >= 0.0 { amplitude } else { -amplitude })
        .collect()
}

fn features_of(samples: &[f32]) -> AudioFeatures {
    let duration = samples.len() as f32 / SAMPLE_RATE;
    extract_features(samples, SAMPLE_RATE, duration).expect("valid input")
}

fn corpus() -> Vec<AudioFeatures> {
    vec![
        features_of(&sine(220.0, 0.8, 1.0)),
        features_of(&sine(440.0, 0.3, 1.0)),
        features_of(&sine(3000.0, 0.5, 0.5)),
        features_of(&square(110.0, 0.9, 2.0)),
        features_of(&vec![0.0; 4000]),
        features_of(&[0.25]),
    ]
}

#[test]
fn test_self_similarity_across_corpus() {
    for features in corpus() {
        let score = compare_features(&features, &features);
        assert!((score - 1.0).abs() < 1e-6, "self-similarity {}", score);
    }
}

#[test]
fn test_symmetry_and_range_across_corpus() {
    let corpus = corpus();
    for a in &corpus {
        for b in &corpus {
            let ab = compare_features(a, b);
            let ba = compare_features(b, a);
            assert_eq!(ab, ba);
            assert!((0.0..=1.0).contains(&ab), "score {} out of range", ab);
        }
    }
}

#[test]
fn test_similar_clips_score_higher_than_different_clips() {
    let reference = features_of(&sine(440.0, 0.5, 1.0));
    let louder = features_of(&sine(440.0, 0.6, 1.0));
    let different = features_of(&square(3000.0, 0.9, 1.0));

    let close = compare_features(&reference, &louder);
    let far = compare_features(&reference, &different);
    println!("close={} far={}", close, far);
    assert!(close > far);
}

#[test]
fn test_duration_penalty_applied_end_to_end() {
    let comparator = FeatureComparator::default();
    let long = features_of(&sine(440.0, 0.5, 2.0));
    let short = features_of(&sine(440.0, 0.5, 1.0));

    let breakdown = comparator.breakdown(&long, &short);
    assert!((breakdown.duration_penalty - 0.5).abs() < 1e-6);
    assert!((breakdown.score - breakdown.weighted_total * 0.5).abs() < 1e-6);
}

#[test]
fn test_square_wave_energy_and_normalization() {
    let samples = square(50.0, 0.7, 1.0);
    let features = features_of(&samples);

    assert!((features.energy - 0.7).abs() < 1e-5, "energy {}", features.energy);
    assert_eq!(features.max_amplitude, 0.7);
    assert!(features.waveform.iter().all(|&x| x == 1.0 || x == -1.0));
}

#[test]
fn test_alternating_signal_crossing_rate() {
    let samples: Vec<f32> = (0..1000)
        .map(|i| if i % 2 == 0 { 1.0 } else { -1.0 })
        .collect();
    let features = extract_features(&samples, 1000.0, 1.0).unwrap();

    assert_eq!(features.zero_crossings, 999);
    assert_eq!(features.zero_crossing_rate(), 999.0);
}

#[test]
fn test_invalid_input_is_rejected_with_codes() {
    let err = extract_features(&[], SAMPLE_RATE, 1.0).unwrap_err();
    assert_eq!(err.code(), AnalysisErrorCodes::EMPTY_SAMPLES);

    let err = extract_features(&[0.1], -8000.0, 1.0).unwrap_err();
    assert_eq!(err.code(), AnalysisErrorCodes::INVALID_SAMPLE_RATE);

    let err = extract_features(&[0.1], SAMPLE_RATE, 0.0).unwrap_err();
    assert_eq!(err, AnalysisError::InvalidDuration { duration: 0.0 });
    assert!(err.is_invalid_input());
}

#[test]
fn test_config_driven_pipeline() {
    let json = r#"{
        "extraction": { "fft_size": 1024 },
        "comparison": { "weights": {
            "waveform": 0.0, "energy": 0.5, "zero_crossing_rate": 0.5,
            "spectral_centroid": 0.0, "spectral_flatness": 0.0
        } }
    }"#;
    let config: AppConfig = serde_json::from_str(json).unwrap();
    config.validate().unwrap();

    let extractor = FeatureExtractor::with_config(&config.extraction).unwrap();
    let comparator = FeatureComparator::new(config.comparison.weights);
    assert_eq!(extractor.fft_size(), 1024);

    let a = extractor.extract(&sine(440.0, 0.5, 1.0), SAMPLE_RATE, 1.0).unwrap();
    let b = extractor.extract(&sine(440.0, 0.25, 1.0), SAMPLE_RATE, 1.0).unwrap();

    // Same crossing rate, half the energy: 0.5 * 0.5 + 0.5 * 1.0
    let score = comparator.compare(&a, &b);
    assert!((score - 0.75).abs() < 1e-3, "score {}", score);
}

#[test]
fn test_default_weights_match_reference_blend() {
    let weights = SimilarityWeights::default();
    assert_eq!(weights.waveform, 0.3);
    assert_eq!(weights.energy, 0.15);
    assert_eq!(weights.zero_crossing_rate, 0.15);
    assert_eq!(weights.spectral_centroid, 0.2);
    assert_eq!(weights.spectral_flatness, 0.2);
}

#[test]
fn test_concurrent_extraction_and_comparison() {
    let extractor = Arc::new(FeatureExtractor::new());
    let comparator = Arc::new(FeatureComparator::default());
    let reference = Arc::new(
        extractor
            .extract(&sine(440.0, 0.5, 0.5), SAMPLE_RATE, 0.5)
            .unwrap(),
    );

    let handles: Vec<_> = (0..4)
        .map(|_| {
            let extractor = Arc::clone(&extractor);
            let comparator = Arc::clone(&comparator);
            let reference = Arc::clone(&reference);
            thread::spawn(move || {
                let features = extractor
                    .extract(&sine(440.0, 0.5, 0.5), SAMPLE_RATE, 0.5)
                    .unwrap();
                comparator.compare(&reference, &features)
            })
        })
        .collect();

    for handle in handles {
        let score = handle.join().expect("worker thread panicked");
        assert!((score - 1.0).abs() < 1e-6);
    }
}
