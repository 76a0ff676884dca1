/*
Prediction Confidence
Scores how far a forecast built from a series can be trusted, from three independent factors:
  - data volume: more months of history score higher (weight 0.4)
  - consistency: lower coefficient of variation of price scores higher (weight 0.4)
  - sample size: larger average number of observations per month scores higher (weight 0.2)
The weighted average is clamped to [0.5, 0.95].
*/

use crate::types::TrendPoint;
use tracing::debug;

pub const MIN_CONFIDENCE: f64 = 0.5;
pub const MAX_CONFIDENCE: f64 = 0.95;

const DATA_WEIGHT: f64 = 0.4;
const CONSISTENCY_WEIGHT: f64 = 0.4;
const SAMPLE_WEIGHT: f64 = 0.2;

/// Variation above this stops lowering the consistency factor.
const MAX_VARIATION: f64 = 0.3;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ConfidenceBreakdown {
    pub data: f64,
    pub consistency: f64,
    pub sample: f64,
    pub combined: f64,
}

pub fn data_volume_confidence(count: usize) -> f64 {
    match count {
        0..=5 => 0.60,
        6..=11 => 0.75,
        12..=23 => 0.85,
        _ => 0.90,
    }
}

/// Population coefficient of variation of the prices. Empty or zero-mean series count as fully varied.
pub fn coefficient_of_variation(prices: &[f64]) -> f64 {
    if prices.is_empty() {
        return 1.0;
    }

    let n = prices.len() as f64;
    let mean = prices.iter().sum::<f64>() / n;
    if mean <= 0.0 {
        return 1.0;
    }

    let variance = prices.iter().map(|p| (p - mean).powi(2)).sum::<f64>() / n;
    variance.sqrt() / mean
}

pub fn consistency_confidence(prices: &[f64]) -> f64 {
    1.0 - coefficient_of_variation(prices).min(MAX_VARIATION)
}

pub fn sample_size_confidence(avg_sample_size: f64) -> f64 {
    if avg_sample_size < 10.0 {
        0.70
    } else if avg_sample_size < 30.0 {
        0.80
    } else if avg_sample_size < 50.0 {
        0.90
    } else {
        0.95
    }
}

pub fn confidence_breakdown(series: &[TrendPoint]) -> ConfidenceBreakdown {
    let prices: Vec<f64> = series.iter().map(|point| point.price).collect();

    let avg_sample_size = if series.is_empty() {
        0.0
    } else {
        series.iter().map(|point| f64::from(point.sample_size)).sum::<f64>() / series.len() as f64
    };

    let data = data_volume_confidence(series.len());
    let consistency = consistency_confidence(&prices);
    let sample = sample_size_confidence(avg_sample_size);

    let combined = (data * DATA_WEIGHT + consistency * CONSISTENCY_WEIGHT + sample * SAMPLE_WEIGHT)
        .clamp(MIN_CONFIDENCE, MAX_CONFIDENCE);

    ConfidenceBreakdown {
        data,
        consistency,
        sample,
        combined,
    }
}

pub fn calculate_prediction_confidence(series: &[TrendPoint]) -> f64 {
    let breakdown = confidence_breakdown(series);

    debug!(
        data = breakdown.data,
        consistency = breakdown.consistency,
        sample = breakdown.sample,
        "Confidence {} over {} points",
        breakdown.combined,
        series.len()
    );

    breakdown.combined
}
