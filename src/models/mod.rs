use crate::types::TrendPoint;
use regression::{linear_regression_predict, MIN_FORECAST_POINTS};

pub mod confidence;
pub mod errors;
pub mod regression;
pub mod seasonality;

pub use confidence::calculate_prediction_confidence;
pub use errors::PredictionError;

/// Forecasts `months_ahead` months past the end of `series`, or `None` when no trend can be fitted.
/// A fitted series always yields `Some`, even when the fallback price is 0.
pub fn forecast(series: &[TrendPoint], months_ahead: u32, current_month: u32) -> Option<f64> {
    if series.len() < MIN_FORECAST_POINTS {
        return None;
    }
    Some(linear_regression_predict(series, months_ahead, current_month))
}
