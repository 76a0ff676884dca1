/*
Trend Forecasting (Linear Regression)
Fits an ordinary least squares line to the series, using each point's position as x and its price as y, then
extrapolates the line to the requested month and applies the seasonal multiplier for that month's quarter.

Position is used instead of the calendar date so uneven month lengths do not bend the fit.
*/

use super::seasonality::seasonal_factor;
use crate::types::TrendPoint;
use tracing::debug;

/// Returned when the series is too short to fit a line.
pub const NO_FORECAST: f64 = 0.0;

/// Fewest points a line can be fitted through.
pub const MIN_FORECAST_POINTS: usize = 2;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrendLine {
    pub slope: f64,
    pub intercept: f64,
}

impl TrendLine {
    /// Least squares fit of `prices` against their index.
    pub fn fit(prices: &[f64]) -> Self {
        if prices.is_empty() {
            return Self {
                slope: 0.0,
                intercept: 0.0,
            };
        }

        let n = prices.len() as f64;
        let x_mean = (n - 1.0) / 2.0;
        let y_mean = prices.iter().sum::<f64>() / n;

        let mut numerator = 0.0;
        let mut denominator = 0.0;

        for (i, price) in prices.iter().enumerate() {
            let x_diff = i as f64 - x_mean;
            let y_diff = price - y_mean;

            numerator += x_diff * y_diff;
            denominator += x_diff * x_diff;
        }

        let slope = if denominator != 0.0 {
            numerator / denominator
        } else {
            0.0
        };

        Self {
            slope,
            intercept: y_mean - slope * x_mean,
        }
    }

    pub fn value_at(&self, x: f64) -> f64 {
        self.intercept + self.slope * x
    }
}

/// Predicts the price `months_ahead` months after the last point of `series`.
///
/// `current_month` is the 0-indexed calendar month the forecast is made in and decides which seasonal
/// multiplier applies. Returns [`NO_FORECAST`] for series shorter than two points, and the last observed
/// price when the adjusted projection is not positive.
pub fn linear_regression_predict(series: &[TrendPoint], months_ahead: u32, current_month: u32) -> f64 {
    let Some(last) = series.last() else {
        return NO_FORECAST;
    };
    if series.len() < MIN_FORECAST_POINTS {
        return NO_FORECAST;
    }

    let prices: Vec<f64> = series.iter().map(|point| point.price).collect();
    let line = TrendLine::fit(&prices);

    let target_x = (series.len() - 1) as f64 + f64::from(months_ahead);
    let factor = seasonal_factor(current_month, months_ahead);
    let predicted_price = line.value_at(target_x) * factor;

    debug!(
        slope = line.slope,
        intercept = line.intercept,
        factor,
        months_ahead,
        "Fitted trend over {} points",
        series.len()
    );

    if predicted_price > 0.0 {
        predicted_price
    } else {
        last.price
    }
}
