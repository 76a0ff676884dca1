use crate::districts::{District, ROOM_TIERS};
use crate::history::{HistoryError, HistoryProvider};
use crate::models::{calculate_prediction_confidence, forecast, PredictionError};
use crate::types::{PredictionResult, Segment, TrendPoint};
use crate::utils::month_index;
use chrono::{DateTime, Utc};
use futures::future::join_all;
use strum::IntoEnumIterator;
use tracing::{info, warn};

pub const DEFAULT_HISTORY_MONTHS: u32 = 12;
pub const SHORT_HORIZON_MONTHS: u32 = 6;
pub const LONG_HORIZON_MONTHS: u32 = 12;

pub type Clock = fn() -> DateTime<Utc>;

/// Combines price history with the forecasting models to answer trend and prediction requests.
pub struct PredictionService<H> {
    history: H,
    history_months: u32,
    clock: Clock,
}

impl<H: HistoryProvider> PredictionService<H> {
    pub fn new(history: H, history_months: u32) -> Self {
        Self {
            history,
            history_months,
            clock: Utc::now,
        }
    }

    pub fn with_clock(mut self, clock: Clock) -> Self {
        self.clock = clock;
        self
    }

    /// Trailing `months` of the segment's series, unchanged, for charting.
    pub async fn get_trend_report(
        &self,
        district_id: u32,
        room_count: u32,
        months: u32,
    ) -> Result<Vec<TrendPoint>, PredictionError> {
        let segment = validate_segment(district_id, room_count)?;
        if months == 0 {
            return Err(PredictionError::invalid_request("months must be positive"));
        }

        info!("Trend report for {} over {} months", segment, months);

        let mut series = self.history.fetch_series(segment, months).await?;

        let excess = series.len().saturating_sub(months as usize);
        series.drain(..excess);

        Ok(series)
    }

    pub async fn get_prediction(
        &self,
        district_id: u32,
        room_count: u32,
    ) -> Result<PredictionResult, PredictionError> {
        let segment = validate_segment(district_id, room_count)?;

        info!("Prediction for {} from {} months of history", segment, self.history_months);

        let series = self.history.fetch_series(segment, self.history_months).await?;
        let result = self.predict_from_series(&series);

        if !result.is_forecast_available() {
            warn!(
                "Forecast unavailable for {}: {} points of history",
                segment,
                series.len()
            );
        }

        Ok(result)
    }

    /// Builds a prediction from an already fetched series.
    pub fn predict_from_series(&self, series: &[TrendPoint]) -> PredictionResult {
        let now = (self.clock)();
        let current_month = month_index(now.date_naive());

        PredictionResult {
            current_avg_price: series.last().map(|point| point.price).unwrap_or(0.0),
            prediction_6m: forecast(series, SHORT_HORIZON_MONTHS, current_month),
            prediction_12m: forecast(series, LONG_HORIZON_MONTHS, current_month),
            confidence: calculate_prediction_confidence(series),
            prediction_date: now,
        }
    }

    /// Predictions for every catalog district and room tier, fetched concurrently.
    ///
    /// Segments the history has no series for are left out. Any other failure fails the overview.
    pub async fn get_district_overview(
        &self,
    ) -> Result<Vec<(District, u32, PredictionResult)>, PredictionError> {
        let requests = District::iter().flat_map(|district| {
            ROOM_TIERS.into_iter().map(move |room_count| async move {
                let result = self.get_prediction(district.id(), room_count).await;
                (district, room_count, result)
            })
        });

        let mut overview = Vec::new();
        for (district, room_count, result) in join_all(requests).await {
            match result {
                Ok(prediction) => overview.push((district, room_count, prediction)),
                Err(PredictionError::DataUnavailable(HistoryError::SegmentNotFound { .. })) => {
                    warn!("Skipping {} with {} rooms: no price history", district, room_count);
                }
                Err(e) => return Err(e),
            }
        }

        Ok(overview)
    }
}

fn validate_segment(district_id: u32, room_count: u32) -> Result<Segment, PredictionError> {
    if district_id == 0 {
        return Err(PredictionError::invalid_request("district_id must be positive"));
    }
    if room_count == 0 {
        return Err(PredictionError::invalid_request("room_count must be positive"));
    }
    Ok(Segment::new(district_id, room_count))
}
