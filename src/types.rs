use chrono::{DateTime, NaiveDate, Utc};
use std::fmt;

/// A market slice: one district and one room-count bucket.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub struct Segment {
    pub district_id: u32,
    pub room_count: u32,
}

impl Segment {
    pub fn new(district_id: u32, room_count: u32) -> Self {
        Self {
            district_id,
            room_count,
        }
    }
}

impl fmt::Display for Segment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "district {} / {} rooms", self.district_id, self.room_count)
    }
}

/// One observed (or synthetic) monthly data point for a segment.
#[derive(Debug, Clone, PartialEq)]
pub struct TrendPoint {
    /// Calendar month of the observation. Only year and month are meaningful.
    pub date: NaiveDate,
    pub district_id: u32,
    pub room_count: u32,
    /// Average price per square meter
    pub price: f64,
    /// Number of properties backing the average
    pub sample_size: u32,
}

impl TrendPoint {
    pub fn segment(&self) -> Segment {
        Segment::new(self.district_id, self.room_count)
    }
}

/// Result of a forecast run for a segment.
#[derive(Debug, Clone, PartialEq)]
pub struct PredictionResult {
    /// Most recent known average price, 0 when the segment has no data.
    pub current_avg_price: f64,
    /// `None` when the series was too short to fit a trend.
    pub prediction_6m: Option<f64>,
    pub prediction_12m: Option<f64>,
    /// Always within [0.5, 0.95]
    pub confidence: f64,
    /// The exact time the prediction was generated UTC.
    pub prediction_date: DateTime<Utc>,
}

impl PredictionResult {
    pub fn is_forecast_available(&self) -> bool {
        self.prediction_6m.is_some() && self.prediction_12m.is_some()
    }
}
