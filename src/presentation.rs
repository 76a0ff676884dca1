use crate::districts::District;
use crate::types::{PredictionResult, TrendPoint};
use crate::utils::{month_start, round_to_2_places};
use chrono::NaiveDate;
use serde::Serialize;

pub const DATE_FORMAT: &str = "%Y-%m-%d";

pub fn format_date(date: NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}

/// Parses a `YYYY-MM-DD` string down to the first day of its month.
pub fn parse_date(value: &str) -> Result<NaiveDate, chrono::ParseError> {
    NaiveDate::parse_from_str(value, DATE_FORMAT).map(month_start)
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TrendPointView {
    pub date: String,
    pub price: f64,
    pub sample_size: u32,
}

impl From<&TrendPoint> for TrendPointView {
    fn from(point: &TrendPoint) -> Self {
        Self {
            date: format_date(point.date),
            price: point.price,
            sample_size: point.sample_size,
        }
    }
}

/// Prices are rounded to cents, confidence is passed through.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PredictionView {
    pub current_avg_price: f64,
    pub prediction_6m: Option<f64>,
    pub prediction_12m: Option<f64>,
    pub forecast_available: bool,
    pub confidence: f64,
    pub prediction_date: String,
}

impl From<&PredictionResult> for PredictionView {
    fn from(result: &PredictionResult) -> Self {
        Self {
            current_avg_price: round_to_2_places(result.current_avg_price),
            prediction_6m: result.prediction_6m.map(round_to_2_places),
            prediction_12m: result.prediction_12m.map(round_to_2_places),
            forecast_available: result.is_forecast_available(),
            confidence: result.confidence,
            prediction_date: format_date(result.prediction_date.date_naive()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DistrictOverviewView {
    pub district_id: u32,
    pub name: String,
    pub room_count: u32,
    #[serde(flatten)]
    pub prediction: PredictionView,
}

impl DistrictOverviewView {
    pub fn new(district: District, room_count: u32, result: &PredictionResult) -> Self {
        Self {
            district_id: district.id(),
            name: district.to_string(),
            room_count,
            prediction: result.into(),
        }
    }
}

pub fn render_trend_report(points: &[TrendPoint]) -> serde_json::Result<String> {
    let views: Vec<TrendPointView> = points.iter().map(TrendPointView::from).collect();
    serde_json::to_string_pretty(&views)
}

pub fn render_prediction(result: &PredictionResult) -> serde_json::Result<String> {
    serde_json::to_string_pretty(&PredictionView::from(result))
}

pub fn render_district_overview(
    overview: &[(District, u32, PredictionResult)],
) -> serde_json::Result<String> {
    let views: Vec<DistrictOverviewView> = overview
        .iter()
        .map(|(district, room_count, result)| DistrictOverviewView::new(*district, *room_count, result))
        .collect();
    serde_json::to_string_pretty(&views)
}
