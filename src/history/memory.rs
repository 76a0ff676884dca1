use super::{HistoryError, HistoryProvider};
use crate::presentation::parse_date;
use crate::types::{Segment, TrendPoint};
use crate::utils::month_start;
use anyhow::{Context, Result};
use serde::Deserialize;
use std::collections::HashMap;
use std::path::Path;
use tracing::info;

/// A trend observation as stored on disk.
#[derive(Debug, Clone, Deserialize)]
pub struct TrendRecord {
    pub district_id: u32,
    pub room_count: u32,
    /// `YYYY-MM-DD`, only year and month are kept
    pub date: String,
    pub price: f64,
    pub sample_size: u32,
}

impl TryFrom<TrendRecord> for TrendPoint {
    type Error = HistoryError;

    fn try_from(record: TrendRecord) -> Result<Self, Self::Error> {
        let date = parse_date(&record.date).map_err(|e| {
            HistoryError::invalid_record(format!("bad date {:?}: {}", record.date, e))
        })?;

        if !record.price.is_finite() || record.price <= 0.0 {
            return Err(HistoryError::invalid_record(format!(
                "price must be positive, got {} for {}",
                record.price, record.date
            )));
        }

        Ok(TrendPoint {
            date,
            district_id: record.district_id,
            room_count: record.room_count,
            price: record.price,
            sample_size: record.sample_size,
        })
    }
}

/// Price history held in memory, one ordered series per segment.
#[derive(Debug, Clone, Default)]
pub struct InMemoryHistory {
    series: HashMap<Segment, Vec<TrendPoint>>,
}

impl InMemoryHistory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_points(points: impl IntoIterator<Item = TrendPoint>) -> Self {
        let mut history = Self::new();
        for point in points {
            history.insert(point);
        }
        history
    }

    pub fn from_records(records: Vec<TrendRecord>) -> Result<Self, HistoryError> {
        let points = records
            .into_iter()
            .map(TrendPoint::try_from)
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self::from_points(points))
    }

    pub fn from_json_file(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("Reading price history from {}", path.display()))?;

        let records: Vec<TrendRecord> =
            serde_json::from_str(&raw).context("Parsing price history records")?;

        let history = Self::from_records(records).context("Validating price history records")?;

        info!(
            "Loaded price history for {} segments from {}",
            history.segment_count(),
            path.display()
        );

        Ok(history)
    }

    /// Adds a point to its segment's series. A second point for the same month replaces the first.
    pub fn insert(&mut self, mut point: TrendPoint) {
        point.date = month_start(point.date);
        let series = self.series.entry(point.segment()).or_default();

        match series.binary_search_by_key(&point.date, |existing| existing.date) {
            Ok(idx) => series[idx] = point,
            Err(idx) => series.insert(idx, point),
        }
    }

    pub fn segment_count(&self) -> usize {
        self.series.len()
    }
}

impl HistoryProvider for InMemoryHistory {
    async fn fetch_series(
        &self,
        segment: Segment,
        months: u32,
    ) -> Result<Vec<TrendPoint>, HistoryError> {
        let series = self
            .series
            .get(&segment)
            .ok_or_else(|| HistoryError::segment_not_found(segment))?;

        let start = series.len().saturating_sub(months as usize);
        Ok(series[start..].to_vec())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use std::io::Write;

    fn create_test_point(month: u32, day: u32, price: f64) -> TrendPoint {
        TrendPoint {
            date: NaiveDate::from_ymd_opt(2024, month, day).unwrap(),
            district_id: 1,
            room_count: 2,
            price,
            sample_size: 40,
        }
    }

    fn create_test_record(date: &str, price: f64) -> TrendRecord {
        TrendRecord {
            district_id: 2,
            room_count: 1,
            date: date.to_string(),
            price,
            sample_size: 25,
        }
    }

    #[tokio::test]
    async fn test_insert_keeps_series_ordered() {
        let history = InMemoryHistory::from_points(vec![
            create_test_point(3, 1, 1020.0),
            create_test_point(1, 1, 1000.0),
            create_test_point(2, 1, 1010.0),
        ]);

        let series = history.fetch_series(Segment::new(1, 2), 12).await.unwrap();
        let prices: Vec<f64> = series.iter().map(|p| p.price).collect();
        assert_eq!(prices, vec![1000.0, 1010.0, 1020.0]);
    }

    #[tokio::test]
    async fn test_same_month_replaces_point() {
        let history = InMemoryHistory::from_points(vec![
            create_test_point(1, 5, 1000.0),
            create_test_point(1, 20, 1005.0),
        ]);

        let series = history.fetch_series(Segment::new(1, 2), 12).await.unwrap();
        assert_eq!(series.len(), 1);
        assert_eq!(series[0].price, 1005.0);
        assert_eq!(series[0].date, NaiveDate::from_ymd_opt(2024, 1, 1).unwrap());
    }

    #[tokio::test]
    async fn test_fetch_returns_trailing_window() {
        let history =
            InMemoryHistory::from_points((1..=12).map(|m| create_test_point(m, 1, 900.0 + m as f64)));

        let series = history.fetch_series(Segment::new(1, 2), 3).await.unwrap();
        let months: Vec<u32> = series.iter().map(|p| chrono::Datelike::month(&p.date)).collect();
        assert_eq!(months, vec![10, 11, 12]);

        assert!(history.fetch_series(Segment::new(1, 2), 0).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_unknown_segment_is_error() {
        let history = InMemoryHistory::from_points(vec![create_test_point(1, 1, 1000.0)]);

        let err = history.fetch_series(Segment::new(5, 3), 12).await.unwrap_err();
        assert_eq!(
            err,
            HistoryError::SegmentNotFound {
                district_id: 5,
                room_count: 3
            }
        );
    }

    #[test]
    fn test_records_validated() {
        let ok = InMemoryHistory::from_records(vec![
            create_test_record("2024-01-15", 1100.0),
            create_test_record("2024-02-15", 1110.0),
        ])
        .unwrap();
        assert_eq!(ok.segment_count(), 1);

        let bad_date = InMemoryHistory::from_records(vec![create_test_record("2024/01/15", 1100.0)]);
        assert!(matches!(bad_date, Err(HistoryError::InvalidRecord { .. })));

        let bad_price = InMemoryHistory::from_records(vec![create_test_record("2024-01-15", 0.0)]);
        assert!(matches!(bad_price, Err(HistoryError::InvalidRecord { .. })));
    }

    #[tokio::test]
    async fn test_from_json_file() {
        let path = std::env::temp_dir().join(format!("realty-trends-{}.json", std::process::id()));
        {
            let mut file = std::fs::File::create(&path).unwrap();
            write!(
                file,
                r#"[
                    {{"district_id": 3, "room_count": 2, "date": "2024-02-01", "price": 860.0, "sample_size": 12}},
                    {{"district_id": 3, "room_count": 2, "date": "2024-01-01", "price": 850.0, "sample_size": 10}},
                    {{"district_id": 1, "room_count": 1, "date": "2024-01-01", "price": 900.0, "sample_size": 33}}
                ]"#
            )
            .unwrap();
        }

        let history = InMemoryHistory::from_json_file(&path).unwrap();
        std::fs::remove_file(&path).unwrap();

        assert_eq!(history.segment_count(), 2);
        let series = history.fetch_series(Segment::new(3, 2), 12).await.unwrap();
        assert_eq!(series.len(), 2);
        assert_eq!(series[0].price, 850.0);
        assert_eq!(series[1].sample_size, 12);
    }

    #[test]
    fn test_missing_file_is_error() {
        let result = InMemoryHistory::from_json_file(Path::new("/nonexistent/history.json"));
        assert!(result.is_err());
    }
}
