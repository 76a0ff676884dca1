use crate::types::{Segment, TrendPoint};
use std::future::Future;
use thiserror::Error;

pub mod memory;
pub mod synthetic;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum HistoryError {
    #[error("No price history for district {district_id} with {room_count} rooms")]
    SegmentNotFound { district_id: u32, room_count: u32 },

    #[error("Price history unavailable: {message}")]
    Unavailable { message: String },

    #[error("Invalid price history record: {message}")]
    InvalidRecord { message: String },
}

impl HistoryError {
    pub fn segment_not_found(segment: Segment) -> Self {
        Self::SegmentNotFound {
            district_id: segment.district_id,
            room_count: segment.room_count,
        }
    }

    pub fn unavailable(message: impl Into<String>) -> Self {
        Self::Unavailable {
            message: message.into(),
        }
    }

    pub fn invalid_record(message: impl Into<String>) -> Self {
        Self::InvalidRecord {
            message: message.into(),
        }
    }
}

/// Source of monthly price observations for a segment.
pub trait HistoryProvider: Send + Sync {
    /// Returns up to `months` trailing points, oldest first, one per calendar month.
    /// An empty series is a valid answer.
    fn fetch_series(
        &self,
        segment: Segment,
        months: u32,
    ) -> impl Future<Output = Result<Vec<TrendPoint>, HistoryError>> + Send;
}
