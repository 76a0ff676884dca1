/*
Synthetic price history.
Stands in for a real data store: every segment gets a deterministic monthly series that starts at the
district's base price and climbs 0.5% of that base each month, ending at the current month.
Sample sizes are drawn from [30, 50) with a generator seeded per segment, so repeated requests agree.
*/

use super::{HistoryError, HistoryProvider};
use crate::districts::base_price_for;
use crate::types::{Segment, TrendPoint};
use crate::utils::{month_start, months_before};
use chrono::{DateTime, Utc};
use rand::{rngs::StdRng, Rng, SeedableRng};
use tracing::debug;

const MONTHLY_GROWTH: f64 = 0.005;
const MIN_SAMPLE_SIZE: u32 = 30;
const MAX_SAMPLE_SIZE: u32 = 50;

#[derive(Debug, Clone)]
pub struct SyntheticHistory {
    seed: u64,
    clock: fn() -> DateTime<Utc>,
}

impl SyntheticHistory {
    pub fn new(seed: u64) -> Self {
        Self {
            seed,
            clock: Utc::now,
        }
    }

    pub fn with_clock(seed: u64, clock: fn() -> DateTime<Utc>) -> Self {
        Self { seed, clock }
    }

    fn segment_seed(&self, segment: Segment) -> u64 {
        let key = (u64::from(segment.district_id) << 32) | u64::from(segment.room_count);
        self.seed ^ key
    }

    pub fn generate(&self, segment: Segment, months: u32) -> Result<Vec<TrendPoint>, HistoryError> {
        let current_month = month_start((self.clock)().date_naive());
        let base_price = base_price_for(segment.district_id, segment.room_count);
        let mut rng = StdRng::seed_from_u64(self.segment_seed(segment));

        debug!(
            "Synthesizing {} months for {} from base price {}",
            months, segment, base_price
        );

        (0..months)
            .map(|i| {
                let date = months_before(current_month, months - 1 - i).ok_or_else(|| {
                    HistoryError::unavailable(format!(
                        "{} months before {} is out of calendar range",
                        months - 1 - i,
                        current_month
                    ))
                })?;

                Ok(TrendPoint {
                    date,
                    district_id: segment.district_id,
                    room_count: segment.room_count,
                    price: base_price * (1.0 + MONTHLY_GROWTH * i as f64),
                    sample_size: rng.random_range(MIN_SAMPLE_SIZE..MAX_SAMPLE_SIZE),
                })
            })
            .collect()
    }
}

impl HistoryProvider for SyntheticHistory {
    async fn fetch_series(
        &self,
        segment: Segment,
        months: u32,
    ) -> Result<Vec<TrendPoint>, HistoryError> {
        self.generate(segment, months)
    }
}
