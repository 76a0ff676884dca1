/*
Seasonal Adjustment
A fixed multiplier per calendar quarter, layered on top of the fitted trend rather than learned from data.

Winter (Jan-Mar) trades slightly below trend, spring (Apr-Jun) is the busiest season, summer (Jul-Sep) is
stable to slightly up, and autumn (Oct-Dec) slows down again.
*/

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Season {
    Winter,
    Spring,
    Summer,
    Autumn,
}

impl Season {
    /// `month` is 0-indexed (January = 0).
    pub fn from_month(month: u32) -> Self {
        match month % 12 {
            0..=2 => Season::Winter,
            3..=5 => Season::Spring,
            6..=8 => Season::Summer,
            _ => Season::Autumn,
        }
    }

    pub fn factor(&self) -> f64 {
        match self {
            Season::Winter => 0.98,
            Season::Spring => 1.03,
            Season::Summer => 1.01,
            Season::Autumn => 0.99,
        }
    }
}

/// 0-indexed calendar month `months_ahead` months after `current_month`.
pub fn target_month(current_month: u32, months_ahead: u32) -> u32 {
    (current_month % 12 + months_ahead % 12) % 12
}

pub fn seasonal_factor(current_month: u32, months_ahead: u32) -> f64 {
    Season::from_month(target_month(current_month, months_ahead)).factor()
}
