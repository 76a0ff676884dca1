use strum_macros::{Display, EnumIter};

/// Base price per square meter for districts missing from the catalog.
pub const DEFAULT_BASE_PRICE: f64 = 900.0;

/// Room-count tiers quoted for every district.
pub const ROOM_TIERS: [u32; 2] = [1, 2];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, Display)]
#[strum(serialize_all = "title_case")]
pub enum District {
    Botanica,
    Centru,
    Ciocana,
}

impl District {
    pub fn from_id(district_id: u32) -> Option<Self> {
        match district_id {
            1 => Some(District::Botanica),
            2 => Some(District::Centru),
            3 => Some(District::Ciocana),
            _ => None,
        }
    }

    pub fn id(&self) -> u32 {
        match self {
            District::Botanica => 1,
            District::Centru => 2,
            District::Ciocana => 3,
        }
    }

    /// Starting price per square meter used when synthesizing a series.
    /// One-room flats are quoted separately, larger flats share a tier.
    pub fn base_price(&self, room_count: u32) -> f64 {
        let single_room = room_count == 1;
        match self {
            District::Botanica => {
                if single_room {
                    900.0
                } else {
                    950.0
                }
            }
            District::Centru => {
                if single_room {
                    1050.0
                } else {
                    1150.0
                }
            }
            District::Ciocana => {
                if single_room {
                    800.0
                } else {
                    850.0
                }
            }
        }
    }
}

pub fn base_price_for(district_id: u32, room_count: u32) -> f64 {
    District::from_id(district_id)
        .map(|district| district.base_price(room_count))
        .unwrap_or(DEFAULT_BASE_PRICE)
}
