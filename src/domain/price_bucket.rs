use super::Bucket;

/// Monthly rent ranges, in whole dollars.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
pub enum PriceBucket {
    #[serde(rename = "ANY")]
    Any,
    #[serde(rename = "P0_399")]
    UpTo399,
    #[serde(rename = "P400_699")]
    From400To699,
    #[serde(rename = "P700_999")]
    From700To999,
    #[serde(rename = "P1000_1499")]
    From1000To1499,
    #[serde(rename = "P1500_PLUS")]
    From1500,
}

impl PriceBucket {
    /// Non-positive prices are treated as unknown.
    pub fn from_price(price: i64) -> Option<Self> {
        match price {
            i64::MIN..=0 => None,
            1..=399 => Some(Self::UpTo399),
            400..=699 => Some(Self::From400To699),
            700..=999 => Some(Self::From700To999),
            1000..=1499 => Some(Self::From1000To1499),
            _ => Some(Self::From1500),
        }
    }
}

impl Bucket for PriceBucket {
    const ANY: Self = Self::Any;
    const ALL: &'static [Self] = &[
        Self::Any,
        Self::UpTo399,
        Self::From400To699,
        Self::From700To999,
        Self::From1000To1499,
        Self::From1500,
    ];

    fn code(&self) -> &'static str {
        match self {
            Self::Any => "ANY",
            Self::UpTo399 => "P0_399",
            Self::From400To699 => "P400_699",
            Self::From700To999 => "P700_999",
            Self::From1000To1499 => "P1000_1499",
            Self::From1500 => "P1500_PLUS",
        }
    }

    fn label(&self) -> &'static str {
        match self {
            Self::Any => "Any Price",
            Self::UpTo399 => "$0 - $399",
            Self::From400To699 => "$400 - $699",
            Self::From700To999 => "$700 - $999",
            Self::From1000To1499 => "$1000 - $1499",
            Self::From1500 => "$1500+",
        }
    }

    fn phrase(&self) -> &'static str {
        match self {
            Self::Any => "Any price",
            Self::UpTo399 => "$0-399",
            Self::From400To699 => "$400-699",
            Self::From700To999 => "$700-999",
            Self::From1000To1499 => "$1000-1499",
            Self::From1500 => "$1500+",
        }
    }
}
