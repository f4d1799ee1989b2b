use super::Bucket;

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
pub enum BedroomBucket {
    #[serde(rename = "ANY")]
    Any,
    #[serde(rename = "B1")]
    One,
    #[serde(rename = "B2")]
    Two,
    #[serde(rename = "B3")]
    Three,
    #[serde(rename = "B4")]
    Four,
    #[serde(rename = "B5_PLUS")]
    FivePlus,
}

impl BedroomBucket {
    /// Buckets a free-text bedroom count such as `"2 bed"` by its first number.
    /// Text without a positive number has no bucket.
    pub fn from_count_text(text: &str) -> Option<Self> {
        let digits: String = text
            .trim()
            .chars()
            .skip_while(|c| !c.is_ascii_digit())
            .take_while(|c| c.is_ascii_digit())
            .collect();

        match digits.parse::<u32>().ok()? {
            0 => None,
            1 => Some(Self::One),
            2 => Some(Self::Two),
            3 => Some(Self::Three),
            4 => Some(Self::Four),
            _ => Some(Self::FivePlus),
        }
    }
}

impl Bucket for BedroomBucket {
    const ANY: Self = Self::Any;
    const ALL: &'static [Self] = &[
        Self::Any,
        Self::One,
        Self::Two,
        Self::Three,
        Self::Four,
        Self::FivePlus,
    ];

    fn code(&self) -> &'static str {
        match self {
            Self::Any => "ANY",
            Self::One => "B1",
            Self::Two => "B2",
            Self::Three => "B3",
            Self::Four => "B4",
            Self::FivePlus => "B5_PLUS",
        }
    }

    fn label(&self) -> &'static str {
        match self {
            Self::Any => "Any",
            Self::One => "1 Bedroom",
            Self::Two => "2 Bedrooms",
            Self::Three => "3 Bedrooms",
            Self::Four => "4 Bedrooms",
            Self::FivePlus => "5+ Bedrooms",
        }
    }

    fn phrase(&self) -> &'static str {
        match self {
            Self::Any => "Any bedrooms",
            Self::One => "1 bedroom",
            Self::Two => "2 bedrooms",
            Self::Three => "3 bedrooms",
            Self::Four => "4 bedrooms",
            Self::FivePlus => "5+ bedrooms",
        }
    }
}
