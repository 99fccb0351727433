use derive_more::{Constructor, Display, From, Into};
use serde::{Deserialize, Serialize};
use strum::{Display as StrumDisplay, EnumIter, FromRepr};

/// Value Object - opaque item identifier taken from the route
#[derive(Debug, Clone, PartialEq, Eq, Hash, Display, Serialize, Deserialize)]
#[display(fmt = "{}", _0)]
pub struct ItemId(String);

impl ItemId {
    pub fn new(raw: impl Into<String>) -> Self {
        Self(raw.into().trim().to_string())
    }

    pub fn value(&self) -> &str {
        &self.0
    }

    /// Client-side route of the detail page for this item.
    pub fn detail_route(&self) -> String {
        format!("/items/{}", self.0)
    }
}

impl From<u32> for ItemId {
    fn from(id: u32) -> Self {
        Self(id.to_string())
    }
}

/// Value Object - price in refined metal
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, From, Into, Constructor, Serialize, Deserialize)]
pub struct Price(f64);

impl Price {
    pub fn value(&self) -> f64 {
        self.0
    }
}

/// Value Object - Unix timestamp in seconds
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, From, Into, Constructor, Serialize, Deserialize)]
pub struct Timestamp(i64);

impl Timestamp {
    pub fn value(&self) -> i64 {
        self.0
    }
}

/// Value Object - raw quality code as stored by the backend (`INTEGER`)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, From, Into, Constructor, Serialize, Deserialize)]
pub struct Quality(i32);

impl Quality {
    pub fn value(&self) -> i32 {
        self.0
    }

    /// Known tier, `None` for codes outside the table (including negative ones).
    pub fn kind(&self) -> Option<QualityKind> {
        u8::try_from(self.0).ok().and_then(QualityKind::from_repr)
    }

    /// Human readable tier name, `Quality N` for unknown codes.
    pub fn label(&self) -> String {
        match self.kind() {
            Some(kind) => kind.to_string(),
            None => format!("Quality {}", self.0),
        }
    }

    /// CSS class used to tint dropdown rows.
    pub fn css_class(&self) -> String {
        match self.kind() {
            Some(kind) => {
                let slug: String = kind
                    .to_string()
                    .chars()
                    .filter(|c| c.is_ascii_alphanumeric())
                    .collect();
                format!("quality-{}", slug.to_lowercase())
            }
            None => "quality-other".to_string(),
        }
    }
}

/// Known marketplace item tiers
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter, StrumDisplay, FromRepr)]
#[repr(u8)]
pub enum QualityKind {
    Normal = 0,
    Genuine = 1,
    Vintage = 3,
    Unusual = 5,
    Unique = 6,
    Community = 7,
    Valve = 8,
    #[strum(to_string = "Self-Made")]
    SelfMade = 9,
    Strange = 11,
    Haunted = 13,
    #[strum(to_string = "Collector's")]
    Collectors = 14,
    Decorated = 15,
}
