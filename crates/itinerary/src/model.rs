use serde::{Deserialize, Serialize};

/// One of the two alternative day-by-day sequences the user can switch
/// between.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum RouteOption {
    #[default]
    Option1,
    Option2,
}

#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Language {
    #[default]
    En,
    De,
}

/// Canonical per-day unit. `day` is the sole join key between selector
/// buttons, day cards and map locations.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DayRecord {
    pub day: u32,
    pub date: Option<String>,
    pub title: String,
    pub notes: Option<String>,
    pub helpful_info: Option<String>,
    pub hotel: Option<String>,
    pub highlights: Vec<String>,
    pub helpful_links: Vec<String>,
    pub lat: Option<f64>,
    pub lng: Option<f64>,
    pub km: Option<String>,
    pub time: Option<String>,
}

/// `highlights` as found on disk. Legacy files carry one semicolon-delimited
/// string, current files a structured list. The variant also tells the
/// normalizer whether the record is already canonical.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum RawHighlights {
    Legacy(String),
    List(Vec<String>),
}

/// Loosely-typed day object as deserialized from an itinerary file.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawDay {
    pub day: Option<u32>,
    pub date: Option<String>,
    pub title: Option<String>,
    pub notes: Option<String>,
    pub helpful_info: Option<String>,
    pub hotel: Option<String>,
    pub highlights: Option<RawHighlights>,
    pub helpful_links: Option<Vec<String>>,
    pub lat: Option<f64>,
    pub lng: Option<f64>,
    pub km: Option<String>,
    pub time: Option<String>,
}
