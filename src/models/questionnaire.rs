use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Context the outfit is worn in
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Occasion {
    Casual,
    College,
    Party,
    Formal,
}

impl Occasion {
    /// Case-insensitive match; `None` for anything unrecognized, including ""
    pub fn from_input(raw: &str) -> Option<Self> {
        match raw.to_lowercase().as_str() {
            "casual" => Some(Self::Casual),
            "college" => Some(Self::College),
            "party" => Some(Self::Party),
            "formal" => Some(Self::Formal),
            _ => None,
        }
    }
}

/// Fit and silhouette preference
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Gender {
    Female,
    Male,
    Neutral,
}

impl Gender {
    pub fn from_input(raw: &str) -> Option<Self> {
        match raw.to_lowercase().as_str() {
            "female" => Some(Self::Female),
            "male" => Some(Self::Male),
            "neutral" => Some(Self::Neutral),
            _ => None,
        }
    }
}

/// Overall vibe of the outfit
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Style {
    Minimal,
    Streetwear,
    Classic,
    Bold,
}

impl Style {
    pub fn from_input(raw: &str) -> Option<Self> {
        match raw.to_lowercase().as_str() {
            "minimal" => Some(Self::Minimal),
            "streetwear" => Some(Self::Streetwear),
            "classic" => Some(Self::Classic),
            "bold" => Some(Self::Bold),
            _ => None,
        }
    }
}

/// Where and how to shop
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Budget {
    Low,
    Medium,
    High,
}

impl Budget {
    pub fn from_input(raw: &str) -> Option<Self> {
        match raw.to_lowercase().as_str() {
            "low" => Some(Self::Low),
            "medium" => Some(Self::Medium),
            "high" => Some(Self::High),
            _ => None,
        }
    }
}

/// Body of `POST /suggest`
///
/// Every field is optional. Nulls and non-string values are read as absent
/// rather than rejecting the whole request.
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
pub struct SuggestRequest {
    #[serde(default, deserialize_with = "lenient_string")]
    pub occasion: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub gender: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub style: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub budget: Option<String>,
    /// Captured photo as a `data:image/...;base64,...` URL
    #[serde(default, deserialize_with = "lenient_string")]
    pub image: Option<String>,
}

fn lenient_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    match Value::deserialize(deserializer)? {
        Value::String(s) => Ok(Some(s)),
        _ => Ok(None),
    }
}
