//! Counselor domain models.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{CounselError, Result};

/// Highest rating a counselor can carry.
pub const MAX_RATING: f64 = 5.0;

/// A counselor profile as rendered in lists, search results and favorites.
///
/// `id` is mandatory. Records coming from untyped sources go through
/// [`CounselorRecord::from_value`], which rejects entries without an id
/// and fills every optional field with a defined default.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CounselorRecord {
    /// Stable identifier, unique within a list.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Primary specialty label.
    pub tag: String,
    /// Broader specialty set used for matching.
    #[serde(default)]
    pub specialties: Vec<String>,
    /// Average rating in `0.0..=5.0`; `0.0` means no reviews yet.
    #[serde(default)]
    pub rating: f64,
    /// Price per minute in coins.
    #[serde(default)]
    pub rate: u32,
    /// Avatar image reference.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
    #[serde(default)]
    pub is_online: bool,
    /// Years of experience.
    #[serde(default)]
    pub experience: u32,
}

impl CounselorRecord {
    /// Creates a record with the required fields; everything else defaulted.
    pub fn new(id: impl Into<String>, name: impl Into<String>, tag: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            tag: tag.into(),
            specialties: Vec::new(),
            rating: 0.0,
            rate: 0,
            avatar: None,
            is_online: false,
            experience: 0,
        }
    }

    pub fn with_specialties<I, S>(mut self, specialties: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.specialties = specialties.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_rating(mut self, rating: f64) -> Self {
        self.rating = rating;
        self
    }

    pub fn with_rate(mut self, rate: u32) -> Self {
        self.rate = rate;
        self
    }

    pub fn with_avatar(mut self, avatar: impl Into<String>) -> Self {
        self.avatar = Some(avatar.into());
        self
    }

    pub fn with_online(mut self, is_online: bool) -> Self {
        self.is_online = is_online;
        self
    }

    pub fn with_experience(mut self, experience: u32) -> Self {
        self.experience = experience;
        self
    }

    /// Key used for favorites and list identity.
    pub fn key(&self) -> &str {
        &self.id
    }

    /// Whether the record has any reviews.
    pub fn has_reviews(&self) -> bool {
        self.rating > 0.0
    }

    /// Returns true when `specialty` equals the tag or appears in `specialties`.
    pub fn has_specialty(&self, specialty: &str) -> bool {
        self.tag == specialty || self.specialties.iter().any(|s| s == specialty)
    }

    /// Builds a record from untyped JSON.
    ///
    /// Numeric ids are accepted and stringified. A missing or blank id is
    /// rejected. Ratings are clamped to `0.0..=5.0`; negative or
    /// non-numeric prices and experience become `0`. Non-string entries in
    /// `specialties` are skipped.
    pub fn from_value(value: &Value) -> Result<Self> {
        let obj = value
            .as_object()
            .ok_or_else(|| CounselError::invalid_record("expected a JSON object"))?;

        let id = match obj.get("id") {
            Some(Value::String(s)) if !s.trim().is_empty() => s.clone(),
            Some(Value::Number(n)) => n.to_string(),
            _ => {
                let name = obj.get("name").and_then(Value::as_str).unwrap_or("<unnamed>");
                return Err(CounselError::invalid_record(format!(
                    "record '{}' has no id",
                    name
                )));
            }
        };

        let string_field = |field: &str| {
            obj.get(field)
                .and_then(Value::as_str)
                .map(str::to_string)
                .unwrap_or_default()
        };

        let specialties = obj
            .get("specialties")
            .and_then(Value::as_array)
            .map(|items| {
                items
                    .iter()
                    .filter_map(Value::as_str)
                    .map(str::to_string)
                    .collect()
            })
            .unwrap_or_default();

        let rating = obj
            .get("rating")
            .and_then(Value::as_f64)
            .filter(|r| r.is_finite())
            .map(|r| r.clamp(0.0, MAX_RATING))
            .unwrap_or(0.0);

        Ok(Self {
            id,
            name: string_field("name"),
            tag: string_field("tag"),
            specialties,
            rating,
            rate: non_negative_u32(obj.get("rate")),
            avatar: obj.get("avatar").and_then(Value::as_str).map(str::to_string),
            is_online: obj.get("isOnline").and_then(Value::as_bool).unwrap_or(false),
            experience: non_negative_u32(obj.get("experience")),
        })
    }
}

fn non_negative_u32(value: Option<&Value>) -> u32 {
    value
        .and_then(Value::as_f64)
        .filter(|n| n.is_finite() && *n > 0.0)
        .map(|n| n.round().min(u32::MAX as f64) as u32)
        .unwrap_or(0)
}

/// Normalizes an untyped collection into well-formed records.
///
/// Anything other than a JSON array yields an empty list. Entries that
/// fail [`CounselorRecord::from_value`] are dropped with a warning.
pub fn normalize_counselors(value: &Value) -> Vec<CounselorRecord> {
    let Some(items) = value.as_array() else {
        tracing::warn!("Counselor collection is not an array; treating as empty");
        return Vec::new();
    };

    items
        .iter()
        .filter_map(|item| match CounselorRecord::from_value(item) {
            Ok(record) => Some(record),
            Err(e) => {
                tracing::warn!("Dropping counselor record: {}", e);
                None
            }
        })
        .collect()
}
