//! Filter criteria collected by the filter sheet.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Price ordering requested from the filter sheet.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum PriceSort {
    LowToHigh,
    HighToLow,
}

/// Primary ordering of a result list.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum SortBy {
    /// Keep the order of the input collection.
    #[default]
    Relevance,
    /// Highest rating first.
    Rating,
    /// Most years of experience first.
    Experience,
}

/// Screen-local constraints applied to a counselor list.
///
/// Every field is optional; an unset field does not constrain anything.
/// Criteria are never persisted.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct FilterCriteria {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price_sort: Option<PriceSort>,
    /// Rating floor in `1..=5`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_rating: Option<u8>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub online_only: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub specialty: Option<String>,
    /// Price ceiling in coins per minute.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_price: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sort_by: Option<SortBy>,
}

impl FilterCriteria {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_price_sort(mut self, price_sort: PriceSort) -> Self {
        self.price_sort = Some(price_sort);
        self
    }

    pub fn with_min_rating(mut self, min_rating: u8) -> Self {
        self.min_rating = Some(min_rating);
        self
    }

    pub fn with_online_only(mut self, online_only: bool) -> Self {
        self.online_only = Some(online_only);
        self
    }

    pub fn with_specialty(mut self, specialty: impl Into<String>) -> Self {
        self.specialty = Some(specialty.into());
        self
    }

    pub fn with_max_price(mut self, max_price: f64) -> Self {
        self.max_price = Some(max_price);
        self
    }

    pub fn with_sort_by(mut self, sort_by: SortBy) -> Self {
        self.sort_by = Some(sort_by);
        self
    }

    /// "Reset All": clears every criterion.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    pub fn is_empty(&self) -> bool {
        self.active_filter_count() == 0
    }

    /// Number of criteria currently set, shown as a badge on the filter button.
    pub fn active_filter_count(&self) -> usize {
        [
            self.price_sort.is_some(),
            self.min_rating.is_some(),
            self.online_only == Some(true),
            self.specialty.is_some(),
            self.max_price.is_some(),
            self.sort_by.is_some_and(|s| s != SortBy::Relevance),
        ]
        .iter()
        .filter(|set| **set)
        .count()
    }

    /// Builds criteria from untyped JSON.
    ///
    /// Anything other than an object means "no filters". Each field is
    /// read on its own, so one malformed field does not discard the rest:
    /// a rating floor that is not a whole number in `1..=5`, a negative or
    /// non-numeric price ceiling, a blank specialty or an unknown sort name
    /// is treated as unset.
    pub fn from_value(value: &Value) -> Self {
        let Some(obj) = value.as_object() else {
            return Self::default();
        };

        Self {
            price_sort: enum_field(obj, "priceSort"),
            min_rating: obj
                .get("minRating")
                .and_then(Value::as_f64)
                .filter(|r| r.fract() == 0.0 && (1.0..=5.0).contains(r))
                .map(|r| r as u8),
            online_only: obj.get("onlineOnly").and_then(Value::as_bool),
            specialty: obj
                .get("specialty")
                .and_then(Value::as_str)
                .filter(|s| !s.trim().is_empty())
                .map(str::to_string),
            max_price: obj
                .get("maxPrice")
                .and_then(Value::as_f64)
                .filter(|p| p.is_finite() && *p >= 0.0),
            sort_by: enum_field(obj, "sortBy"),
        }
    }
}

fn enum_field<T: DeserializeOwned>(obj: &Map<String, Value>, field: &str) -> Option<T> {
    obj.get(field)
        .cloned()
        .and_then(|v| serde_json::from_value(v).ok())
}
