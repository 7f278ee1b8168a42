//! Counselor search: text matching, filter pipeline and ordering.

use std::cmp::Ordering;

use super::criteria::{FilterCriteria, PriceSort, SortBy};
use crate::counselor::CounselorRecord;

/// Filters and orders `counselors` for display.
///
/// A blank `query` skips text matching. Otherwise a record matches when
/// its name, tag or any specialty contains the query, ignoring case.
/// The surviving records then pass through the criteria in order:
/// specialty, online-only, rating floor, price ceiling. Sorting is
/// stable, so records with equal keys keep their input order.
///
/// A missing collection yields an empty result and missing criteria
/// mean no filtering.
pub fn search_counselors(
    query: &str,
    counselors: Option<&[CounselorRecord]>,
    filters: Option<&FilterCriteria>,
) -> Vec<CounselorRecord> {
    let Some(counselors) = counselors else {
        return Vec::new();
    };
    let default_filters = FilterCriteria::default();
    let filters = filters.unwrap_or(&default_filters);

    let needle = query.trim().to_lowercase();

    let mut results: Vec<CounselorRecord> = counselors
        .iter()
        .filter(|c| needle.is_empty() || matches_text(c, &needle))
        .filter(|c| passes_filters(c, filters))
        .cloned()
        .collect();

    sort_results(&mut results, filters);
    results
}

/// Case-insensitive substring match on name, tag or any specialty.
/// `needle` must already be lowercase.
pub(crate) fn matches_text(counselor: &CounselorRecord, needle: &str) -> bool {
    counselor.name.to_lowercase().contains(needle)
        || counselor.tag.to_lowercase().contains(needle)
        || counselor
            .specialties
            .iter()
            .any(|s| s.to_lowercase().contains(needle))
}

fn passes_filters(counselor: &CounselorRecord, filters: &FilterCriteria) -> bool {
    if let Some(specialty) = filters.specialty.as_deref().map(str::trim)
        && !specialty.is_empty()
        && !counselor.has_specialty(specialty)
    {
        return false;
    }

    if filters.online_only == Some(true) && !counselor.is_online {
        return false;
    }

    // An unrated counselor (0.0) fails any floor of 1 or more.
    if let Some(min_rating) = filters.min_rating
        && counselor.rating < f64::from(min_rating)
    {
        return false;
    }

    if let Some(max_price) = filters.max_price
        && f64::from(counselor.rate) > max_price
    {
        return false;
    }

    true
}

fn sort_results(results: &mut [CounselorRecord], filters: &FilterCriteria) {
    // Price first, then the primary key; both sorts are stable so price
    // order breaks ties of the primary key.
    match filters.price_sort {
        Some(PriceSort::LowToHigh) => results.sort_by_key(|c| c.rate),
        Some(PriceSort::HighToLow) => results.sort_by(|a, b| b.rate.cmp(&a.rate)),
        None => {}
    }

    match filters.sort_by.unwrap_or_default() {
        SortBy::Relevance => {}
        SortBy::Rating => results.sort_by(|a, b| descending(a.rating, b.rating)),
        SortBy::Experience => results.sort_by(|a, b| b.experience.cmp(&a.experience)),
    }
}

fn descending(a: f64, b: f64) -> Ordering {
    b.total_cmp(&a)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::counselor::get_all_counselors;

    fn two_counselors() -> Vec<CounselorRecord> {
        vec![
            CounselorRecord::new("a", "Dr. Ana", "Anxiety")
                .with_rating(4.8)
                .with_rate(35)
                .with_online(true),
            CounselorRecord::new("b", "Dr. Bo", "Career")
                .with_rating(3.0)
                .with_rate(60)
                .with_online(false),
        ]
    }

    fn ids(results: &[CounselorRecord]) -> Vec<&str> {
        results.iter().map(|c| c.key()).collect()
    }

    #[test]
    fn test_filters_compose_with_and() {
        let list = two_counselors();
        let filters = FilterCriteria::new().with_min_rating(4).with_online_only(true);

        let results = search_counselors("", Some(&list), Some(&filters));
        assert_eq!(ids(&results), vec!["a"]);
    }

    #[test]
    fn test_text_matches_tag_when_name_does_not() {
        let list = two_counselors();
        let results = search_counselors("career", Some(&list), Some(&FilterCriteria::default()));
        assert_eq!(ids(&results), vec!["b"]);
    }

    #[test]
    fn test_text_matches_specialties() {
        let list = vec![
            CounselorRecord::new("a", "Ana", "Anxiety").with_specialties(["Sleep"]),
            CounselorRecord::new("b", "Bo", "Career"),
        ];
        let results = search_counselors("SLEEP", Some(&list), None);
        assert_eq!(ids(&results), vec!["a"]);
    }

    #[test]
    fn test_blank_query_returns_everything() {
        let list = two_counselors();
        assert_eq!(search_counselors("   ", Some(&list), None).len(), 2);
    }

    #[test]
    fn test_rating_sort_is_stable() {
        let list = vec![
            CounselorRecord::new("first", "A", "T").with_rating(4.5),
            CounselorRecord::new("top", "B", "T").with_rating(4.9),
            CounselorRecord::new("second", "C", "T").with_rating(4.5),
            CounselorRecord::new("unrated", "D", "T"),
        ];
        let filters = FilterCriteria::new().with_sort_by(SortBy::Rating);

        let results = search_counselors("", Some(&list), Some(&filters));
        assert_eq!(ids(&results), vec!["top", "first", "second", "unrated"]);
    }

    #[test]
    fn test_experience_sort_descending() {
        let list = vec![
            CounselorRecord::new("new", "A", "T"),
            CounselorRecord::new("senior", "B", "T").with_experience(15),
            CounselorRecord::new("mid", "C", "T").with_experience(5),
        ];
        let filters = FilterCriteria::new().with_sort_by(SortBy::Experience);

        let results = search_counselors("", Some(&list), Some(&filters));
        assert_eq!(ids(&results), vec!["senior", "mid", "new"]);
    }

    #[test]
    fn test_relevance_preserves_input_order() {
        let list = get_all_counselors();
        let filters = FilterCriteria::new().with_sort_by(SortBy::Relevance);

        let results = search_counselors("", Some(&list), Some(&filters));
        assert_eq!(results, list);
    }

    #[test]
    fn test_price_sort_breaks_rating_ties() {
        let list = vec![
            CounselorRecord::new("pricey", "A", "T").with_rating(4.5).with_rate(50),
            CounselorRecord::new("cheap", "B", "T").with_rating(4.5).with_rate(20),
            CounselorRecord::new("best", "C", "T").with_rating(5.0).with_rate(90),
        ];
        let filters = FilterCriteria::new()
            .with_price_sort(PriceSort::LowToHigh)
            .with_sort_by(SortBy::Rating);

        let results = search_counselors("", Some(&list), Some(&filters));
        assert_eq!(ids(&results), vec!["best", "cheap", "pricey"]);
    }

    #[test]
    fn test_price_sort_high_to_low_alone() {
        let list = two_counselors();
        let filters = FilterCriteria::new().with_price_sort(PriceSort::HighToLow);

        let results = search_counselors("", Some(&list), Some(&filters));
        assert_eq!(ids(&results), vec!["b", "a"]);
    }

    #[test]
    fn test_specialty_filter_checks_tag_and_specialties() {
        let list = get_all_counselors();
        let filters = FilterCriteria::new().with_specialty("Relationships");

        let results = search_counselors("", Some(&list), Some(&filters));
        assert_eq!(ids(&results), vec!["counselor-1", "counselor-5"]);
    }

    #[test]
    fn test_max_price_is_inclusive() {
        let list = two_counselors();
        let filters = FilterCriteria::new().with_max_price(35.0);

        let results = search_counselors("", Some(&list), Some(&filters));
        assert_eq!(ids(&results), vec!["a"]);
    }

    #[test]
    fn test_unrated_fails_rating_floor() {
        let list = vec![CounselorRecord::new("new", "A", "T")];
        let filters = FilterCriteria::new().with_min_rating(1);
        assert!(search_counselors("", Some(&list), Some(&filters)).is_empty());
    }

    #[test]
    fn test_missing_inputs_are_tolerated() {
        let list = two_counselors();
        assert!(search_counselors("ana", None, Some(&FilterCriteria::default())).is_empty());
        assert_eq!(
            search_counselors("dr", Some(&list), None),
            search_counselors("dr", Some(&list), Some(&FilterCriteria::default()))
        );
    }

    #[test]
    fn test_untyped_inputs_are_normalized_first() {
        use crate::counselor::normalize_counselors;
        use serde_json::{Value, json};

        let list = normalize_counselors(&json!([
            { "id": "a", "name": "Ana", "tag": "Anxiety", "rating": 4.5, "isOnline": true },
            { "name": "No Id", "tag": "Anxiety", "rating": 5 },
            { "id": "b", "name": "Bo", "tag": "Anxiety" }
        ]));
        let filters = FilterCriteria::from_value(&json!({ "minRating": 4 }));
        let results = search_counselors("anx", Some(&list), Some(&filters));
        assert_eq!(ids(&results), vec!["a"]);

        let no_filters = FilterCriteria::from_value(&Value::Null);
        assert_eq!(search_counselors("anx", Some(&list), Some(&no_filters)).len(), 2);
        assert!(normalize_counselors(&Value::Null).is_empty());
    }

    #[test]
    fn test_stress_scenario_over_sample_data() {
        let list = get_all_counselors();
        let filters = FilterCriteria::new().with_min_rating(4);

        let results = search_counselors("stress", Some(&list), Some(&filters));
        let names: Vec<&str> = results.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["Lisa Taylor", "Mike Chen"]);
    }
}
