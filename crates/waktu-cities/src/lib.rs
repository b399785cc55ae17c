//! Indonesian cities lookup and autocomplete.
//!
//! A small static gazetteer (kota and kabupaten seats in every province)
//! with alias-aware, typo-tolerant search. Used to set a manual location
//! and to label resolved coordinates.

mod data;
pub mod search;

use serde::Serialize;
use std::collections::BTreeSet;
use std::fmt;

use waktu_types::{GeoCoordinate, WaktuError};

pub use search::normalize;

/// Indonesian civil time zones.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Zone {
    /// Waktu Indonesia Barat, UTC+7.
    Wib,
    /// Waktu Indonesia Tengah, UTC+8.
    Wita,
    /// Waktu Indonesia Timur, UTC+9.
    Wit,
}

impl Zone {
    pub fn utc_offset_minutes(&self) -> i32 {
        match self {
            Zone::Wib => 7 * 60,
            Zone::Wita => 8 * 60,
            Zone::Wit => 9 * 60,
        }
    }

    /// IANA name of the zone's main tz database entry.
    pub fn iana(&self) -> &'static str {
        match self {
            Zone::Wib => "Asia/Jakarta",
            Zone::Wita => "Asia/Makassar",
            Zone::Wit => "Asia/Jayapura",
        }
    }
}

impl fmt::Display for Zone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Zone::Wib => "WIB",
            Zone::Wita => "WITA",
            Zone::Wit => "WIT",
        };
        write!(f, "{}", s)
    }
}

/// Administrative level of a gazetteer entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum CityKind {
    Kota,
    Kabupaten,
}

/// A gazetteer entry.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct City {
    /// Stable slug, e.g. `"banda-aceh"`.
    pub id: &'static str,
    pub name: &'static str,
    pub province: &'static str,
    pub coords: GeoCoordinate,
    pub zone: Zone,
    pub kind: CityKind,
    /// Seat of the provincial government.
    pub is_capital: bool,
    pub aliases: &'static [&'static str],
}

impl City {
    /// `"Name, Province"`.
    pub fn label(&self) -> String {
        format!("{}, {}", self.name, self.province)
    }
}

/// A ranked search hit.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SearchHit {
    pub city: &'static City,
    pub score: u32,
}

/// An autocomplete entry ready for display.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Suggestion {
    pub city: &'static City,
    pub score: u32,
    pub label: String,
}

/// Minimum normalized query length for autocomplete.
pub const AUTOCOMPLETE_MIN_CHARS: usize = 2;

/// Lookup service over a static city table.
#[derive(Debug, Clone, Copy)]
pub struct IndonesianCitiesService {
    cities: &'static [City],
}

impl Default for IndonesianCitiesService {
    fn default() -> Self {
        Self { cities: data::CITIES }
    }
}

impl IndonesianCitiesService {
    pub fn new() -> Self {
        Self::default()
    }

    /// Service over a custom table.
    pub fn with_cities(cities: &'static [City]) -> Self {
        Self { cities }
    }

    pub fn all(&self) -> &'static [City] {
        self.cities
    }

    pub fn len(&self) -> usize {
        self.cities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cities.is_empty()
    }

    /// Ranked matches for `query`, best first, at most `limit`.
    ///
    /// Ties are broken by capital status, then name.
    pub fn search(&self, query: &str, limit: usize) -> Vec<SearchHit> {
        let q = normalize(query);
        if q.is_empty() || limit == 0 {
            return Vec::new();
        }

        let mut hits: Vec<SearchHit> = self
            .cities
            .iter()
            .filter_map(|city| {
                let score = search::score(city, &q);
                (score > 0).then_some(SearchHit { city, score })
            })
            .collect();

        hits.sort_by(|a, b| {
            b.score
                .cmp(&a.score)
                .then_with(|| b.city.is_capital.cmp(&a.city.is_capital))
                .then_with(|| a.city.name.cmp(b.city.name))
        });
        hits.truncate(limit);
        hits
    }

    /// Suggestions while typing. Nothing until the query has two characters.
    pub fn autocomplete(&self, query: &str, limit: usize) -> Vec<Suggestion> {
        if normalize(query).chars().count() < AUTOCOMPLETE_MIN_CHARS {
            return Vec::new();
        }
        self.search(query, limit)
            .into_iter()
            .map(|hit| Suggestion {
                city: hit.city,
                score: hit.score,
                label: hit.city.label(),
            })
            .collect()
    }

    /// Exact match on name or alias, after normalization.
    pub fn find_by_name(&self, name: &str) -> Option<&'static City> {
        let q = normalize(name);
        if q.is_empty() {
            return None;
        }
        self.cities
            .iter()
            .find(|c| normalize(c.name) == q)
            .or_else(|| self.cities.iter().find(|c| c.aliases.iter().any(|a| normalize(a) == q)))
    }

    pub fn find_by_id(&self, id: &str) -> Option<&'static City> {
        self.cities.iter().find(|c| c.id == id)
    }

    /// Best match for free text, or `CityNotFound`.
    ///
    /// # Errors
    /// Returns `CityNotFound` when nothing scores above zero.
    pub fn resolve(&self, query: &str) -> Result<&'static City, WaktuError> {
        if let Some(city) = self.find_by_name(query) {
            return Ok(city);
        }
        self.search(query, 1)
            .first()
            .map(|hit| hit.city)
            .ok_or_else(|| WaktuError::city_not_found(query))
    }

    /// Every entry in a province, capital first.
    pub fn by_province(&self, province: &str) -> Vec<&'static City> {
        let q = normalize(province);
        let mut cities: Vec<&'static City> = self.cities.iter().filter(|c| normalize(c.province) == q).collect();
        cities.sort_by(|a, b| b.is_capital.cmp(&a.is_capital).then_with(|| a.name.cmp(b.name)));
        cities
    }

    /// Sorted, de-duplicated province names.
    pub fn provinces(&self) -> Vec<&'static str> {
        self.cities.iter().map(|c| c.province).collect::<BTreeSet<_>>().into_iter().collect()
    }

    /// Closest entry to `coords` and its distance in kilometres.
    pub fn nearest(&self, coords: GeoCoordinate) -> Option<(&'static City, f64)> {
        self.cities
            .iter()
            .map(|c| (c, c.coords.distance_km(&coords)))
            .min_by(|a, b| a.1.total_cmp(&b.1))
    }

    /// Major cities offered before any typing.
    pub fn popular(&self) -> Vec<&'static City> {
        data::POPULAR.iter().filter_map(|id| self.find_by_id(id)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn svc() -> IndonesianCitiesService {
        IndonesianCitiesService::new()
    }

    #[test]
    fn test_gazetteer_size_and_unique_ids() {
        let s = svc();
        assert!(s.len() >= 140);
        let ids: BTreeSet<_> = s.all().iter().map(|c| c.id).collect();
        assert_eq!(ids.len(), s.len());
    }

    #[test]
    fn test_every_province_has_one_capital() {
        let s = svc();
        for province in s.provinces() {
            let capitals = s.by_province(province).iter().filter(|c| c.is_capital).count();
            assert_eq!(capitals, 1, "{province}");
        }
        assert_eq!(s.provinces().len(), 38);
    }

    #[test]
    fn test_coordinates_inside_indonesia() {
        for c in svc().all() {
            assert!((-11.5..=6.5).contains(&c.coords.lat), "{}", c.name);
            assert!((94.5..=141.5).contains(&c.coords.lng), "{}", c.name);
        }
    }

    #[test]
    fn test_exact_name_ranks_first() {
        let hits = svc().search("Bandung", 5);
        assert_eq!(hits[0].city.id, "bandung");
        assert_eq!(hits[0].score, search::SCORE_EXACT_NAME + search::CAPITAL_BONUS);
    }

    #[test]
    fn test_alias_match() {
        let hits = svc().search("jogja", 3);
        assert_eq!(hits[0].city.id, "yogyakarta");
        let hits = svc().search("Solo", 3);
        assert_eq!(hits[0].city.id, "surakarta");
    }

    #[test]
    fn test_prefix_prefers_capital_on_tie() {
        let hits = svc().search("jakarta", 10);
        assert_eq!(hits[0].city.id, "jakarta");
        // the four administrative cities follow on word-prefix / prefix
        assert!(hits.iter().any(|h| h.city.id == "jakarta-selatan"));
    }

    #[test]
    fn test_word_prefix_matches_later_words() {
        let hits = svc().search("selatan", 10);
        let ids: Vec<_> = hits.iter().map(|h| h.city.id).collect();
        assert!(ids.contains(&"jakarta-selatan"));
        assert!(ids.contains(&"tangerang-selatan"));
    }

    #[test]
    fn test_typo_tolerance() {
        let hits = svc().search("surabya", 3);
        assert_eq!(hits[0].city.id, "surabaya");
        let hits = svc().search("makasar", 3);
        assert_eq!(hits[0].city.id, "makassar");
    }

    #[test]
    fn test_province_query_lists_capital_first() {
        let hits = svc().search("Jawa Timur", 5);
        assert_eq!(hits[0].city.id, "surabaya");
        assert!(hits.iter().all(|h| h.city.province == "Jawa Timur"));
    }

    #[test]
    fn test_admin_prefix_ignored() {
        assert_eq!(svc().find_by_name("Kota Malang").map(|c| c.id), Some("malang"));
        assert_eq!(svc().find_by_name("Kab. Sleman").map(|c| c.id), Some("sleman"));
    }

    #[test]
    fn test_punctuation_inside_words_is_dropped() {
        assert_eq!(svc().find_by_name("Pare-Pare").map(|c| c.id), Some("parepare"));
        assert_eq!(svc().find_by_name("Bau-Bau").map(|c| c.id), Some("baubau"));
        assert_eq!(svc().search("Pare-Pare", 1)[0].city.id, "parepare");
        let diy = svc().by_province("D.I. Yogyakarta");
        assert!(diy.iter().any(|c| c.id == "yogyakarta"));
    }

    #[test]
    fn test_empty_and_limit() {
        assert!(svc().search("   ", 10).is_empty());
        assert!(svc().search("bandung", 0).is_empty());
        assert!(svc().search("a", 3).len() <= 3);
    }

    #[test]
    fn test_autocomplete_needs_two_chars() {
        assert!(svc().autocomplete("b", 5).is_empty());
        let s = svc().autocomplete("ba", 5);
        assert!(!s.is_empty());
        assert!(s.len() <= 5);
        assert!(s[0].label.contains(", "));
    }

    #[test]
    fn test_no_match() {
        assert!(svc().search("xyzzyq", 5).is_empty());
        assert!(matches!(svc().resolve("xyzzyq"), Err(WaktuError::CityNotFound { .. })));
        assert_eq!(svc().resolve("bali").unwrap().id, "denpasar");
    }

    #[test]
    fn test_nearest() {
        let (city, km) = svc().nearest(GeoCoordinate::new_unchecked(-6.9, 107.6)).unwrap();
        assert_eq!(city.id, "bandung");
        assert!(km < 5.0);
    }

    #[test]
    fn test_popular_resolves_all_ids() {
        assert_eq!(svc().popular().len(), data::POPULAR.len());
    }

    #[test]
    fn test_zone_offsets() {
        let s = svc();
        assert_eq!(s.find_by_id("denpasar").unwrap().zone, Zone::Wita);
        assert_eq!(s.find_by_id("jayapura").unwrap().zone.utc_offset_minutes(), 540);
        assert_eq!(Zone::Wib.to_string(), "WIB");
    }
}
