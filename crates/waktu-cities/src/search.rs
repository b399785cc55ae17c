//! Query normalization and match scoring.

use crate::City;

pub const SCORE_EXACT_NAME: u32 = 100;
pub const SCORE_EXACT_ALIAS: u32 = 95;
pub const SCORE_NAME_PREFIX: u32 = 85;
pub const SCORE_ALIAS_PREFIX: u32 = 75;
pub const SCORE_WORD_PREFIX: u32 = 70;
pub const SCORE_NAME_SUBSTRING: u32 = 60;
pub const SCORE_ALIAS_SUBSTRING: u32 = 50;
pub const SCORE_PROVINCE_EXACT: u32 = 40;
pub const SCORE_PROVINCE_SUBSTRING: u32 = 30;
pub const SCORE_FUZZY: u32 = 25;
pub const CAPITAL_BONUS: u32 = 3;

const ADMIN_PREFIXES: [&str; 3] = ["kota ", "kabupaten ", "kab "];

/// Lowercases, removes punctuation, collapses whitespace and drops a
/// leading administrative prefix (`Kota`, `Kabupaten`, `Kab.`).
///
/// Punctuation is dropped rather than spaced, so `Pare-Pare` reads as
/// `parepare` and `D.I. Yogyakarta` as `di yogyakarta`.
pub fn normalize(input: &str) -> String {
    let stripped: String = input
        .to_lowercase()
        .chars()
        .filter(|c| c.is_alphanumeric() || c.is_whitespace())
        .collect();
    let collapsed = stripped.split_whitespace().collect::<Vec<_>>().join(" ");

    for prefix in ADMIN_PREFIXES {
        if let Some(rest) = collapsed.strip_prefix(prefix) {
            return rest.to_string();
        }
    }
    collapsed
}

/// Levenshtein distance over chars.
pub fn edit_distance(a: &str, b: &str) -> usize {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();

    let mut prev: Vec<usize> = (0..=b.len()).collect();
    let mut curr = vec![0; b.len() + 1];

    for i in 1..=a.len() {
        curr[0] = i;
        for j in 1..=b.len() {
            let cost = usize::from(a[i - 1] != b[j - 1]);
            curr[j] = (prev[j] + 1).min(curr[j - 1] + 1).min(prev[j - 1] + cost);
        }
        std::mem::swap(&mut prev, &mut curr);
    }
    prev[b.len()]
}

/// Allowed typos for a query of this many chars.
fn fuzzy_tolerance(query_len: usize) -> usize {
    match query_len {
        0..=3 => 0,
        4..=5 => 1,
        _ => 2,
    }
}

/// Scores `city` against an already-normalized query. Zero means no match.
pub fn score(city: &City, query: &str) -> u32 {
    if query.is_empty() {
        return 0;
    }

    let name = normalize(city.name);
    let aliases: Vec<String> = city.aliases.iter().map(|a| normalize(a)).collect();
    let province = normalize(city.province);

    let mut best = 0;
    let mut bump = |s: u32| best = best.max(s);

    if name == query {
        bump(SCORE_EXACT_NAME);
    }
    if aliases.iter().any(|a| a == query) {
        bump(SCORE_EXACT_ALIAS);
    }
    if name.starts_with(query) {
        bump(SCORE_NAME_PREFIX);
    }
    if aliases.iter().any(|a| a.starts_with(query)) {
        bump(SCORE_ALIAS_PREFIX);
    }
    if name.split(' ').skip(1).any(|w| w.starts_with(query)) {
        bump(SCORE_WORD_PREFIX);
    }
    if name.contains(query) {
        bump(SCORE_NAME_SUBSTRING);
    }
    if aliases.iter().any(|a| a.contains(query)) {
        bump(SCORE_ALIAS_SUBSTRING);
    }
    if province == query {
        bump(SCORE_PROVINCE_EXACT);
    } else if query.chars().count() >= 3 && province.contains(query) {
        bump(SCORE_PROVINCE_SUBSTRING);
    }

    let tolerance = fuzzy_tolerance(query.chars().count());
    if tolerance > 0
        && std::iter::once(&name)
            .chain(aliases.iter())
            .any(|candidate| edit_distance(candidate, query) <= tolerance)
    {
        bump(SCORE_FUZZY);
    }

    if best > 0 && city.is_capital {
        best += CAPITAL_BONUS;
    }
    best
}
