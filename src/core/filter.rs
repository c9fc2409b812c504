//! Glyph filtering and random selection

use crate::config::Config;
use crate::core::model::GlyphRecord;

/// Keep records where every keyword appears in the name or the hex string
pub fn filter_keywords(records: Vec<GlyphRecord>, keywords: &[String]) -> Vec<GlyphRecord> {
    if keywords.is_empty() {
        return records;
    }

    records
        .into_iter()
        .filter(|r| {
            keywords
                .iter()
                .all(|kw| r.name.contains(kw.as_str()) || r.hex.contains(kw.as_str()))
        })
        .collect()
}

/// Keep records whose name starts with `nf-<prefix>-` for any prefix
pub fn filter_groups(records: Vec<GlyphRecord>, prefixes: &[String]) -> Vec<GlyphRecord> {
    if prefixes.is_empty() {
        return records;
    }

    let patterns: Vec<String> = prefixes.iter().map(|p| format!("nf-{}-", p)).collect();

    records
        .into_iter()
        .filter(|r| patterns.iter().any(|p| r.name.starts_with(p.as_str())))
        .collect()
}

/// Pick one record uniformly using `seed`; empty input yields `None`
pub fn pick_random(records: Vec<GlyphRecord>, seed: u64) -> Option<GlyphRecord> {
    if records.is_empty() {
        return None;
    }
    let index = scale_to_index(seed, records.len());
    records.into_iter().nth(index)
}

/// Map a uniform `u64` onto `0..len` by widening multiply rather than modulo,
/// so every index covers an equal share of the seed range.
fn scale_to_index(seed: u64, len: usize) -> usize {
    ((seed as u128 * len as u128) >> 64) as usize
}

/// Apply the configured selection.
///
/// Random mode ignores both filters and draws from the full set. Otherwise
/// keywords narrow the set first, then groups.
pub fn select(records: Vec<GlyphRecord>, config: &Config, seed: u64) -> Vec<GlyphRecord> {
    if config.random {
        return pick_random(records, seed).into_iter().collect();
    }

    let records = filter_keywords(records, &config.search);
    filter_groups(records, &config.groups)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn glyph(name: &str, hex: &str) -> GlyphRecord {
        GlyphRecord::decode(name, hex).unwrap()
    }

    fn sample() -> Vec<GlyphRecord> {
        vec![
            glyph("nf-dev-github", "f121"),
            glyph("nf-dev-git", "e702"),
            glyph("nf-md-github", "f02a4"),
            glyph("nf-fa-github_alt", "f113"),
            glyph("nf-cod-add", "ea60"),
            glyph("nf-indentation-line", "e621"),
        ]
    }

    fn names(records: &[GlyphRecord]) -> Vec<&str> {
        records.iter().map(|r| r.name.as_str()).collect()
    }

    fn strings(values: &[&str]) -> Vec<String> {
        values.iter().map(|s| s.to_string()).collect()
    }

    /// A seed in the middle of the range that maps to `index`
    fn seed_for(index: usize, len: usize) -> u64 {
        (((index as u128 * 2 + 1) << 64) / (2 * len as u128)) as u64
    }

    #[test]
    fn test_keywords_empty_keeps_all() {
        assert_eq!(filter_keywords(sample(), &[]).len(), sample().len());
    }

    #[test]
    fn test_keywords_match_all() {
        let filtered = filter_keywords(sample(), &strings(&["github", "dev"]));
        assert_eq!(names(&filtered), vec!["nf-dev-github"]);
    }

    #[test]
    fn test_keywords_match_hex() {
        let filtered = filter_keywords(sample(), &strings(&["ea6"]));
        assert_eq!(names(&filtered), vec!["nf-cod-add"]);
    }

    #[test]
    fn test_keywords_name_or_hex_per_keyword() {
        // "git" matches the name, "f1" matches the hex
        let filtered = filter_keywords(sample(), &strings(&["git", "f1"]));
        assert_eq!(names(&filtered), vec!["nf-dev-github", "nf-fa-github_alt"]);
    }

    #[test]
    fn test_keywords_case_sensitive() {
        assert!(filter_keywords(sample(), &strings(&["GitHub"])).is_empty());
    }

    #[test]
    fn test_groups_any_prefix() {
        let filtered = filter_groups(sample(), &strings(&["dev", "md"]));
        assert_eq!(
            names(&filtered),
            vec!["nf-dev-github", "nf-dev-git", "nf-md-github"]
        );
    }

    #[test]
    fn test_groups_require_trailing_dash() {
        let filtered = filter_groups(sample(), &strings(&["indent"]));
        assert!(filtered.is_empty());

        let filtered = filter_groups(sample(), &strings(&["indentation"]));
        assert_eq!(names(&filtered), vec!["nf-indentation-line"]);
    }

    #[test]
    fn test_groups_repeated_prefix_no_duplicates() {
        let filtered = filter_groups(sample(), &strings(&["cod", "cod"]));
        assert_eq!(names(&filtered), vec!["nf-cod-add"]);
    }

    #[test]
    fn test_select_keywords_then_groups() {
        let config = Config {
            search: strings(&["github"]),
            groups: strings(&["md", "fa"]),
            ..Default::default()
        };
        let selected = select(sample(), &config, 0);
        assert_eq!(names(&selected), vec!["nf-md-github", "nf-fa-github_alt"]);
    }

    #[test]
    fn test_select_no_filters() {
        let selected = select(sample(), &Config::default(), 0);
        assert_eq!(selected, sample());
    }

    #[test]
    fn test_random_ignores_filters() {
        let config = Config {
            random: true,
            search: strings(&["no-such-glyph"]),
            groups: strings(&["nothing"]),
            ..Default::default()
        };
        let selected = select(sample(), &config, seed_for(4, 6));
        assert_eq!(names(&selected), vec!["nf-cod-add"]);
    }

    #[test]
    fn test_random_returns_member() {
        let all = sample();
        for seed in [0u64, 1, 7, 1234567, u64::MAX] {
            let picked = pick_random(sample(), seed).unwrap();
            assert!(all.contains(&picked));
        }
    }

    #[test]
    fn test_scale_to_index_bounds() {
        assert_eq!(scale_to_index(0, 6), 0);
        assert_eq!(scale_to_index(u64::MAX, 6), 5);
        assert_eq!(scale_to_index(u64::MAX, 1), 0);
        for index in 0..6 {
            assert_eq!(scale_to_index(seed_for(index, 6), 6), index);
        }
    }

    #[test]
    fn test_scale_to_index_even_split() {
        // Each index owns an equal slice of the seed range, so the slice
        // boundaries land on multiples of 2^64 / len
        let len = 3usize;
        let step = (1u128 << 64) / len as u128;
        for index in 1..len {
            let boundary = (step * index as u128 + 1) as u64;
            assert_eq!(scale_to_index(boundary, len), index);
            assert_eq!(scale_to_index(boundary - 2, len), index - 1);
        }
    }

    #[test]
    fn test_random_empty() {
        assert!(pick_random(Vec::new(), 42).is_none());
        let config = Config {
            random: true,
            ..Default::default()
        };
        assert!(select(Vec::new(), &config, 42).is_empty());
    }
}
