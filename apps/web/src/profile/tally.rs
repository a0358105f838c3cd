#![allow(dead_code)]

use crate::github::Repository;

/// Repository count per primary language, in the order each language was
/// first seen while scanning. Repositories without a language are skipped
/// and do not count towards [`LanguageTally::total`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LanguageTally {
    counts: Vec<(String, u32)>,
}

/// One line of the language block.
#[derive(Debug, Clone, PartialEq)]
pub struct LanguageShare {
    pub language: String,
    pub percentage: f64,
}

impl LanguageShare {
    /// Percentage with two decimal digits, e.g. `75.00`.
    pub fn formatted(&self) -> String {
        format!("{:.2}", self.percentage)
    }
}

impl LanguageTally {
    pub fn from_repositories(repos: &[Repository]) -> Self {
        let mut tally = Self::default();
        for language in repos.iter().filter_map(|r| r.language.as_deref()) {
            tally.record(language);
        }
        tally
    }

    fn record(&mut self, language: &str) {
        match self.counts.iter_mut().find(|(name, _)| name == language) {
            Some((_, count)) => *count += 1,
            None => self.counts.push((language.to_string(), 1)),
        }
    }

    /// Number of repositories that have a language.
    pub fn total(&self) -> u32 {
        self.counts.iter().map(|(_, count)| count).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    pub fn get(&self, language: &str) -> Option<u32> {
        self.counts
            .iter()
            .find(|(name, _)| name == language)
            .map(|(_, count)| *count)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, u32)> {
        self.counts.iter().map(|(name, count)| (name.as_str(), *count))
    }

    /// `count / total * 100` per language. An empty tally yields no shares.
    pub fn percentages(&self) -> Vec<LanguageShare> {
        let total = self.total();
        if total == 0 {
            return Vec::new();
        }

        self.iter()
            .map(|(language, count)| LanguageShare {
                language: language.to_string(),
                percentage: f64::from(count) / f64::from(total) * 100.0,
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    fn repo(name: &str, language: Option<&str>) -> Repository {
        Repository {
            name: name.to_string(),
            html_url: format!("https://github.com/octocat/{name}"),
            updated_at: Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap(),
            language: language.map(str::to_string),
        }
    }

    fn repos(languages: &[Option<&str>]) -> Vec<Repository> {
        languages
            .iter()
            .enumerate()
            .map(|(i, lang)| repo(&format!("repo-{i}"), *lang))
            .collect()
    }

    #[test]
    fn test_tally_skips_missing_language() {
        let tally = LanguageTally::from_repositories(&repos(&[
            Some("Go"),
            Some("Go"),
            Some("TS"),
            None,
            Some("Go"),
        ]));
        assert_eq!(tally.get("Go"), Some(3));
        assert_eq!(tally.get("TS"), Some(1));
        assert_eq!(tally.total(), 4);
    }

    #[test]
    fn test_percentages_exclude_null_from_denominator() {
        let tally = LanguageTally::from_repositories(&repos(&[
            Some("Go"),
            Some("Go"),
            Some("TS"),
            None,
            Some("Go"),
        ]));
        let shares = tally.percentages();
        let rendered: Vec<_> = shares
            .iter()
            .map(|s| format!("{}: {}%", s.language, s.formatted()))
            .collect();
        assert_eq!(rendered, ["Go: 75.00%", "TS: 25.00%"]);
    }

    #[test]
    fn test_order_is_first_occurrence() {
        let tally = LanguageTally::from_repositories(&repos(&[
            Some("Rust"),
            Some("Python"),
            Some("Rust"),
            Some("C"),
            Some("Python"),
        ]));
        let order: Vec<_> = tally.iter().map(|(name, _)| name).collect();
        assert_eq!(order, ["Rust", "Python", "C"]);
    }

    #[test]
    fn test_empty_repositories_yield_no_shares() {
        let tally = LanguageTally::from_repositories(&[]);
        assert!(tally.is_empty());
        assert_eq!(tally.total(), 0);
        assert!(tally.percentages().is_empty());
    }

    #[test]
    fn test_only_unknown_languages_yield_no_shares() {
        let tally = LanguageTally::from_repositories(&repos(&[None, None]));
        assert!(tally.is_empty());
        assert!(tally.percentages().is_empty());
    }

    #[test]
    fn test_thirds_round_to_two_decimals() {
        let tally = LanguageTally::from_repositories(&repos(&[
            Some("Go"),
            Some("Rust"),
            Some("Zig"),
        ]));
        let formatted: Vec<_> = tally.percentages().iter().map(|s| s.formatted()).collect();
        assert_eq!(formatted, ["33.33", "33.33", "33.33"]);
    }

    #[test]
    fn test_language_names_are_case_sensitive() {
        let tally = LanguageTally::from_repositories(&repos(&[Some("Go"), Some("go")]));
        assert_eq!(tally.get("Go"), Some(1));
        assert_eq!(tally.get("go"), Some(1));
    }
}
