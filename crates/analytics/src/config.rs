//! Exclusion lists consumed by the word-frequency tables.
//!
//! These are plain data handed to the aggregator, never constants baked into
//! it. `Default` carries the lists the reports were originally tuned with;
//! callers can load their own via the report crate's config file.

use crate::membership::MembershipIndex;
use serde::{Deserialize, Serialize};

/// Stop-words, stop-languages and excluded release years
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalysisConfig {
    /// Lower-case tokens left out of every word-frequency table
    pub stop_words: Vec<String>,
    /// Original-language codes whose movies are left out of the
    /// per-language and per-year word tables
    pub stop_languages: Vec<String>,
    /// Release years treated as erroneous or not yet released; dropped from
    /// the per-year word table but still counted per year
    pub excluded_years: Vec<i32>,
}

const DEFAULT_STOP_WORDS: &[&str] = &[
    "&", "-", "1", "2", "3", "a", "about", "al", "all", "an", "and", "animation", "as", "at",
    "au", "b", "d", "da", "das", "de", "dei", "del", "della", "der", "des", "di", "die", "do",
    "du", "e", "el", "elle", "en", "entre", "et", "f", "for", "from", "g", "gli", "go", "have",
    "how", "i", "il", "in", "is", "it", "k", "l", "la", "las", "le", "les", "los", "m", "movie",
    "my", "ni", "no", "o", "of", "on", "one", "os", "r", "seven", "t", "the", "there", "to",
    "un", "una", "und", "v", "ve", "was", "what", "who", "with", "y", "you", "your", "z",
];

const DEFAULT_STOP_LANGUAGES: &[&str] = &[
    "oc", "ab", "id", "mr", "la", "ar", "ms", "pa", "sk", "el", "bs", "ga", "tl", "cn", "kk",
    "is", "si", "st", "mo", "hy", "th", "as", "gl", "ur", "sw", "mn", "be", "he", "nb", "iu",
    "zu", "lt", "qu", "ta", "vi", "yi", "ca", "af", "ro", "ml", "uz", "cy", "mi", "ht", "sr",
    "ka", "fa", "eu", "cr", "ha", "bn", "dz", "nn", "os", "te", "bg", "mk", "sq", "sl", "gn",
    "ku", "sa",
];

const DEFAULT_EXCLUDED_YEARS: &[i32] = &[1911, 1912, 1913, 1914, 2024, 2025, 2026];

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            stop_words: DEFAULT_STOP_WORDS.iter().map(|s| s.to_string()).collect(),
            stop_languages: DEFAULT_STOP_LANGUAGES.iter().map(|s| s.to_string()).collect(),
            excluded_years: DEFAULT_EXCLUDED_YEARS.to_vec(),
        }
    }
}

impl AnalysisConfig {
    /// No exclusions at all
    pub fn empty() -> Self {
        Self {
            stop_words: Vec::new(),
            stop_languages: Vec::new(),
            excluded_years: Vec::new(),
        }
    }

    /// Stop-words, lower-cased, as a membership index
    pub fn stop_word_index(&self) -> MembershipIndex {
        MembershipIndex::build(self.stop_words.iter().map(|w| w.to_lowercase()))
    }

    /// Stop-language codes as a membership index
    pub fn stop_language_index(&self) -> MembershipIndex {
        MembershipIndex::build(self.stop_languages.iter().cloned())
    }

    pub fn is_excluded_year(&self, year: i32) -> bool {
        self.excluded_years.contains(&year)
    }
}
