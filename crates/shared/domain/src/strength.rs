//! Password strength grading.
//!
//! The pipeline only relies on the ordering of [`StrengthLevel`] and on a
//! threshold; how a grade is produced stays behind [`StrengthClassifier`].
//! [`EntropyClassifier`] is the default implementation.

use serde::{Deserialize, Serialize};
use unicode_segmentation::UnicodeSegmentation;

use crate::error::{DomainError, DomainResult};

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Ordered qualitative strength grade, weakest first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StrengthLevel {
    VeryWeak,
    Weak,
    Reasonable,
    Strong,
    VeryStrong,
}

impl StrengthLevel {
    /// All grades in ascending order
    pub const ALL: [StrengthLevel; 5] = [
        StrengthLevel::VeryWeak,
        StrengthLevel::Weak,
        StrengthLevel::Reasonable,
        StrengthLevel::Strong,
        StrengthLevel::VeryStrong,
    ];

    /// The weakest grade, used when grading fails
    pub const WEAKEST: StrengthLevel = StrengthLevel::VeryWeak;

    /// Human readable description of the grade
    pub fn description(&self) -> &'static str {
        match self {
            StrengthLevel::VeryWeak => "Very Weak",
            StrengthLevel::Weak => "Weak",
            StrengthLevel::Reasonable => "Reasonable",
            StrengthLevel::Strong => "Strong",
            StrengthLevel::VeryStrong => "Very Strong",
        }
    }

    /// Check if this grade reaches the given threshold
    pub fn meets(&self, threshold: StrengthLevel) -> bool {
        *self >= threshold
    }

    /// Map an entropy estimate (in bits) to a grade
    pub fn from_entropy(bits: f64) -> Self {
        if bits < 28.0 {
            StrengthLevel::VeryWeak
        } else if bits < 36.0 {
            StrengthLevel::Weak
        } else if bits < 60.0 {
            StrengthLevel::Reasonable
        } else if bits < 128.0 {
            StrengthLevel::Strong
        } else {
            StrengthLevel::VeryStrong
        }
    }
}

impl Default for StrengthLevel {
    fn default() -> Self {
        StrengthLevel::Reasonable
    }
}

impl std::fmt::Display for StrengthLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.description())
    }
}

impl std::str::FromStr for StrengthLevel {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().replace('-', "_").as_str() {
            "very_weak" | "too_short" => Ok(StrengthLevel::VeryWeak),
            "weak" => Ok(StrengthLevel::Weak),
            "reasonable" => Ok(StrengthLevel::Reasonable),
            "strong" => Ok(StrengthLevel::Strong),
            "very_strong" => Ok(StrengthLevel::VeryStrong),
            _ => Err(DomainError::UnknownStrength(s.to_string())),
        }
    }
}

/// Grades how guessable a password is.
///
/// Implementations should be total; an `Err` is treated as the weakest
/// grade by [`grade_or_weakest`].
#[cfg_attr(any(test, feature = "test-utils"), automock)]
pub trait StrengthClassifier: Send + Sync {
    /// Grade a password
    fn grade(&self, password: &str) -> DomainResult<StrengthLevel>;
}

/// Grade a password, failing closed to [`StrengthLevel::WEAKEST`].
pub fn grade_or_weakest(classifier: &dyn StrengthClassifier, password: &str) -> StrengthLevel {
    match classifier.grade(password) {
        Ok(level) => {
            tracing::debug!(strength = level.description(), "Password graded");
            level
        }
        Err(e) => {
            tracing::warn!("Strength classifier failed, treating as weakest: {}", e);
            StrengthLevel::WEAKEST
        }
    }
}

/// Character-set entropy classifier.
///
/// Each character category present in the password widens the assumed
/// alphabet once; entropy is `log2(alphabet) * length`.
#[derive(Debug, Clone, Copy, Default)]
pub struct EntropyClassifier;

impl EntropyClassifier {
    pub fn new() -> Self {
        Self
    }

    /// Entropy estimate in bits
    pub fn entropy(password: &str) -> f64 {
        let length = password.graphemes(true).count();
        if length == 0 {
            return 0.0;
        }

        let mut categories = CharCategories::default();
        for c in password.chars() {
            categories.record(c);
        }

        let alphabet = categories.alphabet_size();
        if alphabet == 0 {
            return 0.0;
        }
        f64::from(alphabet).log2() * length as f64
    }
}

impl StrengthClassifier for EntropyClassifier {
    fn grade(&self, password: &str) -> DomainResult<StrengthLevel> {
        Ok(StrengthLevel::from_entropy(Self::entropy(password)))
    }
}

#[derive(Debug, Default)]
struct CharCategories {
    lowercase: bool,
    uppercase: bool,
    digit: bool,
    symbol: bool,
    punctuation: bool,
    whitespace: bool,
    non_base: bool,
}

impl CharCategories {
    fn record(&mut self, c: char) {
        if is_combining_mark(c) {
            self.non_base = true;
        } else if c.is_lowercase() {
            self.lowercase = true;
        } else if c.is_uppercase() {
            self.uppercase = true;
        } else if c.is_numeric() {
            self.digit = true;
        } else if c.is_whitespace() {
            self.whitespace = true;
        } else if c.is_ascii_punctuation() && !is_ascii_symbol(c) {
            self.punctuation = true;
        } else {
            self.symbol = true;
        }
    }

    fn alphabet_size(&self) -> u32 {
        let sizes: [(bool, u32); 7] = [
            (self.lowercase, 26),
            (self.uppercase, 26),
            (self.digit, 10),
            (self.symbol, 10),
            (self.punctuation, 20),
            (self.whitespace, 1),
            (self.non_base, 32 + 128),
        ];
        sizes
            .iter()
            .filter(|(present, _)| *present)
            .map(|(_, size)| size)
            .sum()
    }
}

/// ASCII math, currency and modifier symbols
fn is_ascii_symbol(c: char) -> bool {
    matches!(c, '$' | '+' | '<' | '=' | '>' | '^' | '`' | '|' | '~')
}

fn is_combining_mark(c: char) -> bool {
    matches!(c,
        '\u{0300}'..='\u{036F}'
        | '\u{1AB0}'..='\u{1AFF}'
        | '\u{1DC0}'..='\u{1DFF}'
        | '\u{20D0}'..='\u{20FF}'
        | '\u{FE20}'..='\u{FE2F}')
}
