//! Text normalization applied before training and encoding.
//!
//! Corpus text coming out of extraction is messy: tabs, mixed line endings,
//! runs of blank lines. [`Normalizer::clean`] collapses all of that to words
//! separated by single spaces, optionally after Unicode normalization.

use unicode_normalization::UnicodeNormalization;

/// Unicode normalization form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NormalizationForm {
    /// Canonical composition
    NFC,
    /// Compatibility composition
    NFKC,
    /// No normalization
    #[default]
    None,
}

impl std::str::FromStr for NormalizationForm {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "nfc" => Ok(Self::NFC),
            "nfkc" => Ok(Self::NFKC),
            "none" => Ok(Self::None),
            other => Err(format!("unknown normalization form: {}", other)),
        }
    }
}

/// Text normalizer.
#[derive(Debug, Clone, Copy, Default)]
pub struct Normalizer {
    form: NormalizationForm,
}

impl Normalizer {
    /// Create a new normalizer.
    pub fn new(form: NormalizationForm) -> Self {
        Self { form }
    }

    /// Create an NFC normalizer.
    pub fn nfc() -> Self {
        Self::new(NormalizationForm::NFC)
    }

    /// Apply only the Unicode normalization form.
    pub fn normalize(&self, text: &str) -> String {
        match self.form {
            NormalizationForm::NFC => text.nfc().collect(),
            NormalizationForm::NFKC => text.nfkc().collect(),
            NormalizationForm::None => text.to_string(),
        }
    }

    /// Normalize, then trim and collapse every run of whitespace (spaces,
    /// tabs, CR, LF, form feed) into a single space.
    pub fn clean(&self, text: &str) -> String {
        let normalized = self.normalize(text);
        let mut out = String::with_capacity(normalized.len());
        for word in normalized.split_ascii_whitespace() {
            if !out.is_empty() {
                out.push(' ');
            }
            out.push_str(word);
        }
        out
    }

    /// Check if Unicode normalization is enabled.
    pub fn is_enabled(&self) -> bool {
        self.form != NormalizationForm::None
    }
}
