//! ZIP code validation.

use std::sync::LazyLock;

use regex::Regex;

static ZIP_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^([0-9]{5})(?:-?([0-9]{4}))?$").unwrap_or_else(|_| unreachable!())
});

/// A five-digit ZIP code with an optional plus-4 suffix.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ZipCode {
    zip: String,
    plus4: Option<String>,
}

impl ZipCode {
    /// Parses `98501`, `985016561` or `98501-6561`. Surrounding whitespace
    /// is ignored; anything else is rejected.
    #[must_use]
    pub fn parse(text: &str) -> Option<Self> {
        let text = text.trim();
        if !matches!(text.len(), 5 | 9 | 10) {
            return None;
        }

        let captures = ZIP_PATTERN.captures(text)?;
        Some(Self {
            zip: captures.get(1)?.as_str().to_string(),
            plus4: captures.get(2).map(|m| m.as_str().to_string()),
        })
    }

    /// The five-digit ZIP.
    #[must_use]
    pub fn zip(&self) -> &str {
        &self.zip
    }

    #[must_use]
    pub fn plus4(&self) -> Option<&str> {
        self.plus4.as_deref()
    }

    /// Returns `true` if no plus-4 suffix was given.
    #[must_use]
    pub const fn is_five_digit(&self) -> bool {
        self.plus4.is_none()
    }
}

impl std::fmt::Display for ZipCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.plus4 {
            Some(plus4) => write!(f, "{}-{plus4}", self.zip),
            None => f.write_str(&self.zip),
        }
    }
}
