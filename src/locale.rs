//! Site locales.
//!
//! Spanish is the authoring locale: every record carries Spanish text, English
//! is optional per field. Database columns follow the `<base>_<code>` naming
//! convention (`title_es`, `faqs_en`, ...).

use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    Es,
    En,
}

impl Locale {
    /// Every locale the site publishes, authoring locale first.
    pub const ALL: [Locale; 2] = [Locale::Es, Locale::En];

    /// ISO 639-1 two-letter code.
    pub fn code(&self) -> &'static str {
        match self {
            Locale::Es => "es",
            Locale::En => "en",
        }
    }

    /// Parse an ISO 639-1 code. Case-insensitive, returns `None` for
    /// locales the site does not publish.
    pub fn from_code(code: &str) -> Option<Locale> {
        match code.trim().to_ascii_lowercase().as_str() {
            "es" => Some(Locale::Es),
            "en" => Some(Locale::En),
            _ => None,
        }
    }

    /// Column name for a localized field: `column("intro")` -> `intro_es`.
    pub fn column(&self, base: &str) -> String {
        format!("{}_{}", base, self.code())
    }
}

impl Default for Locale {
    fn default() -> Self {
        Locale::Es
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_column_names() {
        assert_eq!(Locale::Es.column("tipos_accidente"), "tipos_accidente_es");
        assert_eq!(Locale::En.column("intro"), "intro_en");
    }

    #[test]
    fn test_from_code() {
        assert_eq!(Locale::from_code("ES"), Some(Locale::Es));
        assert_eq!(Locale::from_code(" en "), Some(Locale::En));
        assert_eq!(Locale::from_code("fr"), None);
    }
}
