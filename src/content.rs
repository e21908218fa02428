//! Canonical content record
//!
//! Every tier (modern per-service tables, the legacy generic table and the
//! static template catalogue) is normalized into `ServiceContent`, which is the
//! only shape the rendering layer, sitemap and metadata generators consume.

use crate::locale::Locale;
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Open map of service-specific structured extras (accident types, hospital
/// directories, statistic tiles, ...).
pub type CustomSections = serde_json::Map<String, serde_json::Value>;

/// A localized value where Spanish is mandatory and English is optional.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Bilingual<T> {
    pub es: T,
    pub en: Option<T>,
}

impl<T> Bilingual<T> {
    pub fn new(es: T, en: Option<T>) -> Self {
        Self { es, en }
    }

    /// Value for `locale`, falling back to Spanish when the English value is absent.
    pub fn get(&self, locale: Locale) -> &T {
        match locale {
            Locale::Es => &self.es,
            Locale::En => self.en.as_ref().unwrap_or(&self.es),
        }
    }

    /// Value for `locale` without fallback.
    pub fn exact(&self, locale: Locale) -> Option<&T> {
        match locale {
            Locale::Es => Some(&self.es),
            Locale::En => self.en.as_ref(),
        }
    }

    pub fn map<U>(self, mut f: impl FnMut(T) -> U) -> Bilingual<U> {
        Bilingual {
            es: f(self.es),
            en: self.en.map(f),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Section {
    pub title: String,
    pub content: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Faq {
    pub question: String,
    pub answer: String,
}

/// Custom sections per locale. `None` means the source carried no custom
/// content for that locale, which is not the same as an empty map.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct CustomSectionsByLocale {
    pub es: Option<CustomSections>,
    pub en: Option<CustomSections>,
}

impl CustomSectionsByLocale {
    pub fn get(&self, locale: Locale) -> Option<&CustomSections> {
        match locale {
            Locale::Es => self.es.as_ref(),
            Locale::En => self.en.as_ref(),
        }
    }

    pub fn is_none(&self) -> bool {
        self.es.is_none() && self.en.is_none()
    }
}

/// Which storage generation produced a record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tier {
    /// Per-service normalized tables.
    Modern,
    /// Legacy generic table with custom-section blobs.
    Legacy,
    /// In-memory template catalogue.
    Static,
}

impl fmt::Display for Tier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Tier::Modern => write!(f, "modern"),
            Tier::Legacy => write!(f, "legacy"),
            Tier::Static => write!(f, "static"),
        }
    }
}

/// A locality as joined from the `localities` table.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Locality {
    pub id: Option<Uuid>,
    /// Missing only when a row arrives without its join.
    pub name: Option<String>,
    pub slug: String,
    pub province: Option<String>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
}

impl Locality {
    pub fn new(id: Option<Uuid>, name: impl Into<String>, slug: impl Into<String>) -> Self {
        Self {
            id,
            name: Some(name.into()),
            slug: slug.into(),
            ..Default::default()
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServiceContent {
    pub service_key: String,
    /// Absent for statically synthesized records.
    pub locality_id: Option<Uuid>,
    pub locality_slug: String,
    pub locality_name: String,

    pub title: Bilingual<String>,
    pub meta_description: Bilingual<String>,
    pub short_description: Bilingual<String>,
    pub long_description: Bilingual<String>,
    pub sections: Bilingual<Vec<Section>>,
    pub process: Bilingual<Vec<String>>,
    pub faqs: Bilingual<Vec<Faq>>,
    pub custom_sections: CustomSectionsByLocale,

    pub slug_es: String,
    pub slug_en: Option<String>,

    pub tier: Tier,
}

impl ServiceContent {
    /// Single-locale view for renderers. English text falls back to Spanish
    /// field by field; custom sections never fall back.
    pub fn localized(&self, locale: Locale) -> LocalizedContent<'_> {
        let slug = match locale {
            Locale::Es => self.slug_es.as_str(),
            Locale::En => self.slug_en.as_deref().unwrap_or(&self.slug_es),
        };

        LocalizedContent {
            locale,
            service_key: &self.service_key,
            locality_name: &self.locality_name,
            locality_slug: &self.locality_slug,
            slug,
            title: self.title.get(locale),
            meta_description: self.meta_description.get(locale),
            short_description: self.short_description.get(locale),
            long_description: self.long_description.get(locale),
            sections: self.sections.get(locale),
            process: self.process.get(locale),
            faqs: self.faqs.get(locale),
            custom_sections: self.custom_sections.get(locale),
        }
    }

    /// True when English copy exists for the title (the field the site uses to
    /// decide whether an English alternate page is published).
    pub fn has_english(&self) -> bool {
        self.title.en.is_some()
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LocalizedContent<'a> {
    pub locale: Locale,
    pub service_key: &'a str,
    pub locality_name: &'a str,
    pub locality_slug: &'a str,
    pub slug: &'a str,
    pub title: &'a str,
    pub meta_description: &'a str,
    pub short_description: &'a str,
    pub long_description: &'a str,
    pub sections: &'a [Section],
    pub process: &'a [String],
    pub faqs: &'a [Faq],
    pub custom_sections: Option<&'a CustomSections>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> ServiceContent {
        let mut extras = CustomSections::new();
        extras.insert("stats".to_string(), serde_json::json!([{"value": "98%"}]));

        ServiceContent {
            service_key: "herencias".to_string(),
            locality_id: None,
            locality_slug: "lorca".to_string(),
            locality_name: "Lorca".to_string(),
            title: Bilingual::new("Abogados de herencias en Lorca".to_string(), None),
            meta_description: Bilingual::new("Meta".to_string(), Some("Meta EN".to_string())),
            short_description: Bilingual::new("Corta".to_string(), None),
            long_description: Bilingual::new("Larga".to_string(), Some("Long".to_string())),
            sections: Bilingual::new(Vec::new(), None),
            process: Bilingual::new(vec!["Paso".to_string()], None),
            faqs: Bilingual::new(Vec::new(), None),
            custom_sections: CustomSectionsByLocale { es: Some(extras), en: None },
            slug_es: "abogados-herencias-lorca".to_string(),
            slug_en: None,
            tier: Tier::Legacy,
        }
    }

    #[test]
    fn test_localized_falls_back_per_field() {
        let content = sample();
        let en = content.localized(Locale::En);

        assert_eq!(en.title, "Abogados de herencias en Lorca");
        assert_eq!(en.meta_description, "Meta EN");
        assert_eq!(en.long_description, "Long");
        assert_eq!(en.process, ["Paso".to_string()]);
        assert_eq!(en.slug, "abogados-herencias-lorca");
        // custom sections are never borrowed from Spanish
        assert!(en.custom_sections.is_none());
        assert!(content.localized(Locale::Es).custom_sections.is_some());
    }

    #[test]
    fn test_serializes_camel_case() {
        let value = serde_json::to_value(sample()).unwrap();
        assert!(value.get("serviceKey").is_some());
        assert!(value.get("slugEs").is_some());
        assert_eq!(value["customSections"]["en"], serde_json::Value::Null);
        assert_eq!(value["tier"], "legacy");
    }
}
