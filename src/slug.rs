//! Slug codec
//!
//! Builds and parses the identifiers used in landing-page URLs:
//! - generic service slugs: `abogados-<serviceId>`
//! - locality slugs: `molina-de-segura`
//! - legacy composite slugs: `abogados-<serviceId>-<citySlug>`
//!
//! Service ids contain hyphens and some are prefixes of others
//! (`divorcios` / `divorcios-mutuo-acuerdo`), so composite slugs are split by
//! matching known ids longest first.

use crate::catalog::LookupTables;
use itertools::Itertools;
use lazy_static::lazy_static;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

lazy_static! {
    static ref NON_SLUG_CHARS: Regex = Regex::new(r"[^a-z0-9]+").unwrap();
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DecomposedSlug {
    pub service_key: String,
    pub city_slug: String,
}

#[derive(Debug, Clone)]
pub struct SlugCodec {
    prefix: String,
    /// Known service ids, longest first.
    service_ids: Vec<String>,
    lookup: Arc<LookupTables>,
}

impl SlugCodec {
    pub fn new<I, S>(prefix: impl Into<String>, service_ids: I, lookup: Arc<LookupTables>) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let service_ids = service_ids
            .into_iter()
            .map(Into::into)
            .unique()
            .sorted_by(|a: &String, b: &String| b.len().cmp(&a.len()).then_with(|| a.cmp(b)))
            .collect();

        Self {
            prefix: prefix.into(),
            service_ids,
            lookup,
        }
    }

    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    /// Legacy composite slug: `<prefix>-<serviceId>-<citySlug>`.
    pub fn compose(&self, service_id: &str, city_slug: &str) -> String {
        format!("{}-{}-{}", self.prefix, service_id, city_slug)
    }

    /// Generic (city-less) service slug: `<prefix>-<serviceId>`.
    pub fn service_slug(&self, service_id: &str) -> String {
        format!("{}-{}", self.prefix, service_id)
    }

    /// Split a composite slug into service id and city slug.
    ///
    /// Returns `None` when the slug lacks the prefix or no known service id
    /// prefixes the remainder. The first (longest) matching id wins.
    pub fn decompose(&self, slug: &str) -> Option<DecomposedSlug> {
        let remainder = slug.strip_prefix(self.prefix.as_str())?.strip_prefix('-')?;

        let (service_id, city_slug) = self.service_ids.iter().find_map(|id| {
            remainder
                .strip_prefix(id.as_str())
                .and_then(|rest| rest.strip_prefix('-'))
                .map(|city| (id, city))
        })?;

        if city_slug.is_empty() {
            return None;
        }

        Some(DecomposedSlug {
            service_key: service_id.clone(),
            city_slug: city_slug.to_string(),
        })
    }

    /// English slug for synthesized records: `<englishPrefix>-<citySlug>`.
    /// Ids without an English prefix fall back to `<serviceId>-lawyers-<citySlug>`.
    pub fn derive_slug_en(&self, service_id: &str, city_slug: &str) -> String {
        match self.lookup.english_prefix(service_id) {
            Some(prefix) => format!("{}-{}", prefix, city_slug),
            None => format!("{}-lawyers-{}", service_id, city_slug),
        }
    }

    /// Display name for a city slug, reconstructed from the slug when the
    /// city is not in the lookup table.
    pub fn city_display_name(&self, city_slug: &str) -> String {
        match self.lookup.city_name(city_slug) {
            Some(name) => name.to_string(),
            None => title_case_slug(city_slug),
        }
    }

    /// Slug for a locality display name: `Molina de Segura` -> `molina-de-segura`.
    pub fn locality_slug(&self, name: &str) -> String {
        slugify(name)
    }
}

/// `san-pedro-del-pinatar` -> `San Pedro Del Pinatar`.
pub fn title_case_slug(slug: &str) -> String {
    slug.split('-')
        .filter(|word| !word.is_empty())
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                None => String::new(),
            }
        })
        .join(" ")
}

/// Lowercase, fold Spanish diacritics, collapse everything else into hyphens.
pub fn slugify(text: &str) -> String {
    let folded: String = text.to_lowercase().chars().map(fold_diacritic).collect();
    NON_SLUG_CHARS
        .replace_all(&folded, "-")
        .trim_matches('-')
        .to_string()
}

fn fold_diacritic(c: char) -> char {
    match c {
        'á' | 'à' | 'ä' | 'â' => 'a',
        'é' | 'è' | 'ë' | 'ê' => 'e',
        'í' | 'ì' | 'ï' | 'î' => 'i',
        'ó' | 'ò' | 'ö' | 'ô' => 'o',
        'ú' | 'ù' | 'ü' | 'û' => 'u',
        'ñ' => 'n',
        'ç' => 'c',
        other => other,
    }
}
