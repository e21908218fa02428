//! Static Catalogues
//!
//! Immutable tables loaded once at process start and shared through `Arc`:
//! - the service template catalogue (content authored for the flagship city)
//! - the per-service modern table catalogue and its custom-field names
//! - the city display-name and English slug-prefix lookup tables
//!
//! Nothing here is a global: callers build a `StaticTables` (usually with
//! `StaticTables::builtin()`) and hand it to the resolver, so tests can swap in
//! fixtures.

pub mod lookup;
pub mod tables;
pub mod templates;

pub use lookup::LookupTables;
pub use tables::{ModernTable, TableCatalog};

use std::collections::HashMap;
use std::sync::Arc;
use strsim::jaro_winkler;

/// City the template prose was written for.
pub const FLAGSHIP_CITY: &str = "Murcia";

/// Default prefix of legacy composite slugs (`abogados-<serviceId>-<citySlug>`).
pub const DEFAULT_SLUG_PREFIX: &str = "abogados";

/// Minimum Jaro-Winkler similarity for suggesting a known service key.
const SUGGESTION_THRESHOLD: f64 = 0.8;

/// Authored content for one locale of a service template.
#[derive(Debug, Clone, Copy)]
pub struct TemplateLocale {
    pub name: &'static str,
    pub description: &'static str,
    pub long_description: &'static str,
    pub sections: &'static [(&'static str, &'static str)],
    pub process: &'static [&'static str],
    pub faqs: &'static [(&'static str, &'static str)],
}

#[derive(Debug, Clone, Copy)]
pub struct ServiceTemplate {
    pub id: &'static str,
    pub es: TemplateLocale,
    pub en: Option<TemplateLocale>,
}

/// Service templates keyed by service id, plus the flagship city name that
/// appears literally in their prose.
#[derive(Debug, Clone)]
pub struct StaticCatalog {
    flagship_city: String,
    templates: Vec<ServiceTemplate>,
    by_id: HashMap<&'static str, usize>,
}

impl StaticCatalog {
    pub fn new(flagship_city: impl Into<String>, templates: Vec<ServiceTemplate>) -> Self {
        let by_id = templates
            .iter()
            .enumerate()
            .map(|(idx, t)| (t.id, idx))
            .collect();

        Self {
            flagship_city: flagship_city.into(),
            templates,
            by_id,
        }
    }

    /// The catalogue shipped with the site.
    pub fn builtin() -> Self {
        Self::new(FLAGSHIP_CITY, templates::BUILTIN.to_vec())
    }

    pub fn flagship_city(&self) -> &str {
        &self.flagship_city
    }

    pub fn get(&self, service_id: &str) -> Option<&ServiceTemplate> {
        self.by_id.get(service_id).map(|idx| &self.templates[*idx])
    }

    pub fn contains(&self, service_id: &str) -> bool {
        self.by_id.contains_key(service_id)
    }

    /// Service ids in authoring order.
    pub fn service_ids(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.templates.iter().map(|t| t.id)
    }

    pub fn len(&self) -> usize {
        self.templates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.templates.is_empty()
    }

    /// Closest known service id for an unrecognized key, if any is similar enough.
    pub fn closest_service(&self, key: &str) -> Option<&'static str> {
        self.templates
            .iter()
            .map(|t| (t.id, jaro_winkler(key, t.id)))
            .filter(|(_, score)| *score >= SUGGESTION_THRESHOLD)
            .max_by(|a, b| a.1.total_cmp(&b.1))
            .map(|(id, _)| id)
    }

    /// Every (service, city) route the site advertises: each catalogue service
    /// in every city of the lookup table. All of them must resolve.
    pub fn route_pairs(&self, lookup: &LookupTables) -> Vec<(String, String)> {
        let cities = lookup.city_slugs();
        self.templates
            .iter()
            .flat_map(move |t| {
                cities
                    .iter()
                    .map(move |city| (t.id.to_string(), city.to_string()))
            })
            .collect()
    }
}

/// Everything immutable the resolver needs, bundled for injection.
#[derive(Debug, Clone)]
pub struct StaticTables {
    pub catalog: Arc<StaticCatalog>,
    pub tables: Arc<TableCatalog>,
    pub lookup: Arc<LookupTables>,
    pub slug_prefix: String,
}

impl StaticTables {
    pub fn new(catalog: StaticCatalog, tables: TableCatalog, lookup: LookupTables) -> Self {
        Self {
            catalog: Arc::new(catalog),
            tables: Arc::new(tables),
            lookup: Arc::new(lookup),
            slug_prefix: DEFAULT_SLUG_PREFIX.to_string(),
        }
    }

    pub fn builtin() -> Self {
        Self::new(
            StaticCatalog::builtin(),
            TableCatalog::builtin(),
            LookupTables::builtin(),
        )
    }

    pub fn with_slug_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.slug_prefix = prefix.into();
        self
    }
}
