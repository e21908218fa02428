//! Schema Mapper
//!
//! Normalizes the two database row shapes into `ServiceContent`:
//! - modern rows come from per-service tables; custom content is spread over
//!   catalogued columns (`tipos_accidente_es`, `stats_en`, ...) and is folded
//!   into one map per locale
//! - legacy rows carry custom content pre-aggregated in
//!   `custom_sections_{locale}`, passed through untouched
//!
//! The two tiers do not share custom-field vocabulary.

use crate::catalog::TableCatalog;
use crate::content::{
    Bilingual, CustomSections, CustomSectionsByLocale, Locality, ServiceContent, Tier,
};
use crate::error::{ContentError, Result};
use crate::locale::Locale;
use crate::slug::SlugCodec;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::sync::Arc;
use uuid::Uuid;

/// A row from a per-service table, with its joined locality. Columns vary by
/// table, so they are kept as a JSON object.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ModernRow {
    pub columns: Map<String, Value>,
    pub locality: Locality,
}

/// A row from the legacy generic table joined with `services` and `localities`.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize, sqlx::FromRow)]
pub struct LegacyRow {
    pub service_key: String,
    pub locality_id: Option<Uuid>,
    pub locality_name: Option<String>,
    pub locality_slug: String,
    pub slug_es: String,
    pub slug_en: Option<String>,
    pub title_es: Option<String>,
    pub title_en: Option<String>,
    pub meta_description_es: Option<String>,
    pub meta_description_en: Option<String>,
    pub short_description_es: Option<String>,
    pub short_description_en: Option<String>,
    pub long_description_es: Option<String>,
    pub long_description_en: Option<String>,
    pub sections_es: Option<Value>,
    pub sections_en: Option<Value>,
    pub process_es: Option<Value>,
    pub process_en: Option<Value>,
    pub faqs_es: Option<Value>,
    pub faqs_en: Option<Value>,
    pub custom_sections_es: Option<Value>,
    pub custom_sections_en: Option<Value>,
}

/// Raw row of either database tier.
#[derive(Debug, Clone)]
pub enum SourceRow {
    Modern {
        row: ModernRow,
        service_key: String,
        table: String,
    },
    Legacy(LegacyRow),
}

pub struct SchemaMapper {
    tables: Arc<TableCatalog>,
    codec: Arc<SlugCodec>,
}

impl SchemaMapper {
    pub fn new(tables: Arc<TableCatalog>, codec: Arc<SlugCodec>) -> Self {
        Self { tables, codec }
    }

    pub fn map(&self, row: SourceRow) -> Result<ServiceContent> {
        match row {
            SourceRow::Modern {
                row,
                service_key,
                table,
            } => self.map_tier1_row(&row, &service_key, &table),
            SourceRow::Legacy(row) => self.map_tier2_row(&row),
        }
    }

    /// Map a per-service table row. `intro_{locale}` becomes the long
    /// description; catalogued custom columns are folded per locale.
    pub fn map_tier1_row(
        &self,
        row: &ModernRow,
        service_key: &str,
        table_name: &str,
    ) -> Result<ServiceContent> {
        let cols = &row.columns;
        let custom_fields = self.tables.custom_fields(table_name);

        let title = text_pair(cols, "title").ok_or_else(|| {
            ContentError::Mapping(format!(
                "{} row for '{}' has no title_es",
                table_name, row.locality.slug
            ))
        })?;

        let slug_es = text(cols, "slug", Locale::Es)
            .unwrap_or_else(|| self.codec.compose(service_key, &row.locality.slug));

        Ok(ServiceContent {
            service_key: service_key.to_string(),
            locality_id: row.locality.id,
            locality_slug: row.locality.slug.clone(),
            locality_name: self.locality_name(row.locality.name.as_deref(), &row.locality.slug),
            title,
            meta_description: text_or_empty(cols, "meta_description"),
            short_description: text_or_empty(cols, "short_description"),
            long_description: text_or_empty(cols, "intro"),
            sections: list_pair(cols, "sections")?,
            process: list_pair(cols, "process")?,
            faqs: list_pair(cols, "faqs")?,
            custom_sections: CustomSectionsByLocale {
                es: fold_custom_fields(cols, custom_fields, Locale::Es),
                en: fold_custom_fields(cols, custom_fields, Locale::En),
            },
            slug_es,
            slug_en: text(cols, "slug", Locale::En),
            tier: Tier::Modern,
        })
    }

    /// Map a legacy generic-table row.
    pub fn map_tier2_row(&self, row: &LegacyRow) -> Result<ServiceContent> {
        let title_es = row.title_es.clone().ok_or_else(|| {
            ContentError::Mapping(format!("legacy row '{}' has no title_es", row.slug_es))
        })?;

        Ok(ServiceContent {
            service_key: row.service_key.clone(),
            locality_id: row.locality_id,
            locality_slug: row.locality_slug.clone(),
            locality_name: self.locality_name(row.locality_name.as_deref(), &row.locality_slug),
            title: Bilingual::new(title_es, row.title_en.clone()),
            meta_description: Bilingual::new(
                row.meta_description_es.clone().unwrap_or_default(),
                row.meta_description_en.clone(),
            ),
            short_description: Bilingual::new(
                row.short_description_es.clone().unwrap_or_default(),
                row.short_description_en.clone(),
            ),
            long_description: Bilingual::new(
                row.long_description_es.clone().unwrap_or_default(),
                row.long_description_en.clone(),
            ),
            sections: Bilingual::new(
                parse_list(row.sections_es.as_ref(), "sections_es")?.unwrap_or_default(),
                parse_list(row.sections_en.as_ref(), "sections_en")?,
            ),
            process: Bilingual::new(
                parse_list(row.process_es.as_ref(), "process_es")?.unwrap_or_default(),
                parse_list(row.process_en.as_ref(), "process_en")?,
            ),
            faqs: Bilingual::new(
                parse_list(row.faqs_es.as_ref(), "faqs_es")?.unwrap_or_default(),
                parse_list(row.faqs_en.as_ref(), "faqs_en")?,
            ),
            custom_sections: CustomSectionsByLocale {
                es: passthrough_custom(row.custom_sections_es.as_ref()),
                en: passthrough_custom(row.custom_sections_en.as_ref()),
            },
            slug_es: row.slug_es.clone(),
            slug_en: row.slug_en.clone(),
            tier: Tier::Legacy,
        })
    }

    fn locality_name(&self, joined: Option<&str>, slug: &str) -> String {
        match joined {
            Some(name) if !name.trim().is_empty() => name.to_string(),
            _ => self.codec.city_display_name(slug),
        }
    }
}

fn text(cols: &Map<String, Value>, base: &str, locale: Locale) -> Option<String> {
    cols.get(&locale.column(base))
        .and_then(Value::as_str)
        .map(str::to_string)
}

fn text_pair(cols: &Map<String, Value>, base: &str) -> Option<Bilingual<String>> {
    text(cols, base, Locale::Es).map(|es| Bilingual::new(es, text(cols, base, Locale::En)))
}

fn text_or_empty(cols: &Map<String, Value>, base: &str) -> Bilingual<String> {
    Bilingual::new(
        text(cols, base, Locale::Es).unwrap_or_default(),
        text(cols, base, Locale::En),
    )
}

fn list_pair<T: DeserializeOwned>(cols: &Map<String, Value>, base: &str) -> Result<Bilingual<Vec<T>>> {
    let es_col = Locale::Es.column(base);
    let en_col = Locale::En.column(base);
    Ok(Bilingual::new(
        parse_list(cols.get(&es_col), &es_col)?.unwrap_or_default(),
        parse_list(cols.get(&en_col), &en_col)?,
    ))
}

/// Parse an array column. Null or absent -> `None`. Some migrations stored the
/// array as JSON text, so strings are parsed once more.
fn parse_list<T: DeserializeOwned>(value: Option<&Value>, column: &str) -> Result<Option<Vec<T>>> {
    let value = match value {
        None | Some(Value::Null) => return Ok(None),
        Some(Value::String(raw)) => serde_json::from_str::<Value>(raw).map_err(|e| {
            ContentError::Mapping(format!("column '{}' is not valid JSON: {}", column, e))
        })?,
        Some(other) => other.clone(),
    };

    serde_json::from_value(value)
        .map(Some)
        .map_err(|e| ContentError::Mapping(format!("column '{}': {}", column, e)))
}

fn fold_custom_fields(
    cols: &Map<String, Value>,
    fields: &[&'static str],
    locale: Locale,
) -> Option<CustomSections> {
    let mut sections = CustomSections::new();
    for field in fields {
        match cols.get(&locale.column(field)) {
            None | Some(Value::Null) => {}
            Some(value) => {
                sections.insert(field.to_string(), value.clone());
            }
        }
    }

    if sections.is_empty() {
        None
    } else {
        Some(sections)
    }
}

fn passthrough_custom(value: Option<&Value>) -> Option<CustomSections> {
    match value {
        Some(Value::Object(map)) => Some(map.clone()),
        _ => None,
    }
}
