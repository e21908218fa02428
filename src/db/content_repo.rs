//! Content repository for PostgreSQL reads

use crate::catalog::ModernTable;
use crate::content::Locality;
use crate::error::{ContentError, Result};
use crate::mapper::{LegacyRow, ModernRow};
use crate::source::ContentSource;
use async_trait::async_trait;
use serde_json::Value;
use sqlx::{PgPool, Row};
use tracing::debug;

/// Legacy generic table joined against services (by key) and localities (by slug).
const LEGACY_SELECT: &str = r#"
    SELECT s.key AS service_key,
           l.id AS locality_id, l.name AS locality_name, l.slug AS locality_slug,
           c.slug_es, c.slug_en,
           c.title_es, c.title_en,
           c.meta_description_es, c.meta_description_en,
           c.short_description_es, c.short_description_en,
           c.long_description_es, c.long_description_en,
           c.sections_es, c.sections_en,
           c.process_es, c.process_en,
           c.faqs_es, c.faqs_en,
           c.custom_sections_es, c.custom_sections_en
    FROM service_content c
    INNER JOIN services s ON s.id = c.service_id
    INNER JOIN localities l ON l.id = c.locality_id
"#;

pub struct PgContentSource {
    pool: PgPool,
}

impl PgContentSource {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ContentSource for PgContentSource {
    async fn modern_row(&self, table: &ModernTable, city_slug: &str) -> Result<Option<ModernRow>> {
        // table names only ever come from the static table catalogue
        let sql = format!(
            r#"
            SELECT to_jsonb(t) AS columns,
                   l.id AS locality_id, l.name AS locality_name, l.slug AS locality_slug,
                   l.province, l.latitude::float8 AS latitude, l.longitude::float8 AS longitude
            FROM {} t
            INNER JOIN localities l ON l.id = t.locality_id
            WHERE l.slug = $1
            LIMIT 1
            "#,
            table.table
        );
        debug!("Querying {} for '{}'", table.table, city_slug);

        let row = sqlx::query(&sql)
            .bind(city_slug)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| ContentError::Database(format!("Failed to load {} row: {}", table.table, e)))?;

        let Some(row) = row else {
            return Ok(None);
        };

        let columns = match row.try_get::<Value, _>("columns")? {
            Value::Object(map) => map,
            other => {
                return Err(ContentError::Mapping(format!(
                    "{} row is not a JSON object: {}",
                    table.table, other
                )))
            }
        };

        Ok(Some(ModernRow {
            columns,
            locality: Locality {
                id: row.try_get("locality_id")?,
                name: row.try_get("locality_name")?,
                slug: row.try_get("locality_slug")?,
                province: row.try_get("province")?,
                latitude: row.try_get("latitude")?,
                longitude: row.try_get("longitude")?,
            },
        }))
    }

    async fn legacy_row(&self, service_key: &str, city_slug: &str) -> Result<Option<LegacyRow>> {
        let sql = format!("{} WHERE s.key = $1 AND l.slug = $2 LIMIT 1", LEGACY_SELECT);
        debug!("Querying service_content for '{}' / '{}'", service_key, city_slug);

        sqlx::query_as::<_, LegacyRow>(&sql)
            .bind(service_key)
            .bind(city_slug)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| ContentError::Database(format!("Failed to load legacy row: {}", e)))
    }

    async fn legacy_row_by_slug(&self, slug_es: &str) -> Result<Option<LegacyRow>> {
        let sql = format!("{} WHERE c.slug_es = $1 LIMIT 1", LEGACY_SELECT);
        debug!("Querying service_content for slug '{}'", slug_es);

        sqlx::query_as::<_, LegacyRow>(&sql)
            .bind(slug_es)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| ContentError::Database(format!("Failed to load legacy slug: {}", e)))
    }
}
