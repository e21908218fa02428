//! Data-access seam
//!
//! Read-only queries the database tiers need. "No row" (`Ok(None)`) and
//! "query failed" (`Err`) stay distinguishable here; the resolver decides to
//! treat both as a tier miss.

use crate::catalog::ModernTable;
use crate::content::Tier;
use crate::error::{ContentError, Result};
use crate::mapper::{LegacyRow, ModernRow};
use async_trait::async_trait;
use std::collections::{HashMap, HashSet};
use std::sync::atomic::{AtomicUsize, Ordering};

#[async_trait]
pub trait ContentSource: Send + Sync {
    /// Row of a per-service table whose joined locality has `city_slug`.
    async fn modern_row(&self, table: &ModernTable, city_slug: &str) -> Result<Option<ModernRow>>;

    /// Legacy row joined on `services.key = service_key` and `localities.slug = city_slug`.
    async fn legacy_row(&self, service_key: &str, city_slug: &str) -> Result<Option<LegacyRow>>;

    /// Legacy row whose Spanish slug is exactly `slug_es`.
    async fn legacy_row_by_slug(&self, slug_es: &str) -> Result<Option<LegacyRow>>;
}

/// Fixture source for tests and offline runs. Failures can be injected per tier
/// and query counts are recorded so tests can check which tiers were consulted.
#[derive(Debug, Default)]
pub struct InMemoryContentSource {
    modern: HashMap<(String, String), ModernRow>,
    legacy: Vec<LegacyRow>,
    failing: HashSet<Tier>,
    modern_queries: AtomicUsize,
    legacy_queries: AtomicUsize,
}

impl InMemoryContentSource {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a row for a per-service table, keyed by its locality slug.
    pub fn with_modern_row(mut self, table: &str, row: ModernRow) -> Self {
        self.modern
            .insert((table.to_string(), row.locality.slug.clone()), row);
        self
    }

    pub fn with_legacy_row(mut self, row: LegacyRow) -> Self {
        self.legacy.push(row);
        self
    }

    /// Make every query against `tier` fail with a database error.
    pub fn failing(mut self, tier: Tier) -> Self {
        self.failing.insert(tier);
        self
    }

    pub fn modern_queries(&self) -> usize {
        self.modern_queries.load(Ordering::SeqCst)
    }

    pub fn legacy_queries(&self) -> usize {
        self.legacy_queries.load(Ordering::SeqCst)
    }

    fn check(&self, tier: Tier) -> Result<()> {
        if self.failing.contains(&tier) {
            return Err(ContentError::Database(format!(
                "injected failure for {} tier",
                tier
            )));
        }
        Ok(())
    }
}

#[async_trait]
impl ContentSource for InMemoryContentSource {
    async fn modern_row(&self, table: &ModernTable, city_slug: &str) -> Result<Option<ModernRow>> {
        self.modern_queries.fetch_add(1, Ordering::SeqCst);
        self.check(Tier::Modern)?;
        Ok(self
            .modern
            .get(&(table.table.to_string(), city_slug.to_string()))
            .cloned())
    }

    async fn legacy_row(&self, service_key: &str, city_slug: &str) -> Result<Option<LegacyRow>> {
        self.legacy_queries.fetch_add(1, Ordering::SeqCst);
        self.check(Tier::Legacy)?;
        Ok(self
            .legacy
            .iter()
            .find(|row| row.service_key == service_key && row.locality_slug == city_slug)
            .cloned())
    }

    async fn legacy_row_by_slug(&self, slug_es: &str) -> Result<Option<LegacyRow>> {
        self.legacy_queries.fetch_add(1, Ordering::SeqCst);
        self.check(Tier::Legacy)?;
        Ok(self.legacy.iter().find(|row| row.slug_es == slug_es).cloned())
    }
}
