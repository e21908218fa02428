//! Content tiers
//!
//! Each storage generation sits behind the same `ContentTier` interface, the
//! static catalogue included, so the resolver can walk them as one ordered list.

use crate::catalog::TableCatalog;
use crate::content::{ServiceContent, Tier};
use crate::error::Result;
use crate::mapper::{SchemaMapper, SourceRow};
use crate::source::ContentSource;
use crate::synth::StaticSynthesizer;
use async_trait::async_trait;
use std::sync::Arc;

#[async_trait]
pub trait ContentTier: Send + Sync {
    fn tier(&self) -> Tier;

    /// `Ok(None)` is a miss; `Err` is a failed lookup or an unmappable row.
    async fn lookup(&self, service_key: &str, city_slug: &str) -> Result<Option<ServiceContent>>;
}

/// Tier 1: the per-service table for `service_key`, if it has one.
pub struct ModernTier {
    source: Arc<dyn ContentSource>,
    tables: Arc<TableCatalog>,
    mapper: Arc<SchemaMapper>,
}

impl ModernTier {
    pub fn new(source: Arc<dyn ContentSource>, tables: Arc<TableCatalog>, mapper: Arc<SchemaMapper>) -> Self {
        Self { source, tables, mapper }
    }
}

#[async_trait]
impl ContentTier for ModernTier {
    fn tier(&self) -> Tier {
        Tier::Modern
    }

    async fn lookup(&self, service_key: &str, city_slug: &str) -> Result<Option<ServiceContent>> {
        let Some(table) = self.tables.for_service(service_key) else {
            return Ok(None);
        };

        let Some(row) = self.source.modern_row(table, city_slug).await? else {
            return Ok(None);
        };

        self.mapper
            .map(SourceRow::Modern {
                row,
                service_key: service_key.to_string(),
                table: table.table.to_string(),
            })
            .map(Some)
    }
}

/// Tier 2: the legacy generic table.
pub struct LegacyTier {
    source: Arc<dyn ContentSource>,
    mapper: Arc<SchemaMapper>,
}

impl LegacyTier {
    pub fn new(source: Arc<dyn ContentSource>, mapper: Arc<SchemaMapper>) -> Self {
        Self { source, mapper }
    }
}

#[async_trait]
impl ContentTier for LegacyTier {
    fn tier(&self) -> Tier {
        Tier::Legacy
    }

    async fn lookup(&self, service_key: &str, city_slug: &str) -> Result<Option<ServiceContent>> {
        match self.source.legacy_row(service_key, city_slug).await? {
            Some(row) => self.mapper.map(SourceRow::Legacy(row)).map(Some),
            None => Ok(None),
        }
    }
}

/// Tier 3: synthesis from the template catalogue. Never fails.
pub struct StaticTier {
    synthesizer: StaticSynthesizer,
}

impl StaticTier {
    pub fn new(synthesizer: StaticSynthesizer) -> Self {
        Self { synthesizer }
    }
}

#[async_trait]
impl ContentTier for StaticTier {
    fn tier(&self) -> Tier {
        Tier::Static
    }

    async fn lookup(&self, service_key: &str, city_slug: &str) -> Result<Option<ServiceContent>> {
        Ok(self.synthesizer.synthesize(service_key, city_slug))
    }
}
