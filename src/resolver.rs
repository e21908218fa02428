//! Tier Resolver
//!
//! Entry points the rest of the site depends on. Tiers are tried in a fixed
//! order, each at most once, sequentially:
//!
//! 1. modern per-service table (only if the service has one)
//! 2. legacy generic table
//! 3. static template catalogue
//!
//! A failed query or an unmappable row counts as a miss for that tier and the
//! next one is tried. `None` means the service key (or composite slug) is not
//! known anywhere.

use crate::catalog::{StaticCatalog, StaticTables};
use crate::content::ServiceContent;
use crate::mapper::{SchemaMapper, SourceRow};
use crate::slug::SlugCodec;
use crate::source::ContentSource;
use crate::synth::StaticSynthesizer;
use crate::tiers::{ContentTier, LegacyTier, ModernTier, StaticTier};
use std::sync::Arc;
use tracing::{debug, info, warn};

pub struct TierResolver {
    tiers: Vec<Box<dyn ContentTier>>,
    source: Arc<dyn ContentSource>,
    mapper: Arc<SchemaMapper>,
    codec: Arc<SlugCodec>,
    catalog: Arc<StaticCatalog>,
}

impl TierResolver {
    pub fn new(source: Arc<dyn ContentSource>, statics: StaticTables) -> Self {
        let codec = Arc::new(SlugCodec::new(
            statics.slug_prefix.clone(),
            statics.catalog.service_ids(),
            Arc::clone(&statics.lookup),
        ));
        let mapper = Arc::new(SchemaMapper::new(
            Arc::clone(&statics.tables),
            Arc::clone(&codec),
        ));
        let synthesizer = StaticSynthesizer::new(Arc::clone(&statics.catalog), Arc::clone(&codec));

        let tiers: Vec<Box<dyn ContentTier>> = vec![
            Box::new(ModernTier::new(
                Arc::clone(&source),
                Arc::clone(&statics.tables),
                Arc::clone(&mapper),
            )),
            Box::new(LegacyTier::new(Arc::clone(&source), Arc::clone(&mapper))),
            Box::new(StaticTier::new(synthesizer)),
        ];

        Self {
            tiers,
            source,
            mapper,
            codec,
            catalog: statics.catalog,
        }
    }

    pub fn codec(&self) -> &SlugCodec {
        &self.codec
    }

    /// Resolve a (service, city) pair to content from the most authoritative tier.
    pub async fn resolve(&self, service_key: &str, city_slug: &str) -> Option<ServiceContent> {
        for tier in &self.tiers {
            match tier.lookup(service_key, city_slug).await {
                Ok(Some(content)) => {
                    debug!("Resolved {}/{} from {} tier", service_key, city_slug, tier.tier());
                    return Some(content);
                }
                Ok(None) => {
                    debug!("{} tier miss for {}/{}", tier.tier(), service_key, city_slug);
                }
                Err(e) => {
                    warn!(
                        "{} tier failed for {}/{}, falling back: {}",
                        tier.tier(),
                        service_key,
                        city_slug,
                        e
                    );
                }
            }
        }

        match self.catalog.closest_service(service_key) {
            Some(suggestion) => info!(
                "Unknown service '{}' (did you mean '{}'?)",
                service_key, suggestion
            ),
            None => info!("Unknown service '{}'", service_key),
        }
        None
    }

    /// Resolve a legacy composite slug (`abogados-<serviceId>-<citySlug>`).
    ///
    /// An exact match in the legacy table wins; otherwise the slug is split
    /// into service and city and resolved like `resolve`.
    pub async fn resolve_by_slug(&self, slug_es: &str) -> Option<ServiceContent> {
        match self.source.legacy_row_by_slug(slug_es).await {
            Ok(Some(row)) => match self.mapper.map(SourceRow::Legacy(row)) {
                Ok(content) => {
                    debug!("Resolved slug '{}' from legacy tier", slug_es);
                    return Some(content);
                }
                Err(e) => warn!("Legacy row for slug '{}' could not be mapped: {}", slug_es, e),
            },
            Ok(None) => debug!("No legacy row for slug '{}'", slug_es),
            Err(e) => warn!("Legacy slug lookup failed for '{}', falling back: {}", slug_es, e),
        }

        let Some(parts) = self.codec.decompose(slug_es) else {
            info!("Unrecognized slug '{}'", slug_es);
            return None;
        };

        self.resolve(&parts.service_key, &parts.city_slug).await
    }

    /// Advertised routes that resolve to nothing. Any entry is a content or
    /// catalogue defect.
    pub async fn unresolved(&self, routes: &[(String, String)]) -> Vec<(String, String)> {
        let mut missing = Vec::new();
        for (service, city) in routes {
            if self.resolve(service, city).await.is_none() {
                missing.push((service.clone(), city.clone()));
            }
        }
        missing
    }
}
