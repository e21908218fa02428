use landing_content::catalog::{ModernTable, StaticTables, TableCatalog};
use landing_content::content::Locality;
use landing_content::mapper::{LegacyRow, ModernRow};
use landing_content::{InMemoryContentSource, Tier, TierResolver};
use serde_json::json;
use std::sync::Arc;
use uuid::Uuid;

const TRAFFIC_TABLE: &str = "servicio_accidentes_trafico";

/// Modern row for the traffic-accidents table in Cartagena
fn traffic_modern_row() -> ModernRow {
    ModernRow {
        columns: json!({
            "title_es": "Abogados de accidentes de tráfico en Cartagena",
            "title_en": "Car accident lawyers in Cartagena",
            "intro_es": "Texto propio de Cartagena.",
            "sections_es": [{"title": "Puerto", "content": "Accidentes en la zona portuaria"}],
            "process_es": ["1 de 5", "2 de 5", "3 de 5", "4 de 5", "5 de 5"],
            "faqs_es": [],
            "slug_es": "abogados-accidentes-trafico-cartagena",
            "slug_en": "car-accident-lawyers-cartagena",
            "tipos_accidente_es": [{"nombre": "Colisión por alcance"}],
            "stats_es": {"casos_ganados": 340}
        })
        .as_object()
        .cloned()
        .unwrap(),
        locality: Locality::new(Some(Uuid::new_v4()), "Cartagena", "cartagena"),
    }
}

/// Legacy row for the same pair, with its own custom-section vocabulary
fn traffic_legacy_row() -> LegacyRow {
    LegacyRow {
        service_key: "accidentes-trafico".to_string(),
        locality_id: Some(Uuid::new_v4()),
        locality_name: Some("Cartagena".to_string()),
        locality_slug: "cartagena".to_string(),
        slug_es: "abogados-accidentes-trafico-cartagena".to_string(),
        title_es: Some("Legacy: accidentes en Cartagena".to_string()),
        custom_sections_es: Some(json!({"zonas_peligrosas": ["RM-12"]})),
        ..Default::default()
    }
}

fn resolver(source: Arc<InMemoryContentSource>) -> TierResolver {
    TierResolver::new(source, StaticTables::builtin())
}

#[tokio::test]
async fn test_modern_tier_takes_precedence() {
    let source = Arc::new(
        InMemoryContentSource::new()
            .with_modern_row(TRAFFIC_TABLE, traffic_modern_row())
            .with_legacy_row(traffic_legacy_row()),
    );
    let resolver = resolver(Arc::clone(&source));

    let content = resolver.resolve("accidentes-trafico", "cartagena").await.unwrap();

    assert_eq!(content.tier, Tier::Modern);
    // only the modern table has a `stats` custom column
    let custom = content.custom_sections.es.as_ref().unwrap();
    assert!(custom.contains_key("stats"));
    assert!(!custom.contains_key("zonas_peligrosas"));
    assert_eq!(content.long_description.es, "Texto propio de Cartagena.");

    // a modern hit never reaches the legacy table
    assert_eq!(source.modern_queries(), 1);
    assert_eq!(source.legacy_queries(), 0);
}

#[tokio::test]
async fn test_legacy_tier_when_modern_misses() {
    let source = Arc::new(InMemoryContentSource::new().with_legacy_row(traffic_legacy_row()));
    let resolver = resolver(Arc::clone(&source));

    let content = resolver.resolve("accidentes-trafico", "cartagena").await.unwrap();

    assert_eq!(content.tier, Tier::Legacy);
    assert_eq!(content.title.es, "Legacy: accidentes en Cartagena");
    assert!(content.custom_sections.es.unwrap().contains_key("zonas_peligrosas"));
    assert_eq!(source.modern_queries(), 1);
    assert_eq!(source.legacy_queries(), 1);
}

#[tokio::test]
async fn test_modern_failure_falls_back_to_legacy() {
    let source = Arc::new(
        InMemoryContentSource::new()
            .with_modern_row(TRAFFIC_TABLE, traffic_modern_row())
            .with_legacy_row(traffic_legacy_row())
            .failing(Tier::Modern),
    );

    let content = resolver(source).resolve("accidentes-trafico", "cartagena").await.unwrap();
    assert_eq!(content.tier, Tier::Legacy);
}

#[tokio::test]
async fn test_database_failures_fall_back_to_static() {
    let source = Arc::new(
        InMemoryContentSource::new()
            .with_modern_row(TRAFFIC_TABLE, traffic_modern_row())
            .with_legacy_row(traffic_legacy_row())
            .failing(Tier::Modern)
            .failing(Tier::Legacy),
    );

    let content = resolver(source).resolve("accidentes-trafico", "cartagena").await.unwrap();
    assert_eq!(content.tier, Tier::Static);
    assert_eq!(content.locality_name, "Cartagena");
}

#[tokio::test]
async fn test_unmappable_row_is_a_miss() {
    let mut broken = traffic_legacy_row();
    broken.title_es = None;
    let source = Arc::new(InMemoryContentSource::new().with_legacy_row(broken));

    let content = resolver(source).resolve("accidentes-trafico", "cartagena").await.unwrap();
    assert_eq!(content.tier, Tier::Static);
}

#[tokio::test]
async fn test_services_without_modern_table_skip_tier_one() {
    let source = Arc::new(InMemoryContentSource::new());
    let resolver = resolver(Arc::clone(&source));

    let content = resolver.resolve("divorcios", "lorca").await.unwrap();
    assert_eq!(content.tier, Tier::Static);
    assert_eq!(source.modern_queries(), 0);
    assert_eq!(source.legacy_queries(), 1);
}

#[tokio::test]
async fn test_fallback_completeness_for_every_service() {
    let statics = StaticTables::builtin();
    let catalog = Arc::clone(&statics.catalog);
    let resolver = TierResolver::new(Arc::new(InMemoryContentSource::new()), statics);

    for service in catalog.service_ids() {
        let content = resolver
            .resolve(service, "villanueva-del-rio-segura")
            .await
            .unwrap_or_else(|| panic!("{} did not resolve", service));

        assert_eq!(content.locality_name, "Villanueva Del Rio Segura");
        assert!(content.long_description.es.contains("Villanueva Del Rio Segura"));
        assert!(!content.long_description.es.contains(catalog.flagship_city()));
        assert!(!content.title.es.is_empty());
    }
}

#[tokio::test]
async fn test_unknown_service_is_not_found() {
    let resolver = resolver(Arc::new(InMemoryContentSource::new()));
    assert!(resolver.resolve("not-a-real-service", "murcia").await.is_none());
}

#[tokio::test]
async fn test_legacy_row_for_service_outside_catalogue() {
    let row = LegacyRow {
        service_key: "extranjeria".to_string(),
        locality_slug: "murcia".to_string(),
        slug_es: "abogados-extranjeria-murcia".to_string(),
        title_es: Some("Abogados de extranjería en Murcia".to_string()),
        ..Default::default()
    };
    let resolver = resolver(Arc::new(InMemoryContentSource::new().with_legacy_row(row)));

    let content = resolver.resolve("extranjeria", "murcia").await.unwrap();
    assert_eq!(content.tier, Tier::Legacy);
    assert!(resolver.resolve("extranjeria", "lorca").await.is_none());
}

#[tokio::test]
async fn test_alicante_example_scenario() {
    let resolver = resolver(Arc::new(InMemoryContentSource::new()));

    let content = resolver.resolve("accidentes-trafico", "alicante").await.unwrap();

    assert_eq!(content.tier, Tier::Static);
    assert_eq!(content.locality_name, "Alicante");
    assert_eq!(content.slug_en.as_deref(), Some("car-accident-lawyers-alicante"));
    assert!(content.custom_sections.is_none());
    assert!(content.locality_id.is_none());
}

#[tokio::test]
async fn test_modern_order_preserved_through_resolution() {
    let source = Arc::new(
        InMemoryContentSource::new().with_modern_row(TRAFFIC_TABLE, traffic_modern_row()),
    );

    let content = resolver(source).resolve("accidentes-trafico", "cartagena").await.unwrap();
    assert_eq!(content.process.es.len(), 5);
    assert_eq!(content.process.es[2], "3 de 5");
    // English columns were never written for this row
    assert!(content.custom_sections.en.is_none());
    assert!(content.process.en.is_none());
}

#[tokio::test]
async fn test_custom_table_catalogue() {
    let tables = TableCatalog::new(vec![ModernTable {
        service_key: "herencias",
        table: "servicio_herencias",
        custom_fields: &["plazos"],
    }]);
    let statics = StaticTables::new(
        landing_content::catalog::StaticCatalog::builtin(),
        tables,
        landing_content::catalog::LookupTables::builtin(),
    );
    let row = ModernRow {
        columns: json!({
            "title_es": "Herencias en Lorca",
            "plazos_es": {"impuesto": "6 meses"},
            "pasos_herencia_es": ["not catalogued here"]
        })
        .as_object()
        .cloned()
        .unwrap(),
        locality: Locality::new(None, "Lorca", "lorca"),
    };
    let source = Arc::new(InMemoryContentSource::new().with_modern_row("servicio_herencias", row));

    let content = TierResolver::new(source, statics)
        .resolve("herencias", "lorca")
        .await
        .unwrap();

    let custom = content.custom_sections.es.unwrap();
    assert_eq!(custom.len(), 1);
    assert!(custom.contains_key("plazos"));
}

#[tokio::test]
async fn test_every_advertised_route_resolves() {
    let statics = StaticTables::builtin();
    let routes = statics.catalog.route_pairs(&statics.lookup);
    let resolver = TierResolver::new(Arc::new(InMemoryContentSource::new()), statics);

    assert!(resolver.unresolved(&routes).await.is_empty());
}
