use landing_content::catalog::StaticTables;
use landing_content::mapper::LegacyRow;
use landing_content::{InMemoryContentSource, Locale, Tier, TierResolver};
use serde_json::json;
use std::sync::Arc;

fn legacy_divorce_row() -> LegacyRow {
    LegacyRow {
        service_key: "divorcios-mutuo-acuerdo".to_string(),
        locality_name: Some("Molina de Segura".to_string()),
        locality_slug: "molina-de-segura".to_string(),
        // authored slug does not follow the composite pattern
        slug_es: "divorcio-express-molina".to_string(),
        slug_en: Some("quick-divorce-molina".to_string()),
        title_es: Some("Divorcio express en Molina de Segura".to_string()),
        title_en: Some("Quick divorce in Molina de Segura".to_string()),
        faqs_es: Some(json!([{"question": "¿Cuánto cuesta?", "answer": "Desde 300 €"}])),
        ..Default::default()
    }
}

#[tokio::test]
async fn test_exact_legacy_slug_match() {
    let source = Arc::new(InMemoryContentSource::new().with_legacy_row(legacy_divorce_row()));
    let resolver = TierResolver::new(source, StaticTables::builtin());

    let content = resolver.resolve_by_slug("divorcio-express-molina").await.unwrap();

    assert_eq!(content.tier, Tier::Legacy);
    assert_eq!(content.slug_en.as_deref(), Some("quick-divorce-molina"));
    assert_eq!(content.localized(Locale::En).title, "Quick divorce in Molina de Segura");
}

#[tokio::test]
async fn test_composite_slug_decomposed_when_not_in_legacy_table() {
    let source = Arc::new(InMemoryContentSource::new());
    let resolver = TierResolver::new(source.clone(), StaticTables::builtin());

    let content = resolver
        .resolve_by_slug("abogados-divorcios-mutuo-acuerdo-molina-de-segura")
        .await
        .unwrap();

    assert_eq!(content.tier, Tier::Static);
    assert_eq!(content.service_key, "divorcios-mutuo-acuerdo");
    assert_eq!(content.locality_name, "Molina de Segura");
    assert_eq!(content.slug_es, "abogados-divorcios-mutuo-acuerdo-molina-de-segura");
    // exact slug lookup plus the pair lookup
    assert_eq!(source.legacy_queries(), 2);
}

#[tokio::test]
async fn test_decomposed_slug_still_prefers_database_tiers() {
    let mut row = legacy_divorce_row();
    row.slug_es = "something-else".to_string();
    let source = Arc::new(InMemoryContentSource::new().with_legacy_row(row));
    let resolver = TierResolver::new(source, StaticTables::builtin());

    let content = resolver
        .resolve_by_slug("abogados-divorcios-mutuo-acuerdo-molina-de-segura")
        .await
        .unwrap();
    assert_eq!(content.tier, Tier::Legacy);
}

#[tokio::test]
async fn test_slug_lookup_failure_falls_back_to_decomposition() {
    let source = Arc::new(
        InMemoryContentSource::new()
            .with_legacy_row(legacy_divorce_row())
            .failing(Tier::Legacy),
    );
    let resolver = TierResolver::new(source, StaticTables::builtin());

    let content = resolver.resolve_by_slug("abogados-herencias-yecla").await.unwrap();
    assert_eq!(content.tier, Tier::Static);
    assert_eq!(content.locality_name, "Yecla");
}

#[tokio::test]
async fn test_unrecognized_slug_is_not_found() {
    let resolver = TierResolver::new(Arc::new(InMemoryContentSource::new()), StaticTables::builtin());

    assert!(resolver.resolve_by_slug("abogados-inmobiliario-murcia").await.is_none());
    assert!(resolver.resolve_by_slug("contacto").await.is_none());
}

#[tokio::test]
async fn test_custom_slug_prefix() {
    let statics = StaticTables::builtin().with_slug_prefix("abogado");
    let resolver = TierResolver::new(Arc::new(InMemoryContentSource::new()), statics);

    let content = resolver.resolve_by_slug("abogado-despidos-elche").await.unwrap();
    assert_eq!(content.slug_es, "abogado-despidos-elche");
    assert!(resolver.resolve_by_slug("abogados-despidos-elche").await.is_none());
}
