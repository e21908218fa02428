//! Static Synthesizer
//!
//! Builds a full record from the template catalogue when no database row
//! exists. The flagship city's name is replaced in the long description with a
//! plain, case-sensitive literal replace; everything else is copied as authored.

use crate::catalog::{StaticCatalog, TemplateLocale};
use crate::content::{Bilingual, CustomSectionsByLocale, Faq, Section, ServiceContent, Tier};
use crate::slug::SlugCodec;
use std::sync::Arc;

pub struct StaticSynthesizer {
    catalog: Arc<StaticCatalog>,
    codec: Arc<SlugCodec>,
}

impl StaticSynthesizer {
    pub fn new(catalog: Arc<StaticCatalog>, codec: Arc<SlugCodec>) -> Self {
        Self { catalog, codec }
    }

    /// `None` only when `service_key` is not in the catalogue; any city works.
    pub fn synthesize(&self, service_key: &str, city_slug: &str) -> Option<ServiceContent> {
        let template = self.catalog.get(service_key)?;
        let city = self.codec.city_display_name(city_slug);
        let flagship = self.catalog.flagship_city();

        let es = &template.es;
        let en = template.en.as_ref();

        Some(ServiceContent {
            service_key: service_key.to_string(),
            locality_id: None,
            locality_slug: city_slug.to_string(),
            locality_name: city.clone(),
            title: Bilingual::new(
                format!("{} en {}", es.name, city),
                en.map(|en| format!("{} in {}", en.name, city)),
            ),
            meta_description: Bilingual::new(
                es.description.to_string(),
                en.map(|en| en.description.to_string()),
            ),
            short_description: Bilingual::new(
                es.description.to_string(),
                en.map(|en| en.description.to_string()),
            ),
            long_description: Bilingual::new(
                es.long_description.replace(flagship, &city),
                en.map(|en| en.long_description.replace(flagship, &city)),
            ),
            sections: Bilingual::new(sections(es), en.map(sections)),
            process: Bilingual::new(process(es), en.map(process)),
            faqs: Bilingual::new(faqs(es), en.map(faqs)),
            custom_sections: CustomSectionsByLocale::default(),
            slug_es: self.codec.compose(service_key, city_slug),
            slug_en: Some(self.codec.derive_slug_en(service_key, city_slug)),
            tier: Tier::Static,
        })
    }
}

fn sections(locale: &TemplateLocale) -> Vec<Section> {
    locale
        .sections
        .iter()
        .map(|(title, content)| Section {
            title: title.to_string(),
            content: content.to_string(),
        })
        .collect()
}

fn process(locale: &TemplateLocale) -> Vec<String> {
    locale.process.iter().map(|step| step.to_string()).collect()
}

fn faqs(locale: &TemplateLocale) -> Vec<Faq> {
    locale
        .faqs
        .iter()
        .map(|(question, answer)| Faq {
            question: question.to_string(),
            answer: answer.to_string(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{LookupTables, ServiceTemplate, DEFAULT_SLUG_PREFIX};

    fn synthesizer(catalog: StaticCatalog) -> StaticSynthesizer {
        let codec = SlugCodec::new(
            DEFAULT_SLUG_PREFIX,
            catalog.service_ids(),
            Arc::new(LookupTables::builtin()),
        );
        StaticSynthesizer::new(Arc::new(catalog), Arc::new(codec))
    }

    const FIXTURE: ServiceTemplate = ServiceTemplate {
        id: "herencias",
        es: TemplateLocale {
            name: "Herencias",
            description: "Herencias en Murcia",
            long_description: "Despacho en Murcia. murcia en minúsculas. Murciano de origen.",
            sections: &[("Murcia", "Sección sobre Murcia")],
            process: &["Paso 1", "Paso 2", "Paso 3"],
            faqs: &[("¿Murcia?", "Sí")],
        },
        en: None,
    };

    #[test]
    fn test_alicante_scenario() {
        let content = synthesizer(StaticCatalog::builtin())
            .synthesize("accidentes-trafico", "alicante")
            .unwrap();

        assert_eq!(content.tier, Tier::Static);
        assert_eq!(content.locality_name, "Alicante");
        assert_eq!(content.locality_id, None);
        assert_eq!(content.slug_es, "abogados-accidentes-trafico-alicante");
        assert_eq!(content.slug_en.as_deref(), Some("car-accident-lawyers-alicante"));
        assert!(content.custom_sections.is_none());
        assert!(content.long_description.es.contains("Alicante"));
        assert!(!content.long_description.es.contains("Murcia"));
        let en = content.long_description.en.unwrap();
        assert!(en.contains("Alicante") && !en.contains("Murcia"));
        assert_eq!(content.title.es, "Abogados de accidentes de tráfico en Alicante");
    }

    #[test]
    fn test_replace_is_literal_and_case_sensitive() {
        let catalog = StaticCatalog::new("Murcia", vec![FIXTURE]);
        let content = synthesizer(catalog).synthesize("herencias", "lorca").unwrap();

        assert_eq!(
            content.long_description.es,
            "Despacho en Lorca. murcia en minúsculas. Lorcano de origen."
        );
        // sections, process and faqs are copied as authored
        assert_eq!(content.sections.es[0].content, "Sección sobre Murcia");
        assert_eq!(content.faqs.es[0].question, "¿Murcia?");
        assert_eq!(content.process.es, vec!["Paso 1", "Paso 2", "Paso 3"]);
        assert_eq!(content.meta_description.es, "Herencias en Murcia");
    }

    #[test]
    fn test_unknown_city_is_title_cased() {
        let content = synthesizer(StaticCatalog::builtin())
            .synthesize("herencias", "san-pedro-del-pinatar")
            .unwrap();
        assert_eq!(content.locality_name, "San Pedro Del Pinatar");
        assert!(content.long_description.es.contains("San Pedro Del Pinatar"));
    }

    #[test]
    fn test_missing_english_template() {
        let content = synthesizer(StaticCatalog::builtin())
            .synthesize("derecho-penal-economico", "elche")
            .unwrap();
        assert!(content.title.en.is_none());
        assert!(content.faqs.en.is_none());
        assert_eq!(
            content.slug_en.as_deref(),
            Some("white-collar-crime-lawyers-elche")
        );
    }

    #[test]
    fn test_unknown_service() {
        assert!(synthesizer(StaticCatalog::builtin())
            .synthesize("not-a-real-service", "murcia")
            .is_none());
    }
}
