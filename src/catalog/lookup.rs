//! Slug lookup tables
//!
//! City slug -> display name, and service id -> English slug prefix.

use std::collections::HashMap;

const CITY_NAMES: &[(&str, &str)] = &[
    ("murcia", "Murcia"),
    ("cartagena", "Cartagena"),
    ("lorca", "Lorca"),
    ("molina-de-segura", "Molina de Segura"),
    ("alcantarilla", "Alcantarilla"),
    ("cieza", "Cieza"),
    ("yecla", "Yecla"),
    ("jumilla", "Jumilla"),
    ("aguilas", "Águilas"),
    ("mazarron", "Mazarrón"),
    ("torre-pacheco", "Torre-Pacheco"),
    ("san-javier", "San Javier"),
    ("la-union", "La Unión"),
    ("caravaca-de-la-cruz", "Caravaca de la Cruz"),
    ("alicante", "Alicante"),
    ("elche", "Elche"),
    ("orihuela", "Orihuela"),
    ("torrevieja", "Torrevieja"),
    ("albacete", "Albacete"),
    ("almeria", "Almería"),
    ("valencia", "Valencia"),
    ("madrid", "Madrid"),
];

const ENGLISH_PREFIXES: &[(&str, &str)] = &[
    ("accidentes-trafico", "car-accident-lawyers"),
    ("accidentes-laborales", "workplace-accident-lawyers"),
    ("negligencias-medicas", "medical-malpractice-lawyers"),
    ("derecho-familia", "family-lawyers"),
    ("divorcios", "divorce-lawyers"),
    ("divorcios-mutuo-acuerdo", "uncontested-divorce-lawyers"),
    ("herencias", "inheritance-lawyers"),
    ("despidos", "wrongful-dismissal-lawyers"),
    ("derecho-penal", "criminal-defense-lawyers"),
    ("derecho-penal-economico", "white-collar-crime-lawyers"),
];

#[derive(Debug, Clone, Default)]
pub struct LookupTables {
    city_names: HashMap<String, String>,
    english_prefixes: HashMap<String, String>,
    /// City slugs in table order, for route generation.
    city_order: Vec<String>,
}

impl LookupTables {
    pub fn new<C, E>(city_names: C, english_prefixes: E) -> Self
    where
        C: IntoIterator<Item = (String, String)>,
        E: IntoIterator<Item = (String, String)>,
    {
        let mut tables = Self::default();
        for (slug, name) in city_names {
            if !tables.city_names.contains_key(&slug) {
                tables.city_order.push(slug.clone());
            }
            tables.city_names.insert(slug, name);
        }
        tables.english_prefixes = english_prefixes.into_iter().collect();
        tables
    }

    pub fn builtin() -> Self {
        Self::new(
            CITY_NAMES
                .iter()
                .map(|(slug, name)| (slug.to_string(), name.to_string())),
            ENGLISH_PREFIXES
                .iter()
                .map(|(id, prefix)| (id.to_string(), prefix.to_string())),
        )
    }

    pub fn city_name(&self, slug: &str) -> Option<&str> {
        self.city_names.get(slug).map(String::as_str)
    }

    pub fn english_prefix(&self, service_id: &str) -> Option<&str> {
        self.english_prefixes.get(service_id).map(String::as_str)
    }

    pub fn city_slugs(&self) -> &[String] {
        &self.city_order
    }
}
