//! Modern (per-service) table catalogue
//!
//! Each flagship practice area has its own table, joined 1:1 with
//! `localities` by `locality_id`. Besides the common columns every table has a
//! few custom columns, stored as `<field>_es` / `<field>_en`, whose base names
//! are listed here. The catalogue is also the whitelist of table names the
//! database layer will ever interpolate into SQL.

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModernTable {
    pub service_key: &'static str,
    pub table: &'static str,
    pub custom_fields: &'static [&'static str],
}

const BUILTIN_TABLES: &[ModernTable] = &[
    ModernTable {
        service_key: "accidentes-trafico",
        table: "servicio_accidentes_trafico",
        custom_fields: &["tipos_accidente", "que_hacer", "stats"],
    },
    ModernTable {
        service_key: "negligencias-medicas",
        table: "servicio_negligencias_medicas",
        custom_fields: &["tipos_negligencia", "hospitales", "plazos"],
    },
    ModernTable {
        service_key: "derecho-familia",
        table: "servicio_derecho_familia",
        custom_fields: &["tipos_procedimiento", "documentacion"],
    },
    ModernTable {
        service_key: "herencias",
        table: "servicio_herencias",
        custom_fields: &["pasos_herencia", "impuesto_sucesiones"],
    },
    ModernTable {
        service_key: "despidos",
        table: "servicio_despidos",
        custom_fields: &["tipos_despido", "indemnizaciones"],
    },
];

#[derive(Debug, Clone, Default)]
pub struct TableCatalog {
    tables: Vec<ModernTable>,
}

impl TableCatalog {
    pub fn new(tables: Vec<ModernTable>) -> Self {
        Self { tables }
    }

    pub fn builtin() -> Self {
        Self::new(BUILTIN_TABLES.to_vec())
    }

    pub fn for_service(&self, service_key: &str) -> Option<&ModernTable> {
        self.tables.iter().find(|t| t.service_key == service_key)
    }

    pub fn by_table(&self, table: &str) -> Option<&ModernTable> {
        self.tables.iter().find(|t| t.table == table)
    }

    /// Custom field names for `table`; empty for unknown tables.
    pub fn custom_fields(&self, table: &str) -> &[&'static str] {
        self.by_table(table).map(|t| t.custom_fields).unwrap_or(&[])
    }

    pub fn iter(&self) -> impl Iterator<Item = &ModernTable> {
        self.tables.iter()
    }
}
