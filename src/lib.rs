pub mod catalog;
pub mod config;
pub mod content;
pub mod db;
pub mod error;
pub mod locale;
pub mod mapper;
pub mod resolver;
pub mod slug;
pub mod source;
pub mod synth;
pub mod tiers;

pub use catalog::StaticTables;
pub use content::{Bilingual, CustomSections, ServiceContent, Tier};
pub use error::{ContentError, Result};
pub use locale::Locale;
pub use resolver::TierResolver;
pub use source::{ContentSource, InMemoryContentSource};
