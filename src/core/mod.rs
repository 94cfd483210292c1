//! Core audit engine.
//!
//! - `catalog`: loading catalogs and discovering namespaces
//! - `flatten`: nested catalog to dotted-path map
//! - `audit`: the differ that builds reports
//! - `report`: report model and text rendering
//! - `languages`: the configured base and target languages
//! - `error`: typed errors for loading and auditing

pub mod audit;
pub mod catalog;
pub mod error;
pub mod flatten;
pub mod languages;
pub mod report;

pub use audit::{Auditor, missing_keys};
pub use catalog::{Catalog, CatalogLoader, normalize_namespace, validate_namespace};
pub use error::{AuditError, CatalogError};
pub use flatten::{FlatCatalog, NodeKind, flatten_catalog};
pub use languages::LanguageSet;
pub use report::{AuditReport, Finding, MissingKey, NamespaceReport};
