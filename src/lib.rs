//! Generación de casos de prueba a partir de requisitos en texto libre y su
//! exportación a CSV, JSON, XLSX o Markdown.

pub mod commands;
pub mod config;
pub mod error;
pub mod exporter;
pub mod generator;
pub mod models;
pub mod utils;

pub use config::GeneratorConfig;
pub use error::ExportError;
pub use exporter::ExportFormat;
pub use generator::{generate_from_requirement, GenerationMeta, Generator};
pub use models::{Constraints, Feature, Priority, TestCase};
