pub mod csv_export;
pub mod json_export;
pub mod markdown_export;
pub mod xlsx_export;

use std::fmt;
use std::str::FromStr;

pub use csv_export::testcases_to_csv_bytes;
pub use json_export::testcases_to_json_bytes;
pub use markdown_export::testcases_to_markdown_bytes;
pub use xlsx_export::testcases_to_xlsx_bytes;

use crate::error::ExportError;
use crate::generator::GenerationMeta;
use crate::models::TestCase;

/// Formatos de exportación disponibles
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ExportFormat {
    Csv,
    Json,
    Xlsx,
    Markdown,
}

impl ExportFormat {
    pub const ALL: [ExportFormat; 4] = [
        ExportFormat::Csv,
        ExportFormat::Json,
        ExportFormat::Xlsx,
        ExportFormat::Markdown,
    ];

    pub fn extension(&self) -> &'static str {
        match self {
            ExportFormat::Csv => "csv",
            ExportFormat::Json => "json",
            ExportFormat::Xlsx => "xlsx",
            ExportFormat::Markdown => "md",
        }
    }

    /// Serializa los casos en este formato
    pub fn export(
        &self,
        test_cases: &[TestCase],
        meta: Option<&GenerationMeta>,
        title: &str,
    ) -> Result<Vec<u8>, ExportError> {
        match self {
            ExportFormat::Csv => testcases_to_csv_bytes(test_cases),
            ExportFormat::Json => {
                let map = meta.map(GenerationMeta::to_map);
                testcases_to_json_bytes(test_cases, map.as_ref())
            }
            ExportFormat::Xlsx => testcases_to_xlsx_bytes(test_cases),
            ExportFormat::Markdown => testcases_to_markdown_bytes(test_cases, meta, title),
        }
    }
}

impl fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.extension())
    }
}

impl FromStr for ExportFormat {
    type Err = ExportError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "csv" => Ok(ExportFormat::Csv),
            "json" => Ok(ExportFormat::Json),
            "xlsx" | "excel" | "spreadsheet" => Ok(ExportFormat::Xlsx),
            "md" | "markdown" => Ok(ExportFormat::Markdown),
            other => Err(ExportError::UnknownFormat(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_format_names() {
        assert_eq!("CSV".parse::<ExportFormat>().unwrap(), ExportFormat::Csv);
        assert_eq!("excel".parse::<ExportFormat>().unwrap(), ExportFormat::Xlsx);
        assert_eq!("markdown".parse::<ExportFormat>().unwrap(), ExportFormat::Markdown);
        assert!(matches!(
            "pdf".parse::<ExportFormat>(),
            Err(ExportError::UnknownFormat(f)) if f == "pdf"
        ));
    }

    #[test]
    fn json_export_carries_meta() {
        let meta = GenerationMeta {
            feature_detected: "generic".into(),
            coverage_score: 0,
            coverage_missing: Vec::new(),
            sample_data: Default::default(),
        };
        let bytes = ExportFormat::Json.export(&[], Some(&meta), "x").unwrap();
        let value: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(value["meta"]["feature_detected"], "generic");
    }
}
