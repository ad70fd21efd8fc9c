use std::io;
use std::path::Path;

use colored::*;

use crate::config::GeneratorConfig;
use crate::error::ExportError;
use crate::exporter::ExportFormat;
use crate::generator::{GenerationMeta, Generator};
use crate::models::{Priority, TestCase};
use crate::utils::save_export;

/// Interpreta la opción de formato: uno concreto, varios separados por comas
/// o "all"
pub fn parse_formats(value: &str) -> Result<Vec<ExportFormat>, ExportError> {
    if value.trim().eq_ignore_ascii_case("all") {
        return Ok(ExportFormat::ALL.to_vec());
    }

    let mut formats = Vec::new();
    for part in value.split(',').filter(|p| !p.trim().is_empty()) {
        let format: ExportFormat = part.parse()?;
        if !formats.contains(&format) {
            formats.push(format);
        }
    }

    if formats.is_empty() {
        return Err(ExportError::UnknownFormat(value.to_string()));
    }
    Ok(formats)
}

/// Genera casos de prueba a partir de un requisito y los exporta
pub fn generate_test_cases(
    requirement: &str,
    count: usize,
    formats: &[ExportFormat],
    output_dir: &Path,
    name: Option<String>,
    config: GeneratorConfig,
) -> io::Result<()> {
    let mut generator = Generator::new(config);
    let (test_cases, meta) = generator.generate(requirement, count);

    let meta = match meta {
        Some(meta) => meta,
        None => {
            println!("{}", "El requisito está vacío. No se generaron casos de prueba.".yellow());
            return Ok(());
        }
    };

    print_summary(&test_cases, &meta);

    let base_name = match name {
        Some(n) if !n.trim().is_empty() => n,
        _ => meta.feature_detected.clone(),
    };

    for format in formats {
        let bytes = format.export(&test_cases, Some(&meta), &base_name)?;
        let path = save_export(output_dir, &base_name, *format, &bytes)?;
        println!(
            "{}",
            format!("Casos de prueba exportados a {}", path.display()).green()
        );
    }

    Ok(())
}

/// Muestra por terminal el resumen de una generación
pub fn print_summary(test_cases: &[TestCase], meta: &GenerationMeta) {
    println!(
        "{} {}",
        "Funcionalidad detectada:".blue(),
        meta.feature_detected.bold()
    );

    let score = format!("{}%", meta.coverage_score);
    let score = if meta.coverage_score >= 80 {
        score.green()
    } else if meta.coverage_score >= 50 {
        score.yellow()
    } else {
        score.red()
    };
    println!("{} {}", "Cobertura:".blue(), score);

    if !meta.coverage_missing.is_empty() {
        println!(
            "{} {}",
            "Etiquetas sin cubrir:".blue(),
            meta.coverage_missing.join(", ").yellow()
        );
    }
    println!();

    for test_case in test_cases {
        let badge = match test_case.priority {
            Priority::High => test_case.priority.badge().red(),
            Priority::Medium => test_case.priority.badge().yellow(),
            Priority::Low => test_case.priority.badge().green(),
        };
        println!(
            "{}: {} [{}] ({})",
            test_case.id,
            test_case.title,
            badge,
            test_case.tags_cell()
        );
    }
    println!();
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::get_export_files;

    #[test]
    fn parses_single_list_and_all() {
        assert_eq!(parse_formats("json").unwrap(), vec![ExportFormat::Json]);
        assert_eq!(
            parse_formats("csv, xlsx,csv").unwrap(),
            vec![ExportFormat::Csv, ExportFormat::Xlsx]
        );
        assert_eq!(parse_formats("ALL").unwrap(), ExportFormat::ALL.to_vec());
        assert!(parse_formats("").is_err());
        assert!(parse_formats("csv,doc").is_err());
    }

    #[test]
    fn writes_one_file_per_format() {
        let dir = tempfile::tempdir().unwrap();
        generate_test_cases(
            "Add to cart button",
            5,
            &[ExportFormat::Csv, ExportFormat::Json],
            dir.path(),
            None,
            GeneratorConfig::default().with_seed(9),
        )
        .unwrap();

        let files = get_export_files(dir.path()).unwrap();
        assert_eq!(files.len(), 2);
        assert!(files.iter().all(|f| f.contains("cart_")));
    }

    #[test]
    fn blank_requirement_writes_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("exports");
        generate_test_cases("   ", 5, &ExportFormat::ALL, &out, None, GeneratorConfig::default())
            .unwrap();
        assert!(!out.exists());
    }
}
