use std::io::Write;

use chrono::Local;
use tracing::debug;

use crate::error::ExportError;
use crate::generator::GenerationMeta;
use crate::models::{Priority, TestCase};

/// Genera un informe en Markdown con resumen, gráfico y detalle de cada caso
pub fn testcases_to_markdown_bytes(
    test_cases: &[TestCase],
    meta: Option<&GenerationMeta>,
    title: &str,
) -> Result<Vec<u8>, ExportError> {
    let mut out: Vec<u8> = Vec::new();

    // Encabezado
    let timestamp = Local::now().format("%Y-%m-%d %H:%M:%S");
    writeln!(out, "# Casos de Prueba: {}", title)?;
    writeln!(out, "\nFecha de generación: {}", timestamp)?;
    if let Some(meta) = meta {
        writeln!(out, "Funcionalidad detectada: {}\n", meta.feature_detected)?;
    } else {
        writeln!(out)?;
    }

    let count_of = |priority: Priority| {
        test_cases
            .iter()
            .filter(|tc| tc.priority == priority)
            .count()
    };

    // Resumen textual
    writeln!(out, "## Resumen Numérico\n")?;
    writeln!(out, "- Total de casos: {}", test_cases.len())?;
    for priority in Priority::ALL {
        writeln!(out, "- {}: {}", priority.badge(), count_of(priority))?;
    }
    if let Some(meta) = meta {
        writeln!(out, "- Cobertura: {}%", meta.coverage_score)?;
        if !meta.coverage_missing.is_empty() {
            writeln!(
                out,
                "- Etiquetas sin cubrir: {}",
                meta.coverage_missing.join(", ")
            )?;
        }
    }
    writeln!(out)?;

    // Gráfico circular con Mermaid, solo con las porciones no vacías
    writeln!(out, "## Resumen Visual\n")?;
    writeln!(out, "```mermaid")?;
    writeln!(out, "pie title Casos por Prioridad")?;
    for priority in Priority::ALL {
        let count = count_of(priority);
        if count > 0 {
            writeln!(out, "    \"{}\" : {}", priority.badge(), count)?;
        }
    }
    writeln!(out, "```\n")?;

    // Detalle de cada caso
    writeln!(out, "## Detalle de Casos de Prueba\n")?;
    for test_case in test_cases {
        writeln!(out, "### {}. {}", test_case.id, test_case.title)?;
        writeln!(out, "- **Prioridad**: {}", test_case.priority.badge())?;
        writeln!(out, "- **Etiquetas**: {}", test_case.tags_cell())?;
        writeln!(out, "- **Pasos**:")?;
        for (i, step) in test_case.steps.iter().enumerate() {
            writeln!(out, "  {}. {}", i + 1, step)?;
        }
        writeln!(out, "- **Resultado esperado**: {}", test_case.expected)?;

        // Solo mostrar datos de ejemplo si hay alguno
        if !test_case.sample_data.is_empty() {
            writeln!(out, "- **Datos de ejemplo**: `{}`", test_case.sample_data_cell())?;
        }

        writeln!(out)?;
    }

    debug!(bytes = out.len(), cases = test_cases.len(), "markdown export");
    Ok(out)
}
