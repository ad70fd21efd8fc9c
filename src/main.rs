use std::io;
use std::path::PathBuf;

use clap::{Parser, Subcommand};
use colored::*;
use inquire::{Select, Text};
use tracing_subscriber::EnvFilter;

use testcase_generator::commands::{
    generate_test_cases, list_export_files, list_features, parse_formats,
};
use testcase_generator::config::{clamp_count, GeneratorConfig, DEFAULT_CASE_COUNT};
use testcase_generator::exporter::ExportFormat;
use testcase_generator::utils::DEFAULT_EXPORT_DIR;

/// Variable de entorno con una semilla fija para los datos de ejemplo
const SEED_ENV_VAR: &str = "TCGEN_SEED";

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Generar casos de prueba a partir de un requisito
    Generate {
        /// Texto del requisito
        #[arg(short, long)]
        requirement: String,

        /// Número de casos deseado (los negativos se tratan como 0)
        #[arg(short, long, default_value_t = DEFAULT_CASE_COUNT as i64, allow_negative_numbers = true)]
        count: i64,

        /// Formato de salida: csv, json, xlsx, md, varios separados por comas o all
        #[arg(short, long, default_value = "csv")]
        format: String,

        /// Directorio donde se guardan los archivos
        #[arg(short, long, default_value = DEFAULT_EXPORT_DIR)]
        output_dir: PathBuf,

        /// Nombre base del archivo
        #[arg(short, long)]
        name: Option<String>,

        /// Semilla para obtener datos de ejemplo reproducibles
        #[arg(short, long)]
        seed: Option<u64>,
    },
    /// Listar las funcionalidades reconocidas
    Features,
    /// Listar archivos exportados disponibles
    List {
        /// Directorio de exportación
        #[arg(short, long, default_value = DEFAULT_EXPORT_DIR)]
        output_dir: PathBuf,
    },
}

fn main() -> io::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();

    match &cli.command {
        Some(Commands::Generate {
            requirement,
            count,
            format,
            output_dir,
            name,
            seed,
        }) => {
            let formats = match parse_formats(format) {
                Ok(formats) => formats,
                Err(e) => {
                    println!("{}", format!("Formato inválido: {}", e).red());
                    return Ok(());
                }
            };
            let config = generator_config(*seed);
            generate_test_cases(
                requirement,
                clamp_count(*count),
                &formats,
                output_dir,
                name.clone(),
                config,
            )?
        }
        Some(Commands::Features) => list_features(),
        Some(Commands::List { output_dir }) => list_export_files(output_dir)?,
        None => {
            // Menú interactivo si no se proporciona un comando
            let options = vec![
                "Generar casos de prueba",
                "Listar funcionalidades reconocidas",
                "Listar archivos exportados",
                "Salir",
            ];

            let selection = Select::new("¿Qué deseas hacer?", options).prompt();

            match selection {
                Ok("Generar casos de prueba") => interactive_generate()?,
                Ok("Listar funcionalidades reconocidas") => list_features(),
                Ok("Listar archivos exportados") => {
                    list_export_files(&PathBuf::from(DEFAULT_EXPORT_DIR))?
                }
                _ => println!("¡Hasta pronto!"),
            }
        }
    }

    Ok(())
}

/// Configuración del generador; la semilla de la línea de comandos tiene
/// prioridad sobre la variable de entorno
fn generator_config(seed: Option<u64>) -> GeneratorConfig {
    let seed = seed.or_else(|| {
        std::env::var(SEED_ENV_VAR)
            .ok()
            .and_then(|s| s.trim().parse().ok())
    });

    match seed {
        Some(seed) => GeneratorConfig::default().with_seed(seed),
        None => GeneratorConfig::default(),
    }
}

/// Solicita los datos de generación de forma interactiva
fn interactive_generate() -> io::Result<()> {
    let requirement = Text::new("Describe el requisito:")
        .prompt()
        .unwrap_or_default();

    if requirement.trim().is_empty() {
        println!("{}", "Operación cancelada.".yellow());
        return Ok(());
    }

    let count = Text::new("Número de casos:")
        .with_default(&DEFAULT_CASE_COUNT.to_string())
        .prompt()
        .ok()
        .and_then(|c| c.trim().parse::<i64>().ok())
        .map(clamp_count)
        .unwrap_or(DEFAULT_CASE_COUNT);

    let format_options = vec!["csv", "json", "xlsx", "md", "all"];
    let format = Select::new("Formato de exportación:", format_options)
        .prompt()
        .unwrap_or("csv");
    let formats = parse_formats(format).unwrap_or_else(|_| vec![ExportFormat::Csv]);

    let name = Text::new("Nombre del archivo (opcional):").prompt().ok();

    generate_test_cases(
        &requirement,
        count,
        &formats,
        &PathBuf::from(DEFAULT_EXPORT_DIR),
        name,
        generator_config(None),
    )
}
