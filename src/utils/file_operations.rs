use std::fs::{self, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use chrono::Local;

use crate::exporter::ExportFormat;

/// Directorio de exportación por defecto
pub const DEFAULT_EXPORT_DIR: &str = "exports";

const MAX_NAME_ATTEMPTS: u32 = 1000;

/// Convierte un texto libre en un nombre de archivo seguro
pub fn sanitize_file_name(name: &str) -> String {
    let mut sanitized = String::with_capacity(name.len());
    for c in name.trim().chars() {
        if c.is_ascii_alphanumeric() || c == '-' || c == '_' {
            sanitized.push(c.to_ascii_lowercase());
        } else if !sanitized.ends_with('_') {
            sanitized.push('_');
        }
    }

    let sanitized = sanitized.trim_matches('_').to_string();
    if sanitized.is_empty() {
        String::from("test_cases")
    } else {
        sanitized
    }
}

/// Nombre de archivo con fecha y hora: `<base>_<AAAAMMDD_HHMMSS>.<ext>`
pub fn export_file_name(base_name: &str, format: ExportFormat, timestamp: &str) -> String {
    format!(
        "{}_{}.{}",
        sanitize_file_name(base_name),
        timestamp,
        format.extension()
    )
}

/// Guarda un buffer exportado en el directorio indicado y devuelve la ruta
pub fn save_export(
    dir: &Path,
    base_name: &str,
    format: ExportFormat,
    bytes: &[u8],
) -> io::Result<PathBuf> {
    let timestamp = Local::now().format("%Y%m%d_%H%M%S").to_string();
    save_export_at(dir, base_name, format, bytes, &timestamp)
}

/// Guarda el buffer con la marca de tiempo dada sin sobrescribir nunca un
/// archivo existente: si el nombre está ocupado se añade `_2`, `_3`, ...
pub fn save_export_at(
    dir: &Path,
    base_name: &str,
    format: ExportFormat,
    bytes: &[u8],
    timestamp: &str,
) -> io::Result<PathBuf> {
    // Crear el directorio si no existe
    if !dir.exists() {
        fs::create_dir_all(dir)?;
    }

    let first = export_file_name(base_name, format, timestamp);
    let stem = first.trim_end_matches(&format!(".{}", format.extension())).to_string();

    for attempt in 1..=MAX_NAME_ATTEMPTS {
        let file_name = if attempt == 1 {
            first.clone()
        } else {
            format!("{}_{}.{}", stem, attempt, format.extension())
        };
        let path = dir.join(file_name);

        let mut file = match OpenOptions::new().write(true).create_new(true).open(&path) {
            Ok(file) => file,
            Err(e) if e.kind() == io::ErrorKind::AlreadyExists => continue,
            Err(e) => return Err(e),
        };
        file.write_all(bytes)?;
        file.flush()?;

        return Ok(path);
    }

    Err(io::Error::new(
        io::ErrorKind::AlreadyExists,
        format!("No hay un nombre libre para {} en {}", first, dir.display()),
    ))
}

/// Obtiene la lista de archivos exportados disponibles
pub fn get_export_files(dir: &Path) -> io::Result<Vec<String>> {
    let mut files = Vec::new();

    // Verificar si el directorio existe
    if !dir.exists() {
        return Ok(files);
    }

    for entry in fs::read_dir(dir)? {
        let entry = entry?;
        let path = entry.path();

        let known = path.extension().and_then(|ext| ext.to_str()).map_or(false, |ext| {
            ExportFormat::ALL.iter().any(|f| f.extension() == ext)
        });

        if path.is_file() && known {
            if let Some(path_str) = path.to_str() {
                files.push(path_str.to_string());
            }
        }
    }

    // Ordenar alfabéticamente
    files.sort();

    Ok(files)
}
