use std::io;
use std::path::Path;

use colored::*;

use crate::utils::get_export_files;

/// Lista los archivos exportados disponibles
pub fn list_export_files(dir: &Path) -> io::Result<()> {
    let files = get_export_files(dir)?;

    if files.is_empty() {
        println!("{}", "No hay archivos exportados disponibles.".yellow());
        return Ok(());
    }

    println!("{}", "Archivos exportados disponibles:".green());
    for (i, file) in files.iter().enumerate() {
        println!("{}: {}", i + 1, file);
    }

    Ok(())
}
