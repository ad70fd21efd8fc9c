use colored::*;

use crate::models::Feature;

/// Lista las categorías reconocidas con sus palabras clave
pub fn list_features() {
    println!("{}", "Funcionalidades reconocidas:".green());
    for (i, feature) in Feature::ALL.iter().enumerate() {
        let template = feature.template();
        println!(
            "{}: {} [{}] - {}",
            i + 1,
            feature.as_str().bold(),
            template.priority.badge(),
            feature.keywords().join(", ")
        );
    }
}
