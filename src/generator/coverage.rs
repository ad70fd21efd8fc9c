use crate::models::TestCase;

/// Etiquetas que se esperan en un lote completo, en orden fijo
pub const DESIRED_TAGS: [&str; 7] = [
    "positive",
    "negative",
    "security",
    "edge",
    "boundary",
    "performance",
    "validation",
];

/// Puntuación de cobertura (0-100) y etiquetas de referencia ausentes
pub fn compute_coverage(cases: &[TestCase]) -> (u32, Vec<String>) {
    let (present, missing): (Vec<&str>, Vec<&str>) = DESIRED_TAGS
        .iter()
        .copied()
        .partition(|tag| cases.iter().any(|case| case.has_tag(tag)));

    let score = (100 * present.len() / DESIRED_TAGS.len()) as u32;
    (score, missing.into_iter().map(String::from).collect())
}
