pub mod builder;
pub mod classifier;
pub mod constraints;
pub mod coverage;
pub mod sample_data;

use rand::rngs::StdRng;
use serde::{Deserialize, Serialize};
use serde_json::{json, Map, Value};
use tracing::debug;

pub use builder::build_cases;
pub use classifier::detect_feature;
pub use constraints::extract_constraints;
pub use coverage::compute_coverage;
pub use sample_data::make_sample_data;

use crate::config::GeneratorConfig;
use crate::models::{SampleData, TestCase};

/// Nombre que se informa cuando no se detecta ninguna categoría
pub const GENERIC_FEATURE: &str = "generic";

/// Resumen de una generación
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct GenerationMeta {
    pub feature_detected: String,
    pub coverage_score: u32,
    pub coverage_missing: Vec<String>,
    pub sample_data: SampleData,
}

impl GenerationMeta {
    pub fn to_map(&self) -> Map<String, Value> {
        let mut map = Map::new();
        map.insert("feature_detected".into(), json!(self.feature_detected));
        map.insert("coverage_score".into(), json!(self.coverage_score));
        map.insert("coverage_missing".into(), json!(self.coverage_missing));
        map.insert(
            "sample_data".into(),
            Value::Object(self.sample_data.clone()),
        );
        map
    }
}

/// Generador de casos con su propio generador aleatorio
pub struct Generator {
    config: GeneratorConfig,
    rng: StdRng,
}

impl Generator {
    pub fn new(config: GeneratorConfig) -> Self {
        Generator {
            rng: config.rng(),
            config,
        }
    }

    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    /// Genera con el número de casos por defecto de la configuración
    pub fn generate_default(&mut self, requirement: &str) -> (Vec<TestCase>, Option<GenerationMeta>) {
        let count = self.config.default_count;
        self.generate(requirement, count)
    }

    /// Genera los casos de un requisito y su resumen.
    ///
    /// Un requisito vacío o solo con espacios devuelve una lista vacía y
    /// ningún resumen.
    pub fn generate(
        &mut self,
        requirement: &str,
        count: usize,
    ) -> (Vec<TestCase>, Option<GenerationMeta>) {
        let requirement = requirement.trim();
        if requirement.is_empty() {
            return (Vec::new(), None);
        }

        let feature = detect_feature(requirement);
        debug!(feature = ?feature, count, "generating test cases");

        let cases = build_cases(feature, requirement, count, &mut self.rng);
        let (coverage_score, coverage_missing) = compute_coverage(&cases);

        let meta = GenerationMeta {
            feature_detected: feature
                .map(|f| f.as_str().to_string())
                .unwrap_or_else(|| GENERIC_FEATURE.to_string()),
            coverage_score,
            coverage_missing,
            sample_data: cases
                .first()
                .map(|c| c.sample_data.clone())
                .unwrap_or_default(),
        };

        (cases, Some(meta))
    }
}

/// Genera casos con un generador aleatorio sin semilla
pub fn generate_from_requirement(
    requirement: &str,
    count: usize,
) -> (Vec<TestCase>, Option<GenerationMeta>) {
    Generator::new(GeneratorConfig::default()).generate(requirement, count)
}
