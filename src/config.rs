use rand::rngs::StdRng;
use rand::SeedableRng;

/// Número de casos que se generan si no se indica otro
pub const DEFAULT_CASE_COUNT: usize = 8;

/// Configuración de una sesión de generación
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GeneratorConfig {
    pub default_count: usize,
    /// Semilla fija para obtener datos de ejemplo reproducibles
    pub seed: Option<u64>,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        GeneratorConfig {
            default_count: DEFAULT_CASE_COUNT,
            seed: None,
        }
    }
}

impl GeneratorConfig {
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn with_default_count(mut self, count: usize) -> Self {
        self.default_count = count;
        self
    }

    pub fn rng(&self) -> StdRng {
        match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        }
    }
}

/// Convierte un número de casos con signo en uno válido; los negativos pasan a 0
pub fn clamp_count(count: i64) -> usize {
    usize::try_from(count.max(0)).unwrap_or(usize::MAX)
}
