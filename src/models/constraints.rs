use serde::{Deserialize, Serialize};

/// Restricciones extraídas del texto de un requisito.
/// Se recalculan en cada generación y nunca se guardan.
#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq, Eq)]
pub struct Constraints {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_size: Option<String>,
    /// Extensiones sin repetir, en orden de aparición
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub file_types: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub otp_length: Option<u32>,
    #[serde(skip_serializing_if = "std::ops::Not::not", default)]
    pub money_flow: bool,
}

impl Constraints {
    pub fn is_empty(&self) -> bool {
        self == &Constraints::default()
    }

    pub fn first_file_type(&self) -> Option<&str> {
        self.file_types.first().map(String::as_str)
    }
}
