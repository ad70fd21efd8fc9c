use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::models::Priority;

/// Datos de ejemplo asociados a un caso de prueba
pub type SampleData = Map<String, Value>;

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct TestCase {
    pub id: u32,
    pub title: String,
    pub steps: Vec<String>,
    pub expected: String,
    pub priority: Priority,
    pub tags: Vec<String>,
    #[serde(default)]
    pub sample_data: SampleData,
}

impl TestCase {
    /// Crea un caso sin id definitivo; el id se asigna al cerrar el lote
    pub fn new<S: AsRef<str>>(
        title: impl Into<String>,
        steps: &[S],
        expected: impl Into<String>,
        priority: Priority,
        tags: &[&str],
        sample_data: &SampleData,
    ) -> Self {
        let mut unique_tags: Vec<String> = Vec::with_capacity(tags.len());
        for tag in tags {
            if !unique_tags.iter().any(|t| t == tag) {
                unique_tags.push(tag.to_string());
            }
        }

        TestCase {
            id: 0,
            title: title.into(),
            steps: steps.iter().map(|s| s.as_ref().to_string()).collect(),
            expected: expected.into(),
            priority,
            tags: unique_tags,
            sample_data: sample_data.clone(),
        }
    }

    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| t == tag)
    }

    /// Pasos unidos por salto de línea, tal como van en una celda
    pub fn steps_cell(&self) -> String {
        self.steps.join("\n")
    }

    pub fn tags_cell(&self) -> String {
        self.tags.join(", ")
    }

    /// Datos de ejemplo como JSON compacto
    pub fn sample_data_cell(&self) -> String {
        Value::Object(self.sample_data.clone()).to_string()
    }
}
