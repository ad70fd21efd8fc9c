use serde::Serialize;
use serde_json::{Map, Value};
use tracing::debug;

use crate::error::ExportError;
use crate::models::TestCase;

#[derive(Serialize)]
struct JsonPayload<'a> {
    meta: &'a Map<String, Value>,
    testcases: &'a [TestCase],
}

/// Serializa los casos en JSON con sangría de 2 espacios.
/// Sin metadatos se escribe `"meta": {}`.
pub fn testcases_to_json_bytes(
    test_cases: &[TestCase],
    meta: Option<&Map<String, Value>>,
) -> Result<Vec<u8>, ExportError> {
    let empty = Map::new();
    let payload = JsonPayload {
        meta: meta.unwrap_or(&empty),
        testcases: test_cases,
    };

    let bytes = serde_json::to_vec_pretty(&payload)?;
    debug!(bytes = bytes.len(), cases = test_cases.len(), "json export");
    Ok(bytes)
}
