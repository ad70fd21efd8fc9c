use csv::{Terminator, WriterBuilder};
use tracing::debug;

use crate::error::ExportError;
use crate::models::TestCase;

pub const CSV_HEADERS: [&str; 7] = [
    "ID",
    "Title",
    "Steps (newline)",
    "Expected",
    "Priority",
    "Tags",
    "SampleData",
];

/// Serializa los casos en CSV (UTF-8)
pub fn testcases_to_csv_bytes(test_cases: &[TestCase]) -> Result<Vec<u8>, ExportError> {
    let mut writer = WriterBuilder::new()
        .terminator(Terminator::CRLF)
        .from_writer(Vec::new());

    writer.write_record(CSV_HEADERS)?;
    for test_case in test_cases {
        writer.write_record([
            test_case.id.to_string(),
            test_case.title.clone(),
            test_case.steps_cell(),
            test_case.expected.clone(),
            test_case.priority.to_string(),
            test_case.tags_cell(),
            test_case.sample_data_cell(),
        ])?;
    }

    let bytes = writer.into_inner().map_err(|e| e.into_error())?;
    debug!(bytes = bytes.len(), rows = test_cases.len(), "csv export");
    Ok(bytes)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Priority, SampleData};
    use serde_json::json;

    fn sample_case() -> TestCase {
        let mut data = SampleData::new();
        data.insert("max_size".into(), json!("5MB"));
        let mut case = TestCase::new(
            "Too large file - upload",
            &["Choose a file, larger than allowed", "Try \"upload\""],
            "Error: File size limit exceeded",
            Priority::High,
            &["negative", "upload"],
            &data,
        );
        case.id = 1;
        case
    }

    #[test]
    fn header_and_row_survive_quoting() {
        let bytes = testcases_to_csv_bytes(&[sample_case()]).unwrap();
        let text = String::from_utf8(bytes.clone()).unwrap();
        assert!(text.starts_with("ID,Title,Steps (newline),Expected,Priority,Tags,SampleData\r\n"));

        let mut reader = csv::Reader::from_reader(bytes.as_slice());
        let headers = reader.headers().unwrap().clone();
        assert_eq!(headers.iter().collect::<Vec<_>>(), CSV_HEADERS.to_vec());

        let rows: Vec<csv::StringRecord> = reader.records().map(|r| r.unwrap()).collect();
        assert_eq!(rows.len(), 1);
        assert_eq!(&rows[0][0], "1");
        assert_eq!(
            &rows[0][2],
            "Choose a file, larger than allowed\nTry \"upload\""
        );
        assert_eq!(&rows[0][4], "High");
        assert_eq!(&rows[0][5], "negative, upload");
        assert_eq!(&rows[0][6], r#"{"max_size":"5MB"}"#);
    }

    #[test]
    fn empty_list_writes_only_header() {
        let bytes = testcases_to_csv_bytes(&[]).unwrap();
        assert_eq!(
            String::from_utf8(bytes).unwrap(),
            "ID,Title,Steps (newline),Expected,Priority,Tags,SampleData\r\n"
        );
    }
}
