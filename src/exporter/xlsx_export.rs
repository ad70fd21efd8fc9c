use rust_xlsxwriter::{Format, Workbook};
use tracing::debug;

use crate::error::ExportError;
use crate::models::TestCase;

pub const SHEET_NAME: &str = "TestCases";
pub const XLSX_HEADERS: [&str; 7] = [
    "ID",
    "Title",
    "Steps",
    "Expected",
    "Priority",
    "Tags",
    "SampleData",
];
/// Ancho máximo de columna, en caracteres
pub const MAX_COLUMN_WIDTH: usize = 50;

const STEPS_COLUMN: usize = 2;

/// Celdas de una fila de datos, como texto
pub fn row_cells(test_case: &TestCase) -> [String; 7] {
    [
        test_case.id.to_string(),
        test_case.title.clone(),
        test_case.steps_cell(),
        test_case.expected.clone(),
        test_case.priority.to_string(),
        test_case.tags_cell(),
        test_case.sample_data_cell(),
    ]
}

/// Ancho de cada columna: celda más larga + 2, con tope de 50
pub fn column_widths(rows: &[[String; 7]]) -> [usize; 7] {
    let mut widths = XLSX_HEADERS.map(|h| h.chars().count());
    for row in rows {
        for (width, cell) in widths.iter_mut().zip(row.iter()) {
            *width = (*width).max(cell.chars().count());
        }
    }
    widths.map(|w| (w + 2).min(MAX_COLUMN_WIDTH))
}

/// Serializa los casos en un libro XLSX con una hoja "TestCases"
pub fn testcases_to_xlsx_bytes(test_cases: &[TestCase]) -> Result<Vec<u8>, ExportError> {
    let rows: Vec<[String; 7]> = test_cases.iter().map(row_cells).collect();

    let mut workbook = Workbook::new();
    let header_format = Format::new().set_bold();
    let wrap_format = Format::new().set_text_wrap();

    let worksheet = workbook.add_worksheet();
    worksheet.set_name(SHEET_NAME)?;

    for (col, header) in XLSX_HEADERS.iter().enumerate() {
        worksheet.write_string_with_format(0, col as u16, *header, &header_format)?;
    }

    for (test_case, (i, cells)) in test_cases.iter().zip(rows.iter().enumerate()) {
        let row = i as u32 + 1;
        worksheet.write_number(row, 0, test_case.id)?;
        for (col, cell) in cells.iter().enumerate().skip(1) {
            if col == STEPS_COLUMN {
                worksheet.write_string_with_format(row, col as u16, cell.as_str(), &wrap_format)?;
            } else {
                worksheet.write_string(row, col as u16, cell.as_str())?;
            }
        }
    }

    for (col, width) in column_widths(&rows).iter().enumerate() {
        worksheet.set_column_width(col as u16, *width as f64)?;
    }

    let bytes = workbook.save_to_buffer()?;
    debug!(bytes = bytes.len(), rows = test_cases.len(), "xlsx export");
    Ok(bytes)
}
