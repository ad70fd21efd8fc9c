use once_cell::sync::Lazy;
use regex::Regex;

use crate::models::Constraints;

static SIZE_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)(\d+)\s*(mb|kb|gb)").expect("size pattern"));
static FILE_TYPE_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)(jpg|jpeg|png|gif|pdf|docx|csv|xlsx)").expect("file type pattern")
});
static DIGITS_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)(\d+)\s*(digit|digits)").expect("digits pattern"));
static CURRENCY_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)\bINR\b|\bUSD\b|\$|₹").expect("currency pattern"));

/// Tamaño máximo tal como aparece en el texto, por ejemplo "5MB"
pub fn extract_max_size(text: &str) -> Option<String> {
    SIZE_PATTERN
        .captures(text)
        .map(|caps| format!("{}{}", &caps[1], &caps[2]))
}

/// Extensiones de archivo mencionadas, en minúsculas y sin repetir
pub fn extract_file_types(text: &str) -> Vec<String> {
    let mut types: Vec<String> = Vec::new();
    for found in FILE_TYPE_PATTERN.find_iter(text) {
        let ext = found.as_str().to_lowercase();
        if !types.contains(&ext) {
            types.push(ext);
        }
    }
    types
}

/// Longitud de código indicada como "<N> digit(s)"
pub fn extract_otp_length(text: &str) -> Option<u32> {
    DIGITS_PATTERN
        .captures(text)
        .and_then(|caps| caps[1].parse::<u32>().ok())
}

pub fn detect_money_flow(text: &str) -> bool {
    CURRENCY_PATTERN.is_match(text)
}

/// Combina las cuatro búsquedas independientes en un único registro
pub fn extract_constraints(text: &str) -> Constraints {
    Constraints {
        max_size: extract_max_size(text),
        file_types: extract_file_types(text),
        otp_length: extract_otp_length(text),
        money_flow: detect_money_flow(text),
    }
}
