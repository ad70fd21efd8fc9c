use rand::seq::SliceRandom;
use rand::Rng;
use serde_json::{json, Value};
use uuid::Builder;

use crate::models::{Constraints, Feature, SampleData};

const FIRST_NAMES: &[&str] = &[
    "alice", "bruno", "carla", "diego", "elena", "felix", "gloria", "hugo", "irene", "julian",
];
const LOWER: &[u8] = b"abcdefghijklmnopqrstuvwxyz";
const UPPER: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ";
const DIGITS: &[u8] = b"0123456789";
const SPECIAL: &[u8] = b"!@#$%^&*_-";

pub const INVALID_EMAIL: &str = "invalid-email";
pub const WEAK_PASSWORD: &str = "12345";
pub const PASSWORD_LENGTH: usize = 10;
pub const DEFAULT_FILE_TYPE: &str = "png";
/// Longitud máxima de OTP que se respeta; por encima se usa uno aleatorio de 6 dígitos
pub const MAX_OTP_LENGTH: u32 = 12;

/// Correo con dominio reservado para ejemplos
pub fn fake_email<R: Rng + ?Sized>(rng: &mut R) -> String {
    let name = FIRST_NAMES.choose(rng).copied().unwrap_or("user");
    format!("{}{}@example.com", name, rng.gen_range(10..1000))
}

/// Contraseña aleatoria con al menos una minúscula, una mayúscula, un dígito
/// y un carácter especial
pub fn fake_password<R: Rng + ?Sized>(rng: &mut R, length: usize) -> String {
    let pools = [LOWER, UPPER, DIGITS, SPECIAL];
    let mut chars: Vec<u8> = pools
        .iter()
        .take(length)
        .map(|pool| pool[rng.gen_range(0..pool.len())])
        .collect();

    let all: Vec<u8> = pools.concat();
    while chars.len() < length {
        chars.push(all[rng.gen_range(0..all.len())]);
    }
    chars.shuffle(rng);

    chars.into_iter().map(char::from).collect()
}

pub fn fake_otp<R: Rng + ?Sized>(rng: &mut R, otp_length: Option<u32>) -> String {
    match otp_length {
        Some(len) if (1..=MAX_OTP_LENGTH).contains(&len) => "1".repeat(len as usize),
        _ => rng.gen_range(100_000..1_000_000).to_string(),
    }
}

pub fn fake_item_id<R: Rng + ?Sized>(rng: &mut R) -> String {
    Builder::from_random_bytes(rng.gen()).into_uuid().to_string()
}

/// Genera datos de ejemplo según la categoría y las restricciones.
///
/// Las entradas se acumulan: una categoría desconocida con extensiones
/// detectadas también recibe los nombres de archivo de ejemplo.
pub fn make_sample_data<R: Rng + ?Sized>(
    feature: Option<Feature>,
    constraints: &Constraints,
    rng: &mut R,
) -> SampleData {
    let mut data = SampleData::new();

    if feature.map_or(false, |f| f.uses_credentials()) {
        data.insert("valid_email".into(), Value::String(fake_email(rng)));
        data.insert("invalid_email".into(), Value::String(INVALID_EMAIL.into()));
        data.insert(
            "valid_password".into(),
            Value::String(fake_password(rng, PASSWORD_LENGTH)),
        );
        data.insert("weak_password".into(), Value::String(WEAK_PASSWORD.into()));
        data.insert(
            "otp_valid".into(),
            Value::String(fake_otp(rng, constraints.otp_length)),
        );
    }

    if feature == Some(Feature::Upload) || !constraints.file_types.is_empty() {
        let ext = constraints.first_file_type().unwrap_or(DEFAULT_FILE_TYPE);
        data.insert(
            "sample_file_valid".into(),
            Value::String(format!("avatar_valid.{ext}")),
        );
        data.insert(
            "sample_file_large".into(),
            Value::String(format!("avatar_large.{ext}")),
        );
        if let Some(max_size) = &constraints.max_size {
            data.insert("max_size".into(), Value::String(max_size.clone()));
        }
    }

    match feature {
        Some(Feature::Payment) => {
            data.insert("dummy_upi".into(), json!("user@upi"));
            data.insert("dummy_card".into(), json!("4111 1111 1111 1111"));
        }
        Some(Feature::Cart) => {
            data.insert("sample_item_id".into(), Value::String(fake_item_id(rng)));
        }
        Some(Feature::Api) => {
            data.insert("sample_endpoint".into(), json!("/api/v1/resource"));
            data.insert("sample_params".into(), json!({ "page": 1, "limit": 10 }));
        }
        _ => {}
    }

    data
}
