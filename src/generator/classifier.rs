use once_cell::sync::Lazy;
use regex::Regex;
use tracing::trace;

use crate::models::Feature;

static LOGIN_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\blogin\b|\bsign in\b").expect("login pattern"));
static SIGNUP_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\bsign up\b|\bregister\b").expect("signup pattern"));

/// Detecta la categoría de un requisito a partir de palabras clave.
///
/// Gana la primera categoría (en el orden de `Feature::ALL`) que tenga alguna
/// frase clave contenida en el texto. Si ninguna coincide se prueban los
/// patrones de respaldo: login, registro y "reset" + "password".
pub fn detect_feature(text: &str) -> Option<Feature> {
    let lowered = text.to_lowercase();

    let by_keyword = Feature::ALL
        .into_iter()
        .find(|feature| feature.keywords().iter().any(|kw| lowered.contains(kw)));
    if by_keyword.is_some() {
        return by_keyword;
    }

    if LOGIN_PATTERN.is_match(&lowered) {
        trace!("login fallback pattern matched");
        return Some(Feature::Login);
    }
    if SIGNUP_PATTERN.is_match(&lowered) {
        trace!("signup fallback pattern matched");
        return Some(Feature::Signup);
    }
    if lowered.contains("reset") && lowered.contains("password") {
        trace!("reset/password fallback matched");
        return Some(Feature::ResetPassword);
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detects_login() {
        assert_eq!(
            detect_feature("User should be able to login with valid email and password"),
            Some(Feature::Login)
        );
    }

    #[test]
    fn is_case_insensitive() {
        assert_eq!(detect_feature("SIGN IN with Google"), Some(Feature::Login));
        assert_eq!(detect_feature("Checkout with UPI"), Some(Feature::Payment));
    }

    #[test]
    fn first_category_in_table_order_wins() {
        // "upload" y "profile" coinciden; upload va antes en la tabla
        assert_eq!(
            detect_feature("Upload profile picture up to 5MB"),
            Some(Feature::Upload)
        );
        // "register" (signup) antes que "otp" (reset-password)
        assert_eq!(
            detect_feature("Send OTP to the registered phone"),
            Some(Feature::Signup)
        );
    }

    #[test]
    fn reset_and_password_apart_still_match() {
        assert_eq!(
            detect_feature("Allow users to reset their password"),
            Some(Feature::ResetPassword)
        );
    }

    #[test]
    fn unknown_text_has_no_feature() {
        assert_eq!(detect_feature("asdkjaskdj random text"), None);
        assert_eq!(detect_feature(""), None);
    }
}
