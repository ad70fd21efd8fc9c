use testcase_generator::generator::builder::GENERIC_TITLES;
use testcase_generator::generator::extract_constraints;
use testcase_generator::{generate_from_requirement, Generator, GeneratorConfig, Priority};

fn seeded() -> Generator {
    Generator::new(GeneratorConfig::default().with_seed(2024))
}

#[test]
fn login_requirement() {
    let (cases, meta) =
        seeded().generate("User should be able to login with valid email and password", 5);
    let meta = meta.expect("meta");

    assert_eq!(meta.feature_detected, "login");
    assert_eq!(cases.len(), 5);
    assert_eq!(cases[0].tags, vec!["positive", "login"]);
    assert_eq!(cases[0].priority, Priority::High);
    assert!(cases
        .iter()
        .any(|c| c.has_tag("negative") && c.has_tag("login")));
    assert_eq!(meta.sample_data, cases[0].sample_data);
}

#[test]
fn upload_requirement_with_constraints() {
    let requirement = "Upload profile picture up to 5MB, only jpg or png";
    let constraints = extract_constraints(requirement);
    assert_eq!(constraints.max_size.as_deref(), Some("5MB"));
    assert!(constraints.file_types.contains(&"jpg".to_string()));
    assert!(constraints.file_types.contains(&"png".to_string()));

    let (cases, meta) = seeded().generate(requirement, 6);
    let meta = meta.expect("meta");
    assert_eq!(meta.feature_detected, "upload");
    assert_eq!(cases.len(), 6);

    let file = meta.sample_data["sample_file_valid"].as_str().unwrap();
    assert!(file.ends_with(".jpg") || file.ends_with(".png"));
    assert_eq!(meta.sample_data["max_size"], "5MB");
}

#[test]
fn unknown_requirement_falls_back_to_generic() {
    let (cases, meta) = seeded().generate("asdkjaskdj random text", 4);
    assert_eq!(meta.expect("meta").feature_detected, "generic");
    assert_eq!(cases.len(), 4);
    let titles: Vec<&str> = cases.iter().map(|c| c.title.as_str()).collect();
    assert_eq!(titles, GENERIC_TITLES[..4].to_vec());
}

#[test]
fn reset_password_with_otp_length() {
    let requirement = "Forgot password flow sends a 6 digit OTP to the user's email";
    assert_eq!(extract_constraints(requirement).otp_length, Some(6));

    let (_, meta) = seeded().generate(requirement, 4);
    let meta = meta.expect("meta");
    assert_eq!(meta.feature_detected, "reset-password");

    let otp = meta.sample_data["otp_valid"].as_str().unwrap();
    assert_eq!(otp.len(), 6);
    assert!(otp.chars().all(|c| c.is_ascii_digit()));
}

#[test]
fn empty_requirement_returns_nothing() {
    let (cases, meta) = generate_from_requirement("   ", 8);
    assert!(cases.is_empty());
    assert!(meta.is_none());
}

#[test]
fn same_seed_same_batch() {
    let a = seeded().generate("Add items to the shopping cart", 6);
    let b = seeded().generate("Add items to the shopping cart", 6);
    assert_eq!(a, b);
}
