use rand::Rng;
use tracing::debug;

use crate::generator::constraints::extract_constraints;
use crate::generator::sample_data::make_sample_data;
use crate::models::{Feature, Priority, SampleData, TestCase};

/// Títulos del camino genérico, en el orden en que se emiten
pub const GENERIC_TITLES: [&str; 7] = [
    "Valid scenario",
    "Empty / missing inputs",
    "Malformed inputs",
    "Boundary values",
    "Security input (injection/XSS)",
    "Unauthorized access",
    "Performance / long input handling",
];

const GENERIC_STEPS: [&str; 3] = [
    "Open the relevant page/component",
    "Perform the normal action with valid/invalid inputs as needed",
    "Verify the outcome",
];
const GENERIC_EXPECTED: &str = "Feature behaves correctly or shows validation/error messages";
const POSITIVE_EXPECTED: &str = "Operation succeeds and correct UI/state shown";

struct ExtraScenario {
    title: &'static str,
    steps: &'static [&'static str],
    expected: &'static str,
    tags: &'static [&'static str],
}

const EXTRAS: [ExtraScenario; 5] = [
    ExtraScenario {
        title: "Invalid format / validation",
        steps: &["Open the relevant page", "Enter malformed inputs", "Submit"],
        expected: "Validation message or sanitized input",
        tags: &["validation"],
    },
    ExtraScenario {
        title: "Security check (XSS/SQLi)",
        steps: &["Open page", "Enter script tags or SQL-like payloads", "Submit"],
        expected: "Input sanitized; no injection",
        tags: &["security"],
    },
    ExtraScenario {
        title: "Boundary / limits",
        steps: &["Open page", "Enter values at min/max limits", "Submit"],
        expected: "System handles boundary values gracefully",
        tags: &["edge"],
    },
    ExtraScenario {
        title: "Unauthorized / invalid state",
        steps: &[
            "Attempt action without permission or while logged out",
            "Observe behavior",
        ],
        expected: "Action blocked; authorization error",
        tags: &["security", "negative"],
    },
    ExtraScenario {
        title: "Performance / long input",
        steps: &[
            "Enter extremely large inputs or perform many repeated operations",
            "Observe response",
        ],
        expected: "System remains responsive",
        tags: &["performance"],
    },
];

/// Construye los casos de prueba de un requisito.
///
/// Con categoría conocida el caso positivo se emite siempre, aunque
/// `desired_count` sea 0; después se añaden negativos, extras y relleno
/// mientras quede presupuesto. Sin categoría se recorta la lista genérica a
/// `desired_count` y nunca se rellena. Los ids quedan numerados 1..N.
pub fn build_cases<R: Rng + ?Sized>(
    feature: Option<Feature>,
    requirement: &str,
    desired_count: usize,
    rng: &mut R,
) -> Vec<TestCase> {
    let constraints = extract_constraints(requirement);
    debug!(?constraints, "constraints extracted");
    let sample_data = make_sample_data(feature, &constraints, rng);

    let mut cases = match feature {
        Some(feature) => build_from_template(feature, desired_count, &sample_data),
        None => build_generic(desired_count, &sample_data),
    };

    for (i, case) in cases.iter_mut().enumerate() {
        case.id = i as u32 + 1;
    }
    debug!(count = cases.len(), "test cases built");

    cases
}

fn build_generic(desired_count: usize, sample_data: &SampleData) -> Vec<TestCase> {
    GENERIC_TITLES
        .iter()
        .take(desired_count)
        .map(|title| {
            let tag = if title.contains("Security") {
                "security"
            } else if title.contains("Boundary") {
                "edge"
            } else {
                "generic"
            };
            TestCase::new(
                *title,
                &GENERIC_STEPS,
                GENERIC_EXPECTED,
                Priority::Medium,
                &[tag],
                sample_data,
            )
        })
        .collect()
}

fn build_from_template(
    feature: Feature,
    desired_count: usize,
    sample_data: &SampleData,
) -> Vec<TestCase> {
    let template = feature.template();
    let name = feature.as_str();
    let mut cases = Vec::with_capacity(desired_count.max(1));

    cases.push(TestCase::new(
        format!("Valid {name} scenario"),
        template.positive,
        POSITIVE_EXPECTED,
        template.priority,
        &["positive", name],
        sample_data,
    ));

    for negative in template.negatives {
        if cases.len() >= desired_count {
            break;
        }
        cases.push(TestCase::new(
            format!("{} - {name}", negative.title),
            negative.steps,
            negative.expected,
            Priority::High,
            &["negative", name],
            sample_data,
        ));
    }

    for extra in &EXTRAS {
        if cases.len() >= desired_count {
            break;
        }
        cases.push(TestCase::new(
            extra.title,
            extra.steps,
            extra.expected,
            Priority::Medium,
            extra.tags,
            sample_data,
        ));
    }

    while cases.len() < desired_count {
        cases.push(TestCase::new(
            format!("Additional validation {}", cases.len() + 1),
            &["Perform related validation scenario"],
            "Appropriate validation or error",
            Priority::Low,
            &["validation"],
            sample_data,
        ));
    }

    cases
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn build(feature: Option<Feature>, text: &str, count: usize) -> Vec<TestCase> {
        build_cases(feature, text, count, &mut StdRng::seed_from_u64(1))
    }

    #[test]
    fn known_feature_order() {
        let cases = build(Some(Feature::Login), "login", 8);
        let titles: Vec<&str> = cases.iter().map(|c| c.title.as_str()).collect();
        assert_eq!(
            titles,
            vec![
                "Valid login scenario",
                "Invalid password - login",
                "Empty fields - login",
                "Invalid format / validation",
                "Security check (XSS/SQLi)",
                "Boundary / limits",
                "Unauthorized / invalid state",
                "Performance / long input",
            ]
        );
        assert_eq!(cases[0].tags, vec!["positive", "login"]);
        assert_eq!(cases[0].priority, Priority::High);
        assert_eq!(cases[1].tags, vec!["negative", "login"]);
        assert_eq!(cases[1].priority, Priority::High);
        assert_eq!(cases[6].tags, vec!["security", "negative"]);
    }

    #[test]
    fn positive_uses_template_priority() {
        let cases = build(Some(Feature::Search), "search", 3);
        assert_eq!(cases[0].priority, Priority::Low);
        assert_eq!(cases[0].steps, Feature::Search.template().positive.to_vec());
    }

    #[test]
    fn pads_with_additional_validation() {
        let cases = build(Some(Feature::Cart), "cart", 10);
        assert_eq!(cases.len(), 10);
        assert_eq!(cases[8].title, "Additional validation 9");
        assert_eq!(cases[9].title, "Additional validation 10");
        assert_eq!(cases[9].tags, vec!["validation"]);
        assert_eq!(cases[9].priority, Priority::Low);
        assert_eq!(cases[9].steps.len(), 1);
    }

    #[test]
    fn small_count_truncates_negatives() {
        let cases = build(Some(Feature::Payment), "payment", 2);
        assert_eq!(cases.len(), 2);
        assert_eq!(cases[1].title, "Invalid payment details - payment");
    }

    #[test]
    fn zero_count_keeps_positive_case() {
        let cases = build(Some(Feature::Upload), "upload", 0);
        assert_eq!(cases.len(), 1);
        assert!(cases[0].has_tag("positive"));
    }

    #[test]
    fn generic_path_truncates_and_never_pads() {
        let cases = build(None, "asdkjaskdj random text", 4);
        let titles: Vec<&str> = cases.iter().map(|c| c.title.as_str()).collect();
        assert_eq!(titles, GENERIC_TITLES[..4].to_vec());
        assert_eq!(cases[3].tags, vec!["edge"]);

        let cases = build(None, "asdkjaskdj random text", 20);
        assert_eq!(cases.len(), 7);
        assert_eq!(cases[4].tags, vec!["security"]);
        assert_eq!(cases[0].tags, vec!["generic"]);

        assert!(build(None, "nothing", 0).is_empty());
    }

    #[test]
    fn ids_are_contiguous() {
        let cases = build(Some(Feature::Api), "api", 12);
        let ids: Vec<u32> = cases.iter().map(|c| c.id).collect();
        assert_eq!(ids, (1..=12).collect::<Vec<u32>>());
    }

    #[test]
    fn cases_share_sample_data() {
        let cases = build(Some(Feature::Login), "login", 5);
        assert!(!cases[0].sample_data.is_empty());
        assert!(cases.iter().all(|c| c.sample_data == cases[0].sample_data));
    }
}
