use serde::{Deserialize, Serialize};
use std::fmt;

use crate::models::Priority;

/// Categorías de requisito reconocidas, en el orden en que se evalúan
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Hash)]
#[serde(rename_all = "kebab-case")]
pub enum Feature {
    Login,
    Signup,
    ResetPassword,
    Upload,
    Payment,
    Cart,
    Search,
    Profile,
    Notifications,
    Api,
}

/// Escenario negativo de una plantilla
#[derive(Debug, Clone, Copy)]
pub struct NegativeScenario {
    pub title: &'static str,
    pub steps: &'static [&'static str],
    pub expected: &'static str,
}

/// Plantilla fija de casos para una categoría
#[derive(Debug, Clone, Copy)]
pub struct FeatureTemplate {
    pub positive: &'static [&'static str],
    pub negatives: &'static [NegativeScenario],
    pub priority: Priority,
}

impl Feature {
    pub const ALL: [Feature; 10] = [
        Feature::Login,
        Feature::Signup,
        Feature::ResetPassword,
        Feature::Upload,
        Feature::Payment,
        Feature::Cart,
        Feature::Search,
        Feature::Profile,
        Feature::Notifications,
        Feature::Api,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Feature::Login => "login",
            Feature::Signup => "signup",
            Feature::ResetPassword => "reset-password",
            Feature::Upload => "upload",
            Feature::Payment => "payment",
            Feature::Cart => "cart",
            Feature::Search => "search",
            Feature::Profile => "profile",
            Feature::Notifications => "notifications",
            Feature::Api => "api",
        }
    }

    /// Frases clave que identifican la categoría (en minúsculas)
    pub fn keywords(&self) -> &'static [&'static str] {
        match self {
            Feature::Login => &["login", "sign in", "signin"],
            Feature::Signup => &["sign up", "signup", "register", "registration"],
            Feature::ResetPassword => &["reset password", "forgot password", "otp"],
            Feature::Upload => &["upload", "profile picture", "avatar", "image", "file upload"],
            Feature::Payment => &["payment", "checkout", "upi", "card", "transaction"],
            Feature::Cart => &["cart", "add to cart", "shopping cart"],
            Feature::Search => &["search", "find", "lookup"],
            Feature::Profile => &["profile", "edit profile", "update profile"],
            Feature::Notifications => &["notification", "notifications", "unread"],
            Feature::Api => &["api", "endpoint", "json", "response", "status code"],
        }
    }

    pub fn template(&self) -> &'static FeatureTemplate {
        &TEMPLATES[*self as usize]
    }

    /// Indica si la categoría maneja credenciales de usuario
    pub fn uses_credentials(&self) -> bool {
        matches!(
            self,
            Feature::Login | Feature::Signup | Feature::ResetPassword | Feature::Profile
        )
    }
}

impl fmt::Display for Feature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

const fn neg(
    title: &'static str,
    steps: &'static [&'static str],
    expected: &'static str,
) -> NegativeScenario {
    NegativeScenario {
        title,
        steps,
        expected,
    }
}

// Mismo orden que `Feature`
static TEMPLATES: [FeatureTemplate; 10] = [
    FeatureTemplate {
        positive: &[
            "Open the login page",
            "Enter valid email/username",
            "Enter valid password",
            "Click Login",
        ],
        negatives: &[
            neg(
                "Invalid password",
                &["Open login page", "Enter valid email", "Enter invalid password", "Click Login"],
                "Error: incorrect credentials",
            ),
            neg(
                "Empty fields",
                &["Open the login page", "Click Login without entering credentials"],
                "Validation: required fields",
            ),
        ],
        priority: Priority::High,
    },
    FeatureTemplate {
        positive: &[
            "Open the signup page",
            "Fill required fields with valid data",
            "Submit the form",
        ],
        negatives: &[
            neg(
                "Existing email",
                &[
                    "Open signup page",
                    "Enter an email that already exists",
                    "Fill other fields",
                    "Submit",
                ],
                "Error: Email already registered",
            ),
            neg(
                "Weak password",
                &["Open signup page", "Enter weak password", "Submit"],
                "Password strength validation",
            ),
        ],
        priority: Priority::High,
    },
    FeatureTemplate {
        positive: &[
            "Open reset password page",
            "Enter registered email",
            "Receive OTP",
            "Enter OTP",
            "Set new password",
            "Submit",
        ],
        negatives: &[
            neg(
                "Invalid OTP",
                &["Open reset password page", "Enter registered email", "Enter wrong OTP", "Submit"],
                "Error: invalid OTP",
            ),
            neg(
                "Expired OTP",
                &["Request OTP", "Wait until OTP expires", "Enter OTP", "Submit"],
                "Error: OTP expired",
            ),
        ],
        priority: Priority::High,
    },
    FeatureTemplate {
        positive: &[
            "Open upload area",
            "Choose a valid file",
            "Click Upload",
            "Verify upload success",
        ],
        negatives: &[
            neg(
                "Too large file",
                &["Choose a file larger than allowed limit", "Try upload"],
                "Error: File size limit exceeded",
            ),
            neg(
                "Unsupported format",
                &["Choose unsupported file type", "Try upload"],
                "Error: Unsupported file type",
            ),
        ],
        priority: Priority::Medium,
    },
    FeatureTemplate {
        positive: &[
            "Open payment page",
            "Enter valid card/UPI details",
            "Confirm payment",
            "Verify transaction success",
        ],
        negatives: &[
            neg(
                "Invalid payment details",
                &["Enter invalid card/UPI details", "Attempt payment"],
                "Payment rejected",
            ),
            neg(
                "Insufficient funds",
                &["Use card with insufficient funds", "Attempt payment"],
                "Payment declined",
            ),
        ],
        priority: Priority::High,
    },
    FeatureTemplate {
        positive: &[
            "Open product page",
            "Add item to cart",
            "View cart",
            "Verify item present and total updated",
        ],
        negatives: &[
            neg(
                "Update to zero",
                &["Add item to cart", "Update quantity to 0", "Save"],
                "Item removed or validation",
            ),
            neg(
                "Negative quantity",
                &["Attempt to set negative quantity", "Save"],
                "Validation error",
            ),
        ],
        priority: Priority::Medium,
    },
    FeatureTemplate {
        positive: &[
            "Open search input",
            "Enter valid query",
            "Press search",
            "Verify relevant results",
        ],
        negatives: &[
            neg(
                "Empty query",
                &["Open search input", "Press search without query"],
                "Show message or no results",
            ),
            neg(
                "Huge query",
                &["Enter very long query", "Search"],
                "Graceful handling or error",
            ),
        ],
        priority: Priority::Low,
    },
    FeatureTemplate {
        positive: &[
            "Open profile settings",
            "Edit profile fields (name, email, phone)",
            "Save changes",
            "Verify profile updated",
        ],
        negatives: &[
            neg(
                "Invalid phone",
                &["Enter invalid phone number formats", "Save"],
                "Validation error",
            ),
            neg(
                "Oversize avatar",
                &["Upload avatar larger than allowed", "Save"],
                "Error: size limit",
            ),
        ],
        priority: Priority::Medium,
    },
    FeatureTemplate {
        positive: &[
            "Open notifications panel",
            "View unread notifications",
            "Mark as read",
            "Verify unread count updates",
        ],
        negatives: &[
            neg(
                "Missing notifications",
                &["Trigger notification-producing action", "Open panel"],
                "Notification appears",
            ),
            neg(
                "Mark read fail",
                &["Mark many notifications as read quickly", "Observe behavior"],
                "Graceful handling",
            ),
        ],
        priority: Priority::Low,
    },
    FeatureTemplate {
        positive: &[
            "Call the API endpoint with valid parameters",
            "Receive HTTP 200 and JSON body",
            "Validate fields in response",
        ],
        negatives: &[
            neg(
                "Invalid params",
                &["Call API with invalid params", "Observe response"],
                "HTTP 4xx and error message",
            ),
            neg(
                "Pagination edge",
                &["Request page=99999", "Observe response"],
                "Graceful empty results or proper error",
            ),
        ],
        priority: Priority::High,
    },
];
