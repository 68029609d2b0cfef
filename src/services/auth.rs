//! Mock phone + OTP authentication.
//!
//! Nothing leaves the process: the OTP is generated locally and handed back
//! to the shell, which shows it to the user after a simulated delay. Each
//! request carries a ticket; closing the flow drops the ticket so a delivery
//! that arrives late is ignored instead of reopening a closed form.
//!
//! A code is only accepted for a limited time after it was issued. Callers
//! pass the current [`Instant`] in, so expiry can be tested without sleeping.

use std::sync::LazyLock;
use std::time::{Duration, Instant};

use rand::Rng;
use regex::Regex;
use uuid::Uuid;

use crate::error::AuthError;
use crate::models::UserProfile;

/// Country prefix shown in front of every phone number.
pub const COUNTRY_PREFIX: &str = "+91";

/// Number of digits in a phone number.
pub const PHONE_DIGITS: usize = 10;

/// Number of digits in an OTP.
pub const OTP_DIGITS: usize = 6;

/// How long an issued OTP stays valid unless configured otherwise.
pub const DEFAULT_OTP_TTL: Duration = Duration::from_secs(300);

/// Occupation choices offered at signup.
pub const OCCUPATIONS: [&str; 11] = [
    "student",
    "software-engineer",
    "business-analyst",
    "consultant",
    "teacher",
    "doctor",
    "entrepreneur",
    "freelancer",
    "government-employee",
    "private-employee",
    "other",
];

/// City choices offered at signup.
pub const SIGNUP_CITIES: [&str; 9] = [
    "bangalore",
    "hyderabad",
    "mumbai",
    "delhi",
    "chennai",
    "pune",
    "kolkata",
    "ahmedabad",
    "other",
];

/// Gender choices offered at signup.
pub const GENDERS: [&str; 4] = ["male", "female", "other", "prefer-not-to-say"];

static EMAIL_PATTERN: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").ok());

/// Sign in with an existing account or create a new one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AuthMode {
    /// Phone number, then OTP
    #[default]
    Login,
    /// Details form, then OTP
    Signup,
}

impl AuthMode {
    /// Tab label.
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Login => "Login",
            Self::Signup => "Sign Up",
        }
    }
}

/// Step of the flow currently shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AuthStep {
    /// Phone number entry (login)
    #[default]
    Phone,
    /// Signup details form
    Details,
    /// OTP entry
    Otp,
}

impl AuthStep {
    const fn name(self) -> &'static str {
        match self {
            Self::Phone => "phone",
            Self::Details => "details",
            Self::Otp => "otp",
        }
    }
}

/// Signup form fields.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SignupDetails {
    /// First name (required)
    pub first_name: String,
    /// Last name (required)
    pub last_name: String,
    /// Email address (required)
    pub email: String,
    /// 10-digit phone number (required)
    pub phone: String,
    /// Occupation key from [`OCCUPATIONS`] (required)
    pub occupation: String,
    /// City key from [`SIGNUP_CITIES`] (required)
    pub city: String,
    /// Gender key from [`GENDERS`]
    pub gender: String,
    /// Date of birth, free text
    pub date_of_birth: String,
}

impl SignupDetails {
    /// Labels of required fields that are still blank, in form order.
    #[must_use]
    pub fn missing_fields(&self) -> Vec<&'static str> {
        [
            ("first name", &self.first_name),
            ("last name", &self.last_name),
            ("email", &self.email),
            ("phone number", &self.phone),
            ("occupation", &self.occupation),
            ("city", &self.city),
        ]
        .into_iter()
        .filter(|(_, value)| value.trim().is_empty())
        .map(|(label, _)| label)
        .collect()
    }
}

/// Result of requesting an OTP.
///
/// The shell is expected to wait for the configured delay and then call
/// [`AuthFlow::deliver`] with `ticket`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OtpDispatch {
    /// Identifies this request
    pub ticket: Uuid,
    /// The generated code, shown to the user in demo mode
    pub code: String,
    /// Phone number the code was "sent" to, with country prefix
    pub phone: String,
}

/// Outcome of a simulated OTP delivery.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Delivery {
    /// The flow moved to the OTP step
    Delivered,
    /// The request was cancelled or superseded; nothing changed
    Stale,
}

/// State machine behind the login / signup modal.
#[derive(Debug, Clone)]
pub struct AuthFlow {
    mode: AuthMode,
    step: AuthStep,
    /// Login phone number input
    pub phone: String,
    /// Signup form input
    pub details: SignupDetails,
    /// OTP input
    pub otp_input: String,
    pending: Option<Uuid>,
    generated: Option<String>,
    issued_at: Option<Instant>,
    ttl: Duration,
    verified_phone: String,
}

impl Default for AuthFlow {
    fn default() -> Self {
        Self::with_ttl(DEFAULT_OTP_TTL)
    }
}

impl AuthFlow {
    /// Creates a flow in login mode on the phone step.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Like [`AuthFlow::new`], with codes valid for `ttl` after issue.
    #[must_use]
    pub fn with_ttl(ttl: Duration) -> Self {
        Self {
            mode: AuthMode::default(),
            step: AuthStep::default(),
            phone: String::new(),
            details: SignupDetails::default(),
            otp_input: String::new(),
            pending: None,
            generated: None,
            issued_at: None,
            ttl,
            verified_phone: String::new(),
        }
    }

    /// How long an issued code stays valid.
    #[must_use]
    pub const fn ttl(&self) -> Duration {
        self.ttl
    }

    /// Current mode.
    #[must_use]
    pub const fn mode(&self) -> AuthMode {
        self.mode
    }

    /// Current step.
    #[must_use]
    pub const fn step(&self) -> AuthStep {
        self.step
    }

    /// Whether an OTP request is waiting for delivery.
    #[must_use]
    pub const fn is_loading(&self) -> bool {
        self.pending.is_some()
    }

    /// Phone number the OTP was sent to, with country prefix.
    #[must_use]
    pub fn otp_phone(&self) -> String {
        display_phone(&self.verified_phone)
    }

    /// Switches between login and signup, clearing the form.
    pub fn switch_mode(&mut self, mode: AuthMode) {
        self.reset();
        self.mode = mode;
        self.step = match mode {
            AuthMode::Login => AuthStep::Phone,
            AuthMode::Signup => AuthStep::Details,
        };
    }

    /// Validates the current step and issues a new OTP at `now`.
    ///
    /// Any earlier pending request is superseded.
    pub fn request_otp(&mut self, now: Instant) -> Result<OtpDispatch, AuthError> {
        let phone = match (self.mode, self.step) {
            (AuthMode::Login, AuthStep::Phone) => {
                validate_phone(&self.phone)?;
                self.phone.clone()
            }
            (AuthMode::Signup, AuthStep::Details) => {
                let missing = self.details.missing_fields();
                if !missing.is_empty() {
                    return Err(AuthError::MissingRequiredFields(missing));
                }
                validate_phone(&self.details.phone)?;
                validate_email(&self.details.email)?;
                self.details.phone.clone()
            }
            (_, step) => {
                return Err(AuthError::WrongStep {
                    action: "request an OTP",
                    step: step.name(),
                })
            }
        };

        let code = generate_otp();
        let ticket = Uuid::new_v4();
        self.pending = Some(ticket);
        self.generated = Some(code.clone());
        self.issued_at = Some(now);
        self.verified_phone = phone;

        tracing::debug!(%ticket, mode = ?self.mode, "Issued OTP request");

        Ok(OtpDispatch {
            ticket,
            code,
            phone: self.otp_phone(),
        })
    }

    /// Completes a simulated delivery if `ticket` is still the pending one.
    pub fn deliver(&mut self, ticket: Uuid) -> Delivery {
        if self.pending != Some(ticket) {
            tracing::debug!(%ticket, "Ignored stale OTP delivery");
            return Delivery::Stale;
        }
        self.pending = None;
        self.step = AuthStep::Otp;
        Delivery::Delivered
    }

    /// Checks `code` against the issued OTP and signs the user in.
    ///
    /// A code is rejected with [`AuthError::OtpExpired`] once the TTL has
    /// elapsed at `now`, even if it matches.
    pub fn verify(&mut self, code: &str, now: Instant) -> Result<UserProfile, AuthError> {
        if self.step != AuthStep::Otp {
            return Err(AuthError::WrongStep {
                action: "verify an OTP",
                step: self.step.name(),
            });
        }
        let (Some(expected), Some(issued_at)) = (self.generated.as_deref(), self.issued_at) else {
            return Err(AuthError::NoPendingOtp);
        };
        if now.saturating_duration_since(issued_at) >= self.ttl {
            tracing::debug!(ttl_secs = self.ttl.as_secs(), "Rejected expired OTP");
            return Err(AuthError::OtpExpired);
        }
        if code.trim() != expected {
            return Err(AuthError::InvalidOtp);
        }

        let profile = match self.mode {
            AuthMode::Login => UserProfile {
                is_logged_in: true,
                name: "User".to_string(),
                phone_number: self.otp_phone(),
                ..UserProfile::default()
            },
            AuthMode::Signup => {
                let details = &self.details;
                UserProfile {
                    is_logged_in: true,
                    name: format!("{} {}", details.first_name.trim(), details.last_name.trim()),
                    phone_number: self.otp_phone(),
                    email: Some(details.email.trim().to_string()),
                    occupation: Some(details.occupation.clone()),
                    city: Some(details.city.clone()),
                    gender: non_empty(&details.gender),
                    date_of_birth: non_empty(&details.date_of_birth),
                }
            }
        };

        tracing::info!(mode = ?self.mode, "User signed in");
        let mode = self.mode;
        self.switch_mode(mode);
        Ok(profile)
    }

    /// Returns from the OTP step to the step that requested it.
    pub fn back(&mut self) {
        if self.step == AuthStep::Otp {
            self.step = match self.mode {
                AuthMode::Login => AuthStep::Phone,
                AuthMode::Signup => AuthStep::Details,
            };
            self.otp_input.clear();
        }
    }

    /// Closes the modal: cancels any pending delivery and clears the form.
    pub fn close(&mut self) {
        if let Some(ticket) = self.pending {
            tracing::debug!(%ticket, "Cancelled pending OTP delivery");
        }
        let mode = self.mode;
        self.switch_mode(mode);
    }

    fn reset(&mut self) {
        self.phone.clear();
        self.details = SignupDetails::default();
        self.otp_input.clear();
        self.pending = None;
        self.generated = None;
        self.issued_at = None;
        self.verified_phone.clear();
    }
}

/// Formats a bare 10-digit number with the country prefix.
#[must_use]
pub fn display_phone(digits: &str) -> String {
    format!("{COUNTRY_PREFIX}{digits}")
}

/// Keeps only ASCII digits, capped at `max` characters.
///
/// Mirrors what the input fields accept as the user types.
#[must_use]
pub fn sanitize_digits(input: &str, max: usize) -> String {
    input.chars().filter(char::is_ascii_digit).take(max).collect()
}

/// Exactly ten ASCII digits.
pub fn validate_phone(phone: &str) -> Result<(), AuthError> {
    if phone.len() == PHONE_DIGITS && phone.chars().all(|c| c.is_ascii_digit()) {
        Ok(())
    } else {
        Err(AuthError::InvalidPhoneNumber)
    }
}

/// Loose `local@domain.tld` check.
pub fn validate_email(email: &str) -> Result<(), AuthError> {
    let email = email.trim();
    let Some(pattern) = EMAIL_PATTERN.as_ref() else {
        tracing::error!("Email pattern failed to compile");
        return Err(AuthError::InvalidEmail(email.to_string()));
    };
    if pattern.is_match(email) {
        Ok(())
    } else {
        Err(AuthError::InvalidEmail(email.to_string()))
    }
}

fn generate_otp() -> String {
    rand::thread_rng().gen_range(100_000..1_000_000u32).to_string()
}

fn non_empty(value: &str) -> Option<String> {
    let value = value.trim();
    (!value.is_empty()).then(|| value.to_string())
}
