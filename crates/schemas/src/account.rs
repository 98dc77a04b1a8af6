//! Login and registration forms

use std::sync::LazyLock;

use agriform_validator::cross_field::EqualsField;
use agriform_validator::foundation::ValidateExt;
use agriform_validator::schema::{Binding, FormSchema};
use agriform_validator::validators::{
    Pattern, email, integer, lowercase, matches_regex, max, max_length, min, min_length,
    not_repeated_digits, numeric, pattern, required, strong_password,
};
use regex::Regex;

/// Sri Lankan mobile number: `+94`, an operator prefix, seven digits.
static MOBILE_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\+94(71|75|76|77|78)\d{7}$").unwrap());

static LOGIN: LazyLock<FormSchema> = LazyLock::new(|| {
    FormSchema::builder("login")
        .field("email", "Email")
        .field("password", "Password")
        .bind(Binding::new("email").check(required()).check(email()))
        .bind(Binding::new("password").check(required()))
        .build()
        .expect("login schema declares every field it binds")
});

static REGISTRATION: LazyLock<FormSchema> = LazyLock::new(|| {
    FormSchema::builder("registration")
        .field("fullName", "Full name")
        .field("email", "Email")
        .field("phone", "Phone number")
        .field("age", "Age")
        .field("username", "Username")
        .field("password", "Password")
        .field("confirmPassword", "Confirm password")
        .bind(
            Binding::new("fullName")
                .check(required())
                .check(min_length(2))
                .check(pattern(Pattern::PersonName)),
        )
        .bind(
            Binding::new("email")
                .check(required())
                .check(lowercase())
                .check(email()),
        )
        .bind(
            Binding::new("phone")
                .check(required())
                .check(matches_regex(
                    &MOBILE_REGEX,
                    "lk_mobile",
                    "Phone number must start with +94 followed by a valid mobile prefix \
                     (e.g., +94771234567)",
                ))
                .check(not_repeated_digits(7)),
        )
        .bind(
            Binding::new("age")
                .check(required())
                .check(numeric())
                .check(integer())
                .check(min(18.0).with_message("You must be at least 18 years old"))
                .check(max(100.0).with_message("Please enter a valid age")),
        )
        .bind(
            Binding::new("username")
                .check(required())
                .check(min_length(3))
                .check(max_length(20))
                .check(pattern(Pattern::Username)),
        )
        .bind(Binding::new("password").check(required()).rule(strong_password()))
        .bind(
            Binding::new("confirmPassword")
                .check(required().with_message("Please confirm your password"))
                .rule(EqualsField::new("password", "Passwords do not match")),
        )
        .build()
        .expect("registration schema declares every field it binds")
});

/// The login schema: email and password.
///
/// # Examples
///
/// ```
/// use agriform_schemas::account::login;
/// use agriform_validator::foundation::ValueMap;
///
/// let result = login().validate(&ValueMap::new().with("email", "not-an-email"));
/// assert_eq!(result.errors.messages("email"), ["Please enter a valid email address"]);
/// assert_eq!(result.errors.messages("password"), ["Password is required"]);
/// ```
pub fn login() -> &'static FormSchema {
    &LOGIN
}

/// The user registration schema.
pub fn registration() -> &'static FormSchema {
    &REGISTRATION
}
