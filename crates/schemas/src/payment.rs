//! Payment form
//!
//! `paymentMethod` selects which group of fields applies. Fields of the
//! other methods are ignored, not rejected: the UI keeps them around while
//! the user switches back and forth.

use std::sync::LazyLock;

use agriform_validator::cross_field::{CardNotExpired, RequiredFor};
use agriform_validator::discriminant::{Discriminant, Gate};
use agriform_validator::foundation::ValidateExt;
use agriform_validator::schema::{Binding, FormSchema};
use agriform_validator::validators::{Pattern, email, is_true, luhn, one_of, pattern, required};

use crate::categories::PaymentMethod;

static METHOD_SPELLINGS: LazyLock<Vec<&'static str>> = LazyLock::new(PaymentMethod::spellings);

/// A binding that requires `field` whenever the method is one of `method`.
fn required_for(field: &'static str, method: &'static [PaymentMethod]) -> Binding {
    Binding::new(field)
        .rule(RequiredFor::<PaymentMethod>::new("paymentMethod"))
        .when(Gate::any_of("paymentMethod", method))
}

static SCHEMA: LazyLock<FormSchema> = LazyLock::new(|| {
    const CARD: &[PaymentMethod] = &[PaymentMethod::CreditCard];
    const BANK: &[PaymentMethod] = &[PaymentMethod::BankTransfer];
    const PAYPAL: &[PaymentMethod] = &[PaymentMethod::Paypal];
    const COD: &[PaymentMethod] = &[PaymentMethod::CashOnDelivery];

    FormSchema::builder("payment")
        .field("paymentMethod", "Payment method")
        .field("cardNumber", "Card number")
        .field("cardName", "Cardholder name")
        .field("expiryDate", "Expiry date")
        .field("cvv", "CVV")
        .field("bankName", "Bank name")
        .field("accountNumber", "Account number")
        .field("paypalEmail", "PayPal email")
        .field("codConfirmation", "Cash on delivery confirmation")
        .bind(
            Binding::new("paymentMethod")
                .check(required())
                .check(one_of(METHOD_SPELLINGS.as_slice())),
        )
        // Card
        .bind(
            required_for("cardNumber", CARD)
                .check(pattern(Pattern::Digits(16)))
                .check(luhn()),
        )
        .bind(required_for("cardName", CARD))
        .bind(
            required_for("expiryDate", CARD)
                .check(pattern(Pattern::CardExpiry))
                .rule(CardNotExpired),
        )
        .bind(required_for("cvv", CARD).check(pattern(Pattern::Cvv)))
        // Bank transfer
        .bind(required_for("bankName", BANK))
        .bind(required_for("accountNumber", BANK))
        // PayPal
        .bind(required_for("paypalEmail", PAYPAL).check(email()))
        // Cash on delivery
        .bind(
            Binding::new("codConfirmation")
                .check(required().with_message("Please confirm cash on delivery"))
                .check(is_true().with_message("Please confirm cash on delivery"))
                .when(Gate::any_of("paymentMethod", COD)),
        )
        .build()
        .expect("payment schema declares every field it binds")
});

/// The payment schema.
///
/// # Examples
///
/// ```
/// use agriform_schemas::payment::payment;
/// use agriform_validator::foundation::ValueMap;
///
/// let values = ValueMap::new()
///     .with("paymentMethod", "paypal")
///     .with("paypalEmail", "grower@example.com");
/// assert!(payment().validate(&values).is_valid);
/// ```
pub fn payment() -> &'static FormSchema {
    &SCHEMA
}
