//! # Validation Module
//!
//! Boundary coercion for form input, and validation of documents before
//! they are saved.
//!
//! ## Two Kinds of Checks
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                                                                         │
//! │  Numeric form fields (quantity, price, rates)                           │
//! │  ├── coerce_*(): never fail                                             │
//! │  └── garbage or negative input → 0                                      │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  LineItemLedger (pure, cannot fail)                                     │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Save button                                                            │
//! │  ├── validate_document(): header text, rates, line discount kinds      │
//! │  └── ValidationError → shown next to the field                         │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use stockdesk_core::validation::{coerce_money, coerce_quantity, coerce_rate};
//!
//! assert_eq!(coerce_quantity("3"), 3);
//! assert_eq!(coerce_money("$1,234.50").cents(), 123_450);
//! assert_eq!(coerce_rate("8.25").bps(), 825);
//! assert_eq!(coerce_money("abc").cents(), 0);
//! ```

use crate::error::ValidationError;
use crate::money::{Money, Rate, FULL_RATE_BPS};
use crate::types::{Document, DocumentKind, LineDiscount, LineDiscountPolicy};
use crate::{MAX_DOCUMENT_LINES, MAX_LINE_QUANTITY, MAX_UNIT_PRICE};

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

const MAX_NUMBER_LEN: usize = 32;
const MAX_PARTY_LEN: usize = 200;

// =============================================================================
// Coercion
// =============================================================================

/// Parses a decimal string into an integer scaled by `10^scale`.
///
/// Accepts an optional sign, currency symbol, thousands separators and a
/// trailing percent sign. Digits past `scale` round half up.
fn parse_scaled(input: &str, scale: u32) -> Option<i64> {
    let cleaned: String = input
        .trim()
        .chars()
        .filter(|c| !matches!(c, '$' | ',' | '%' | ' ' | '_'))
        .collect();

    let (negative, body) = match cleaned.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, cleaned.strip_prefix('+').unwrap_or(cleaned.as_str())),
    };

    let (whole, frac) = body.split_once('.').unwrap_or((body, ""));
    if whole.is_empty() && frac.is_empty() {
        return None;
    }
    if !whole.bytes().all(|b| b.is_ascii_digit()) || !frac.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }

    let factor = 10_i64.checked_pow(scale)?;
    let whole_value: i64 = if whole.is_empty() { 0 } else { whole.parse().ok()? };
    let mut value = whole_value.checked_mul(factor)?;

    let digits: Vec<i64> = frac.bytes().map(|b| (b - b'0') as i64).collect();
    let mut place = factor;
    for digit in digits.iter().take(scale as usize) {
        place /= 10;
        value = value.checked_add(digit * place)?;
    }
    if digits.get(scale as usize).is_some_and(|next| *next >= 5) {
        value = value.checked_add(1)?;
    }

    Some(if negative { -value } else { value })
}

/// Quantity field → whole units.
///
/// Fractions round half up (`"2.5"` → 3); anything unparseable or negative
/// becomes 0, anything above [`MAX_LINE_QUANTITY`] becomes the maximum.
pub fn coerce_quantity(input: &str) -> i64 {
    parse_scaled(input, 0)
        .unwrap_or(0)
        .clamp(0, MAX_LINE_QUANTITY)
}

/// Price or amount field → money. Unparseable or negative becomes zero,
/// anything above [`MAX_UNIT_PRICE`] becomes the maximum.
pub fn coerce_money(input: &str) -> Money {
    Money::from_cents(parse_scaled(input, 2).unwrap_or(0)).clamp(Money::zero(), MAX_UNIT_PRICE)
}

/// Percent field (`"8.25"`, `"10%"`) → rate. Unparseable or negative
/// becomes 0%.
///
/// Values above 100% are kept so [`validate_rate`] can report them.
pub fn coerce_rate(input: &str) -> Rate {
    let bps = parse_scaled(input, 2).unwrap_or(0).max(0);
    Rate::from_bps(u32::try_from(bps).unwrap_or(u32::MAX))
}

// =============================================================================
// Field Validators
// =============================================================================

/// Rates must lie between 0% and 100%.
pub fn validate_rate(field: &str, rate: Rate) -> ValidationResult<()> {
    if rate.bps() > FULL_RATE_BPS {
        return Err(ValidationError::OutOfRange {
            field: field.to_string(),
            min: 0,
            max: FULL_RATE_BPS as i64,
        });
    }
    Ok(())
}

/// Document numbers ("INV-1001") are required and short.
pub fn validate_document_number(number: &str) -> ValidationResult<()> {
    let number = number.trim();

    if number.is_empty() {
        return Err(ValidationError::Required {
            field: "number".to_string(),
        });
    }

    if number.chars().count() > MAX_NUMBER_LEN {
        return Err(ValidationError::TooLong {
            field: "number".to_string(),
            max: MAX_NUMBER_LEN,
        });
    }

    Ok(())
}

/// Customer / supplier names are required.
pub fn validate_party_name(field: &str, name: &str) -> ValidationResult<()> {
    let name = name.trim();

    if name.is_empty() {
        return Err(ValidationError::Required {
            field: field.to_string(),
        });
    }

    if name.chars().count() > MAX_PARTY_LEN {
        return Err(ValidationError::TooLong {
            field: field.to_string(),
            max: MAX_PARTY_LEN,
        });
    }

    Ok(())
}

/// Checks a line discount against the document kind's convention.
pub fn validate_line_discount(
    kind: DocumentKind,
    discount: Option<&LineDiscount>,
) -> ValidationResult<()> {
    let Some(discount) = discount else {
        return Ok(());
    };

    let reason = match (kind.line_discount_policy(), discount) {
        (LineDiscountPolicy::NotAllowed, _) => {
            format!("{} lines carry no discount", kind)
        }
        (LineDiscountPolicy::PercentOnly, LineDiscount::Amount(_)) => {
            format!("{} lines take percentage discounts only", kind)
        }
        (LineDiscountPolicy::AmountOnly, LineDiscount::Percent(_)) => {
            format!("{} lines take fixed amount discounts only", kind)
        }
        (_, LineDiscount::Percent(rate)) => return validate_rate("line discount", *rate),
        (_, LineDiscount::Amount(_)) => return Ok(()),
    };

    Err(ValidationError::NotAllowed {
        field: "line discount".to_string(),
        reason,
    })
}

// =============================================================================
// Document Validation
// =============================================================================

/// Everything the save button checks.
///
/// An empty line list is allowed (a draft can be saved early); more than
/// [`MAX_DOCUMENT_LINES`] lines is not.
pub fn validate_document(document: &Document) -> ValidationResult<()> {
    let kind = document.kind();

    validate_document_number(document.number())?;
    validate_party_name(kind.party_label(), document.party())?;
    validate_rate("tax_rate", document.tax_rate())?;
    validate_rate("discount_rate", document.discount_rate())?;

    if document.lines().len() > MAX_DOCUMENT_LINES {
        return Err(ValidationError::OutOfRange {
            field: "lines".to_string(),
            min: 0,
            max: MAX_DOCUMENT_LINES as i64,
        });
    }

    for line in document.lines() {
        validate_line_discount(kind, line.discount.as_ref())?;
    }

    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================
