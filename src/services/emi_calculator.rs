//! EMI Calculator
//!
//! # Interview Q&A
//!
//! Q: EMI는 어떻게 계산하는가?
//! A: 원리금 균등상환 (reducing-balance amortization)
//!
//!    ```text
//!    r       = annual_rate_percent / 100 / 12
//!    payment = P * r * (1 + r)^n / ((1 + r)^n - 1)
//!    ```
//!
//!    - 0% 이자: 단순 분할 `P / n`
//!    - tenure 0: 잘못된 플랜 데이터 → `0`
//!
//! Q: 왜 f64이고 언제 반올림하는가?
//! A: 공식 내부에서는 절대 반올림하지 않음
//!    - 중간 반올림은 재계산마다 오차가 누적됨
//!    - 표시 시점에 한 번만 [`crate::types::format_amount`]
//!
//! # Input Coercion
//!
//! Catalog figures frequently arrive as text (NUMERIC columns, query strings).
//! The calculator never fails on them. The rule is:
//!
//! - amounts: longest leading numeric prefix (`[+-]digits[.digits][e[+-]digits]`
//!   or `Infinity`), anything else is `0`
//! - tenure: leading signed integer, anything else is `0`
//!
//! `NaN` becomes `0`, but infinities are kept: `"Infinity"` and overflowing
//! literals such as `"1e999"` coerce to `±∞` and propagate through
//! [`calculate_emi`]. Callers check `is_finite()` before display.
//!
//! A tenure of `0` then yields a payment of `0`, so malformed data renders as
//! "₹0.00" instead of an error.

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;

/// Monthly installment for `principal` repaid over `tenure_months`.
///
/// - `tenure_months <= 0` → `0.0` (malformed plan)
/// - `annual_rate_percent == 0` → `principal / tenure_months`
/// - otherwise the amortization formula
///
/// Non-finite inputs are not rejected; a `NaN` comes straight back out.
pub fn calculate_emi(principal: f64, tenure_months: i32, annual_rate_percent: f64) -> f64 {
    if tenure_months <= 0 {
        return 0.0;
    }

    let n = tenure_months as f64;

    if annual_rate_percent == 0.0 {
        return principal / n;
    }

    let monthly_rate = annual_rate_percent / 100.0 / 12.0;
    let growth = (1.0 + monthly_rate).powi(tenure_months);

    principal * monthly_rate * growth / (growth - 1.0)
}

/// [`calculate_emi`] over raw textual inputs, coerced with
/// [`coerce_amount`] / [`coerce_tenure`].
pub fn calculate_emi_from_raw(principal: &str, tenure_months: &str, annual_rate_percent: &str) -> f64 {
    calculate_emi(
        coerce_amount(principal),
        coerce_tenure(tenure_months),
        coerce_amount(annual_rate_percent),
    )
}

/// Decimal column value as `f64` for the formula. Out-of-range values become `0`.
pub fn decimal_to_f64(value: Decimal) -> f64 {
    value.to_f64().unwrap_or(0.0)
}

/// Parses the longest numeric prefix of `raw`.
///
/// `"12.5"` → `12.5`, `"12.5abc"` → `12.5`, `"abc"` → `0.0`, `"NaN"` → `0.0`,
/// `"Infinity"` → `∞`
pub fn coerce_amount(raw: &str) -> f64 {
    let trimmed = raw.trim_start();
    let prefix = &trimmed[..numeric_prefix_len(trimmed)];

    prefix
        .parse::<f64>()
        .ok()
        .filter(|value| !value.is_nan())
        .unwrap_or(0.0)
}

/// Byte length of the leading float literal in `s`, `0` if there is none.
/// Single forward scan; every accepted byte is ASCII.
fn numeric_prefix_len(s: &str) -> usize {
    const INFINITY: &str = "Infinity";

    let bytes = s.as_bytes();
    let mut end = usize::from(matches!(bytes.first(), Some(b'+' | b'-')));

    if s[end..].starts_with(INFINITY) {
        return end + INFINITY.len();
    }

    let int_digits = count_digits(&bytes[end..]);
    end += int_digits;

    let mut frac_digits = 0;
    if bytes.get(end) == Some(&b'.') {
        frac_digits = count_digits(&bytes[end + 1..]);
        // "12." 는 유효, "." 단독은 무효
        if int_digits + frac_digits > 0 {
            end += 1 + frac_digits;
        }
    }

    if int_digits + frac_digits == 0 {
        return 0;
    }

    // exponent only counts when digits follow ("1e" → "1")
    if matches!(bytes.get(end), Some(b'e' | b'E')) {
        let mut exp = end + 1;
        if matches!(bytes.get(exp), Some(b'+' | b'-')) {
            exp += 1;
        }
        let exp_digits = count_digits(&bytes[exp..]);
        if exp_digits > 0 {
            end = exp + exp_digits;
        }
    }

    end
}

fn count_digits(bytes: &[u8]) -> usize {
    bytes.iter().take_while(|b| b.is_ascii_digit()).count()
}

/// Parses a leading signed integer.
///
/// `"12"` → `12`, `"12.9"` → `12`, `"twelve"` → `0`
pub fn coerce_tenure(raw: &str) -> i32 {
    let trimmed = raw.trim_start();
    let sign_len = usize::from(trimmed.starts_with(|c: char| c == '+' || c == '-'));
    let digit_len = trimmed[sign_len..]
        .chars()
        .take_while(|c| c.is_ascii_digit())
        .count();

    trimmed[..sign_len + digit_len].parse().unwrap_or(0)
}
