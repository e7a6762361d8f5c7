//! # Numeric Helpers
//!
//! The single place where AluTrade's numeric semantics are defined.
//!
//! ## The Two Rules
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  RULE 1: COERCE AT THE BOUNDARY                                         │
//! │                                                                         │
//! │  Payload records come from heterogeneous historical data. A numeric    │
//! │  field may arrive as 12.5, "12.5", null, "" or be missing entirely.    │
//! │  Exactly one conversion rule is applied, in exactly one place:         │
//! │                                                                         │
//! │    missing / null / non-numeric  →  0                                  │
//! │                                                                         │
//! │  Scattering ad hoc fallbacks through the calculators is forbidden.     │
//! │                                                                         │
//! │  RULE 2: ROUND AT EVERY COMPUTATION, NOT ONLY AT DISPLAY               │
//! │                                                                         │
//! │  Every monetary result is rounded to 2 decimal places the moment it    │
//! │  is computed. Deferring rounding to display makes                      │
//! │  percent → amount → percent round trips drift apart.                   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Why Not Integer Cents?
//! Aluminium is billed by fractional measure: a line grosses
//! length × quantity × rate where length is something like 12.5 feet and
//! quantity may be fractional too. The inputs are real numbers, not money,
//! so the amounts are plain `f64` passed through [`round2`] at each
//! computation boundary. The discipline above keeps results reproducible.
//!
//! ## Usage
//! ```rust
//! use alutrade_core::numeric::{round2, safe_num};
//!
//! assert_eq!(round2(1499.999), 1500.0);
//! assert_eq!(safe_num(f64::NAN), 0.0);
//! ```

use std::fmt;

use serde::de::{self, Deserializer, Visitor};

// =============================================================================
// Coercion
// =============================================================================

/// Coerces a possibly-garbage number to a usable one.
///
/// Non-finite values (NaN, +∞, -∞) become `0.0`; everything else passes
/// through untouched. This is the in-process half of the coercion rule;
/// [`lenient_f64`] is the deserialization half.
///
/// ## Example
/// ```rust
/// use alutrade_core::numeric::safe_num;
///
/// assert_eq!(safe_num(12.5), 12.5);
/// assert_eq!(safe_num(f64::NAN), 0.0);
/// assert_eq!(safe_num(f64::INFINITY), 0.0);
/// ```
#[inline]
pub fn safe_num(value: f64) -> f64 {
    if value.is_finite() {
        value
    } else {
        0.0
    }
}

// =============================================================================
// Rounding
// =============================================================================

/// Rounds a monetary value to 2 decimal places, half away from zero.
///
/// ## Rounding Semantics
/// ```text
/// round2(2.345)  →  2.35   (half rounds away from zero)
/// round2(-0.125) → -0.13   (also away from zero on the negative side)
/// round2(NaN)    →  0.00   (total function, never propagates NaN)
/// ```
///
/// ## When To Call
/// At every computation boundary: each gross, each discount, each net,
/// each aggregate total. Never only at display time.
#[inline]
pub fn round2(value: f64) -> f64 {
    (safe_num(value) * 100.0).round() / 100.0
}

/// Formats an amount with exactly 2 decimal places for display.
///
/// ## Example
/// ```rust
/// use alutrade_core::numeric::format_amount;
///
/// assert_eq!(format_amount(1500.0), "1500.00");
/// assert_eq!(format_amount(-42.5), "-42.50");
/// ```
///
/// ## Note
/// This is for receipts, logs and tests. Locale-aware formatting
/// (thousands separators, currency symbols) belongs to the frontend.
pub fn format_amount(value: f64) -> String {
    format!("{:.2}", round2(value))
}

// =============================================================================
// Lenient Deserialization
// =============================================================================

/// Deserializes a numeric payload field with the coercion rule applied.
///
/// Historical records are not uniform: the same field may be a JSON
/// number in one document, a quoted number in an older one, and null in a
/// hand-migrated one. Deserialization must never fail on such a field, so
/// every shape maps onto an `f64`:
///
/// | Payload value        | Result |
/// |----------------------|--------|
/// | `12.5`               | `12.5` |
/// | `"12.5"`, `" 12.5 "` | `12.5` |
/// | `"aluminium"`, `""`  | `0.0`  |
/// | `null`, missing      | `0.0`  |
/// | `NaN` / `Infinity`   | `0.0`  |
///
/// ## Usage
/// ```rust,ignore
/// #[derive(Deserialize)]
/// struct LineItem {
///     #[serde(default, deserialize_with = "numeric::lenient_f64")]
///     quantity: f64,
/// }
/// ```
pub fn lenient_f64<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    struct LenientF64;

    impl<'de> Visitor<'de> for LenientF64 {
        type Value = f64;

        fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
            formatter.write_str("a number, a numeric string, or null")
        }

        fn visit_f64<E: de::Error>(self, value: f64) -> Result<f64, E> {
            Ok(safe_num(value))
        }

        fn visit_i64<E: de::Error>(self, value: i64) -> Result<f64, E> {
            Ok(value as f64)
        }

        fn visit_u64<E: de::Error>(self, value: u64) -> Result<f64, E> {
            Ok(value as f64)
        }

        fn visit_str<E: de::Error>(self, value: &str) -> Result<f64, E> {
            Ok(value.trim().parse::<f64>().map(safe_num).unwrap_or(0.0))
        }

        fn visit_bool<E: de::Error>(self, _value: bool) -> Result<f64, E> {
            Ok(0.0)
        }

        fn visit_unit<E: de::Error>(self) -> Result<f64, E> {
            Ok(0.0)
        }

        fn visit_none<E: de::Error>(self) -> Result<f64, E> {
            Ok(0.0)
        }

        fn visit_some<D2>(self, deserializer: D2) -> Result<f64, D2::Error>
        where
            D2: Deserializer<'de>,
        {
            deserializer.deserialize_any(self)
        }
    }

    deserializer.deserialize_any(LenientF64)
}

// =============================================================================
// Unit Tests
// =============================================================================
