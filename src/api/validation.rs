use std::str::FromStr;

use chrono::{NaiveDate, NaiveTime};
use rust_decimal::{Decimal, RoundingStrategy};
use serde_json::Value;

use crate::services::error::ValidationFailure;

/// Largest amount a NUMERIC(10, 2) column holds
pub fn max_money() -> Decimal {
    Decimal::new(9_999_999_999, 2)
}

/// Collects per-field problems while a request body is turned into a typed command.
///
/// Every accessor returns `None` when the field is absent or invalid and records
/// why; callers build their command only when [`Validator::is_clean`] holds.
/// Blank strings count as absent.
#[derive(Debug, Default)]
pub struct Validator {
    failure: ValidationFailure,
}

impl Validator {
    pub fn missing(&mut self, field: &str) {
        self.failure.add(field, format!("{} is required", field), true);
    }

    pub fn invalid(&mut self, field: &str, message: impl Into<String>) {
        self.failure.add(field, message, false);
    }

    pub fn is_clean(&self) -> bool {
        self.failure.is_empty()
    }

    pub fn into_error(self) -> ValidationFailure {
        self.failure
    }

    pub fn required_text(&mut self, field: &str, value: Option<String>, max_len: usize) -> Option<String> {
        match non_blank(value) {
            Some(text) => self.within_length(field, text, max_len),
            None => {
                self.missing(field);
                None
            }
        }
    }

    pub fn optional_text(&mut self, field: &str, value: Option<String>, max_len: usize) -> Option<String> {
        non_blank(value).and_then(|text| self.within_length(field, text, max_len))
    }

    pub fn required_date(&mut self, field: &str, value: Option<String>) -> Option<NaiveDate> {
        let Some(raw) = non_blank(value) else {
            self.missing(field);
            return None;
        };
        let parsed = parse_date(&raw);
        if parsed.is_none() {
            self.invalid(field, format!("{} must be a date (YYYY-MM-DD)", field));
        }
        parsed
    }

    pub fn optional_time(&mut self, field: &str, value: Option<String>) -> Option<NaiveTime> {
        let raw = non_blank(value)?;
        let parsed = parse_time(&raw);
        if parsed.is_none() {
            self.invalid(field, format!("{} must be a time (HH:MM or HH:MM:SS)", field));
        }
        parsed
    }

    /// Expense amounts: required and strictly positive.
    pub fn required_amount(&mut self, field: &str, value: Option<Value>) -> Option<Decimal> {
        match self.decimal(field, value) {
            Ok(Some(amount)) if amount <= Decimal::ZERO => {
                self.invalid(field, format!("{} must be greater than 0", field));
                None
            }
            Ok(Some(amount)) => self.within_money_range(field, amount),
            Ok(None) => {
                self.missing(field);
                None
            }
            Err(()) => None,
        }
    }

    /// Budgets: optional, default 0, never negative.
    pub fn budget(&mut self, field: &str, value: Option<Value>) -> Option<Decimal> {
        match self.decimal(field, value) {
            Ok(Some(budget)) if budget < Decimal::ZERO => {
                self.invalid(field, format!("{} must not be negative", field));
                None
            }
            Ok(Some(budget)) => self.within_money_range(field, budget),
            Ok(None) => Some(Decimal::ZERO),
            Err(()) => None,
        }
    }

    pub fn optional_int(&mut self, field: &str, value: Option<Value>) -> Option<i32> {
        let parsed = match value {
            None | Some(Value::Null) => return None,
            Some(Value::Number(n)) => n.as_i64().and_then(|n| i32::try_from(n).ok()),
            Some(Value::String(s)) if s.trim().is_empty() => return None,
            Some(Value::String(s)) => s.trim().parse::<i32>().ok(),
            Some(_) => None,
        };
        if parsed.is_none() {
            self.invalid(field, format!("{} must be an integer", field));
        }
        parsed
    }

    pub fn optional_float(&mut self, field: &str, value: Option<Value>) -> Option<f64> {
        let parsed = match value {
            None | Some(Value::Null) => return None,
            Some(Value::Number(n)) => n.as_f64(),
            Some(Value::String(s)) if s.trim().is_empty() => return None,
            Some(Value::String(s)) => s.trim().parse::<f64>().ok().filter(|f| f.is_finite()),
            Some(_) => None,
        };
        if parsed.is_none() {
            self.invalid(field, format!("{} must be a number", field));
        }
        parsed
    }

    fn decimal(&mut self, field: &str, value: Option<Value>) -> Result<Option<Decimal>, ()> {
        let parsed = match value {
            None | Some(Value::Null) => return Ok(None),
            Some(Value::String(s)) if s.trim().is_empty() => return Ok(None),
            Some(Value::String(s)) => parse_decimal(s.trim()),
            Some(Value::Number(n)) => parse_decimal(&n.to_string()),
            Some(_) => None,
        };
        match parsed {
            Some(d) => Ok(Some(d)),
            None => {
                self.invalid(field, format!("{} must be a number", field));
                Err(())
            }
        }
    }

    fn within_money_range(&mut self, field: &str, value: Decimal) -> Option<Decimal> {
        // same rounding as NUMERIC(10, 2)
        let value = value.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
        if value > max_money() {
            self.invalid(field, format!("{} must be at most {}", field, max_money()));
            return None;
        }
        Some(value)
    }

    fn within_length(&mut self, field: &str, text: String, max_len: usize) -> Option<String> {
        if text.chars().count() > max_len {
            self.invalid(field, format!("{} must be at most {} characters", field, max_len));
            return None;
        }
        Some(text)
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
}

/// `YYYY-MM-DD`, or an ISO datetime whose date part is taken verbatim.
pub fn parse_date(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();
    if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return Some(date);
    }
    match (raw.get(..10), raw.as_bytes().get(10).copied()) {
        (Some(prefix), Some(b'T') | Some(b' ')) => NaiveDate::parse_from_str(prefix, "%Y-%m-%d").ok(),
        _ => None,
    }
}

pub fn parse_time(raw: &str) -> Option<NaiveTime> {
    let raw = raw.trim();
    NaiveTime::parse_from_str(raw, "%H:%M:%S%.f")
        .or_else(|_| NaiveTime::parse_from_str(raw, "%H:%M"))
        .ok()
}

fn parse_decimal(raw: &str) -> Option<Decimal> {
    Decimal::from_str(raw)
        .or_else(|_| Decimal::from_scientific(raw))
        .ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn blank_text_counts_as_missing() {
        let mut v = Validator::default();
        assert_eq!(v.required_text("destination", Some("   ".into()), 255), None);
        assert!(!v.is_clean());

        let failure = v.into_error();
        assert_eq!(failure.summary(), "Missing required fields");
        assert_eq!(failure.field_errors["destination"], "destination is required");
    }

    #[test]
    fn text_is_trimmed_and_length_checked() {
        let mut v = Validator::default();
        assert_eq!(v.required_text("category", Some("  Food  ".into()), 50), Some("Food".into()));
        assert_eq!(v.required_text("category", Some("x".repeat(51)), 50), None);
        assert_eq!(v.into_error().summary(), "Invalid field values");
    }

    #[test]
    fn dates_accept_plain_and_datetime_forms() {
        let june_2 = NaiveDate::from_ymd_opt(2025, 6, 2).unwrap();
        assert_eq!(parse_date("2025-06-02"), Some(june_2));
        assert_eq!(parse_date("2025-06-02T00:00:00.000Z"), Some(june_2));
        assert_eq!(parse_date("2025-06-02 09:30:00"), Some(june_2));
        assert_eq!(parse_date("06/02/2025"), None);
        assert_eq!(parse_date("2025-02-30"), None);
    }

    #[test]
    fn times_accept_with_or_without_seconds() {
        assert_eq!(parse_time("09:30"), NaiveTime::from_hms_opt(9, 30, 0));
        assert_eq!(parse_time("09:30:15"), NaiveTime::from_hms_opt(9, 30, 15));
        assert_eq!(parse_time("25:00"), None);
    }

    #[test]
    fn amounts_must_be_positive_numbers() {
        let mut v = Validator::default();
        assert_eq!(v.required_amount("amount", Some(json!(45.5))), Some(Decimal::new(4550, 2)));
        assert_eq!(v.required_amount("amount", Some(json!("12.345"))), Some(Decimal::new(1235, 2)));
        assert!(v.is_clean());

        assert_eq!(v.required_amount("amount", Some(json!(0))), None);
        let failure = v.into_error();
        assert_eq!(failure.field_errors["amount"], "amount must be greater than 0");

        let mut v = Validator::default();
        assert_eq!(v.required_amount("amount", None), None);
        assert_eq!(v.into_error().summary(), "Missing required fields");

        let mut v = Validator::default();
        assert_eq!(v.required_amount("amount", Some(json!("lots"))), None);
        assert_eq!(v.into_error().field_errors["amount"], "amount must be a number");
    }

    #[test]
    fn budget_defaults_to_zero_and_rejects_overflow() {
        let mut v = Validator::default();
        assert_eq!(v.budget("budget", None), Some(Decimal::ZERO));
        assert_eq!(v.budget("budget", Some(json!(""))), Some(Decimal::ZERO));
        assert_eq!(v.budget("budget", Some(json!(1000))), Some(Decimal::new(1000, 0)));
        assert!(v.is_clean());

        assert_eq!(v.budget("budget", Some(json!(-1))), None);
        assert_eq!(v.budget("total", Some(json!(100_000_000))), None);
        let failure = v.into_error();
        assert!(failure.field_errors.contains_key("budget"));
        assert!(failure.field_errors.contains_key("total"));
    }

    #[test]
    fn integers_and_floats_accept_numeric_strings() {
        let mut v = Validator::default();
        assert_eq!(v.optional_int("orderIndex", Some(json!("3"))), Some(3));
        assert_eq!(v.optional_int("orderIndex", Some(Value::Null)), None);
        assert_eq!(v.optional_float("placeRating", Some(json!(4.5))), Some(4.5));
        assert!(v.is_clean());

        assert_eq!(v.optional_int("orderIndex", Some(json!(1.5))), None);
        assert!(!v.is_clean());
    }
}
