//! The Application Record: a flat field-name → value object exactly as the
//! web form submits it.
//!
//! Fields are kept as raw JSON so partial and unknown fields survive storage
//! untouched. Typed access happens through the small accessors below.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Number, Value};

/// Fields stored as integers. Empty or unparseable input becomes `null`.
pub const INTEGER_FIELDS: [&str; 8] = [
    "age",
    "height",
    "weight",
    "family1Age",
    "family2Age",
    "family3Age",
    "family4Age",
    "numberOfChildren",
];

/// Keys owned by the server; client values for them are discarded on submit.
pub const SERVER_FIELDS: [&str; 3] = ["id", "created_at", "status"];

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ApplicationRecord(Map<String, Value>);

impl ApplicationRecord {
    pub fn new() -> Self {
        Self::default()
    }

    /// Wraps an arbitrary JSON value; anything that is not an object yields an empty record.
    pub fn from_value(value: Value) -> Self {
        match value {
            Value::Object(map) => Self(map),
            _ => Self::default(),
        }
    }

    pub fn get(&self, field: &str) -> Option<&Value> {
        self.0.get(field)
    }

    pub fn set(&mut self, field: &str, value: impl Into<Value>) {
        self.0.insert(field.to_string(), value.into());
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn into_value(self) -> Value {
        Value::Object(self.0)
    }

    /// The field as it is printed on the form. Falsy values print as nothing.
    pub fn display(&self, field: &str) -> String {
        match self.get(field) {
            Some(Value::String(s)) => s.clone(),
            Some(Value::Number(n)) if !is_zero(n) => n.to_string(),
            Some(Value::Bool(true)) => "true".to_string(),
            _ => String::new(),
        }
    }

    /// Truthiness used by tick-box fields such as `hasComputer`.
    pub fn is_set(&self, field: &str) -> bool {
        match self.get(field) {
            Some(Value::Bool(b)) => *b,
            Some(Value::String(s)) => !s.is_empty(),
            Some(Value::Number(n)) => !is_zero(n),
            Some(Value::Array(_)) | Some(Value::Object(_)) => true,
            Some(Value::Null) | None => false,
        }
    }

    /// Exact string comparison; numbers and booleans never match.
    pub fn equals(&self, field: &str, expected: &str) -> bool {
        matches!(self.get(field), Some(Value::String(s)) if s == expected)
    }

    /// Rewrites every integer-designated field to a JSON integer or `null`.
    pub fn coerce_integer_fields(&mut self) {
        for field in INTEGER_FIELDS {
            let coerced = self
                .0
                .get(field)
                .and_then(coerce_integer)
                .map(Value::from)
                .unwrap_or(Value::Null);
            self.0.insert(field.to_string(), coerced);
        }
    }

    /// Drops keys the server assigns itself.
    pub fn strip_server_fields(&mut self) {
        for field in SERVER_FIELDS {
            self.0.remove(field);
        }
    }
}

fn is_zero(n: &Number) -> bool {
    n.as_f64().map(|f| f == 0.0).unwrap_or(false)
}

/// Integer value of a submitted field, if it has one.
///
/// Strings are read like a form field: leading whitespace, an optional sign,
/// then as many digits as are present (`"42kg"` → 42). No digits → `None`.
/// A string that reads as zero (`"0"`, `"00"`, `"0kg"`) is also `None`, while
/// a JSON number 0 stays 0.
pub fn coerce_integer(value: &Value) -> Option<i64> {
    match value {
        Value::Number(n) => n
            .as_i64()
            .or_else(|| n.as_f64().filter(|f| f.is_finite()).map(|f| f.trunc() as i64)),
        Value::String(s) => parse_leading_integer(s).filter(|&n| n != 0),
        _ => None,
    }
}

fn parse_leading_integer(input: &str) -> Option<i64> {
    let trimmed = input.trim_start();
    let (negative, rest) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };
    let digits: &str = &rest[..rest
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(rest.len())];
    if digits.is_empty() {
        return None;
    }
    let magnitude: i64 = digits.parse().ok()?;
    Some(if negative { -magnitude } else { magnitude })
}

/// A language proficiency rating. Anything unrecognised reads as `No`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LanguageRating {
    Excellent,
    Good,
    Fair,
    No,
}

impl LanguageRating {
    pub const CHECKABLE: [LanguageRating; 3] = [
        LanguageRating::Excellent,
        LanguageRating::Good,
        LanguageRating::Fair,
    ];

    pub const fn as_str(self) -> &'static str {
        match self {
            LanguageRating::Excellent => "excellent",
            LanguageRating::Good => "good",
            LanguageRating::Fair => "fair",
            LanguageRating::No => "no",
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            LanguageRating::Excellent => "Excellent",
            LanguageRating::Good => "Good",
            LanguageRating::Fair => "Fair",
            LanguageRating::No => "No",
        }
    }

    pub fn of(record: &ApplicationRecord, field: &str) -> Self {
        Self::CHECKABLE
            .into_iter()
            .find(|rating| record.equals(field, rating.as_str()))
            .unwrap_or(LanguageRating::No)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn record(value: Value) -> ApplicationRecord {
        ApplicationRecord::from_value(value)
    }

    #[test]
    fn test_empty_string_integer_becomes_null() {
        let mut r = record(json!({ "age": "" }));
        r.coerce_integer_fields();
        assert_eq!(r.get("age"), Some(&Value::Null));
    }

    #[test]
    fn test_absent_integer_becomes_null() {
        let mut r = record(json!({}));
        r.coerce_integer_fields();
        for field in INTEGER_FIELDS {
            assert_eq!(r.get(field), Some(&Value::Null), "{field} should be null");
        }
    }

    #[test]
    fn test_numeric_string_parses() {
        let mut r = record(json!({ "age": "35", "height": " 172cm" }));
        r.coerce_integer_fields();
        assert_eq!(r.get("age"), Some(&json!(35)));
        assert_eq!(r.get("height"), Some(&json!(172)));
    }

    #[test]
    fn test_garbage_integer_becomes_null() {
        let mut r = record(json!({ "weight": "abc", "numberOfChildren": true }));
        r.coerce_integer_fields();
        assert_eq!(r.get("weight"), Some(&Value::Null));
        assert_eq!(r.get("numberOfChildren"), Some(&Value::Null));
    }

    #[test]
    fn test_json_numbers_are_truncated() {
        let mut r = record(json!({ "family1Age": 61, "family2Age": 58.9 }));
        r.coerce_integer_fields();
        assert_eq!(r.get("family1Age"), Some(&json!(61)));
        assert_eq!(r.get("family2Age"), Some(&json!(58)));
    }

    #[test]
    fn test_zero_string_becomes_null() {
        let mut r = record(json!({ "numberOfChildren": "0", "age": "00", "weight": "0kg" }));
        r.coerce_integer_fields();
        assert_eq!(r.get("numberOfChildren"), Some(&Value::Null));
        assert_eq!(r.get("age"), Some(&Value::Null));
        assert_eq!(r.get("weight"), Some(&Value::Null));
    }

    #[test]
    fn test_zero_number_is_kept() {
        let mut r = record(json!({ "numberOfChildren": 0 }));
        r.coerce_integer_fields();
        assert_eq!(r.get("numberOfChildren"), Some(&json!(0)));
    }

    #[test]
    fn test_non_integer_fields_untouched() {
        let mut r = record(json!({ "zipCode": "", "nickname": "Ton" }));
        r.coerce_integer_fields();
        assert_eq!(r.get("zipCode"), Some(&json!("")));
        assert_eq!(r.get("nickname"), Some(&json!("Ton")));
    }

    #[test]
    fn test_parse_leading_integer_signs() {
        assert_eq!(parse_leading_integer("-7"), Some(-7));
        assert_eq!(parse_leading_integer("+12"), Some(12));
        assert_eq!(parse_leading_integer("-"), None);
        assert_eq!(parse_leading_integer(""), None);
    }

    #[test]
    fn test_display_coercion() {
        let r = record(json!({
            "name": "Somchai",
            "age": 35,
            "zero": 0,
            "flag": true,
            "off": false,
            "nothing": null
        }));
        assert_eq!(r.display("name"), "Somchai");
        assert_eq!(r.display("age"), "35");
        assert_eq!(r.display("zero"), "");
        assert_eq!(r.display("flag"), "true");
        assert_eq!(r.display("off"), "");
        assert_eq!(r.display("nothing"), "");
        assert_eq!(r.display("missing"), "");
    }

    #[test]
    fn test_is_set_truthiness() {
        let r = record(json!({ "a": true, "b": "on", "c": "", "d": 0, "e": 1 }));
        assert!(r.is_set("a"));
        assert!(r.is_set("b"));
        assert!(!r.is_set("c"));
        assert!(!r.is_set("d"));
        assert!(r.is_set("e"));
        assert!(!r.is_set("missing"));
    }

    #[test]
    fn test_language_rating_exact_match_only() {
        let r = record(json!({
            "englishSpoken": "good",
            "englishWritten": "Good",
            "englishUnderstand": "no"
        }));
        assert_eq!(LanguageRating::of(&r, "englishSpoken"), LanguageRating::Good);
        assert_eq!(LanguageRating::of(&r, "englishWritten"), LanguageRating::No);
        assert_eq!(LanguageRating::of(&r, "englishUnderstand"), LanguageRating::No);
        assert_eq!(LanguageRating::of(&r, "frenchSpoken"), LanguageRating::No);
    }

    #[test]
    fn test_strip_server_fields() {
        let mut r = record(json!({ "id": "x", "status": "hired", "created_at": "t", "email": "a@b" }));
        r.strip_server_fields();
        assert_eq!(r.len(), 1);
        assert!(r.get("email").is_some());
    }
}
