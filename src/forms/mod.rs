//! Urlencoded form parsing and per-form validation.
//!
//! Every form struct keeps the raw submitted values so a failed submission
//! can be re-rendered as typed, and `validate` turns it into the backend
//! request type or a map of per-field messages.

pub mod auth;
pub mod inquiry;
pub mod profile;
pub mod validation;
pub mod visit;

use std::collections::{BTreeMap, HashMap};

/// Decoded `application/x-www-form-urlencoded` pairs (body or query string).
/// Later duplicates win; values are trimmed except through `raw`.
#[derive(Debug, Clone, Default)]
pub struct FormData {
    fields: HashMap<String, String>,
    untrimmed: HashMap<String, String>,
}

impl FormData {
    pub fn parse(raw: &[u8]) -> Self {
        let untrimmed: HashMap<String, String> = url::form_urlencoded::parse(raw)
            .map(|(k, v)| (k.into_owned(), v.into_owned()))
            .collect();
        let fields = untrimmed
            .iter()
            .map(|(k, v)| (k.clone(), v.trim().to_string()))
            .collect();
        Self { fields, untrimmed }
    }

    /// Value exactly as submitted, for passwords.
    pub fn raw(&self, key: &str) -> &str {
        self.untrimmed.get(key).map(String::as_str).unwrap_or("")
    }

    pub fn from_query(query: Option<&str>) -> Self {
        query.map(|q| Self::parse(q.as_bytes())).unwrap_or_default()
    }

    /// Value or empty string.
    pub fn get(&self, key: &str) -> &str {
        self.fields.get(key).map(String::as_str).unwrap_or("")
    }

    /// Non-empty value.
    pub fn opt(&self, key: &str) -> Option<&str> {
        self.fields
            .get(key)
            .map(String::as_str)
            .filter(|v| !v.is_empty())
    }

    pub fn owned(&self, key: &str) -> String {
        self.get(key).to_string()
    }

    pub fn is_checked(&self, key: &str) -> bool {
        matches!(self.get(key), "on" | "true" | "1" | "yes")
    }
}

/// Per-field validation messages, in field order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldErrors(BTreeMap<&'static str, String>);

impl FieldErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, field: &'static str, message: impl Into<String>) {
        self.0.entry(field).or_insert_with(|| message.into());
    }

    pub fn check(&mut self, field: &'static str, result: Result<(), String>) {
        if let Err(msg) = result {
            self.add(field, msg);
        }
    }

    pub fn get(&self, field: &str) -> Option<&str> {
        self.0.get(field).map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn into_result<T>(self, value: impl FnOnce() -> T) -> Result<T, FieldErrors> {
        if self.is_empty() {
            Ok(value())
        } else {
            Err(self)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_decodes_and_trims() {
        let form = FormData::parse(b"name=+Ravi+Kumar+&email=ravi%40example.com&empty=");
        assert_eq!(form.get("name"), "Ravi Kumar");
        assert_eq!(form.get("email"), "ravi@example.com");
        assert_eq!(form.opt("empty"), None);
        assert_eq!(form.get("missing"), "");
    }

    #[test]
    fn raw_keeps_surrounding_whitespace() {
        let form = FormData::parse(b"password=+secret123+");
        assert_eq!(form.raw("password"), " secret123 ");
        assert_eq!(form.get("password"), "secret123");
        assert_eq!(form.raw("missing"), "");
    }

    #[test]
    fn query_parsing_handles_absent_query() {
        assert_eq!(FormData::from_query(None).opt("city"), None);
        assert_eq!(FormData::from_query(Some("city=guntur")).get("city"), "guntur");
    }

    #[test]
    fn first_error_per_field_wins() {
        let mut errors = FieldErrors::new();
        errors.add("phone", "first");
        errors.add("phone", "second");
        assert_eq!(errors.get("phone"), Some("first"));
    }
}
