// src/forms/auth.rs

use serde::{Deserialize, Serialize};

use crate::api::models::SignupRequest;
use crate::domain::market::{self, STATE};
use crate::forms::validation::{length, normalize_email, normalize_phone, one_of};
use crate::forms::{FieldErrors, FormData};

pub const ROLES: &[&str] = &["tenant", "owner"];
pub const OTP_LENGTH: usize = 6;

#[derive(Debug, Clone, Default)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
    pub return_to: String,
}

impl LoginForm {
    pub fn from_form(form: &FormData) -> Self {
        Self {
            email: form.owned("email"),
            password: form.raw("password").to_string(),
            return_to: form.owned("return"),
        }
    }

    pub fn validate(&self) -> Result<String, FieldErrors> {
        let mut errors = FieldErrors::new();
        let email = normalize_email(&self.email);
        if let Err(msg) = &email {
            errors.add("email", msg.clone());
        }
        if self.password.is_empty() {
            errors.add("password", "Password is required");
        }
        errors.into_result(|| email.unwrap_or_default())
    }
}

/// Only local absolute paths are followed after sign-in.
pub fn safe_return_path(raw: &str) -> &str {
    let raw = raw.trim();
    if raw.starts_with('/') && !raw.starts_with("//") && !raw.contains('\\') {
        raw
    } else {
        "/"
    }
}

#[derive(Debug, Clone)]
pub struct SignupForm {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub city: String,
    pub password: String,
    pub role: String,
    pub terms: bool,
}

impl Default for SignupForm {
    fn default() -> Self {
        Self {
            first_name: String::new(),
            last_name: String::new(),
            email: String::new(),
            phone: String::new(),
            city: String::new(),
            password: String::new(),
            role: "tenant".to_string(),
            terms: false,
        }
    }
}

/// Validated signup details waiting for the OTP step.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SignupDraft {
    pub email: String,
    pub password: String,
    pub full_name: String,
    pub phone: String,
    pub role: String,
    pub city: String,
}

impl SignupDraft {
    pub fn into_request(self, otp_code: &str) -> SignupRequest {
        SignupRequest {
            email: self.email,
            password: self.password,
            full_name: self.full_name,
            phone: self.phone,
            role: self.role,
            city: self.city,
            state: STATE.to_string(),
            otp_code: otp_code.to_string(),
        }
    }
}

impl SignupForm {
    pub fn from_form(form: &FormData) -> Self {
        Self {
            first_name: form.owned("first_name"),
            last_name: form.owned("last_name"),
            email: form.owned("email"),
            phone: form.owned("phone"),
            city: form.owned("city"),
            password: form.raw("password").to_string(),
            role: form.opt("role").unwrap_or("tenant").to_string(),
            terms: form.is_checked("terms"),
        }
    }

    pub fn validate(&self) -> Result<SignupDraft, FieldErrors> {
        let mut errors = FieldErrors::new();
        errors.check("first_name", length(&self.first_name, 1, 50, "First name"));
        errors.check("last_name", length(&self.last_name, 1, 50, "Last name"));
        let email = normalize_email(&self.email);
        if let Err(msg) = &email {
            errors.add("email", msg.clone());
        }
        let phone = normalize_phone(&self.phone);
        if let Err(msg) = &phone {
            errors.add("phone", msg.clone());
        }
        if market::find_market(&self.city).is_none() {
            errors.add("city", "Please select a city");
        }
        let pw_len = self.password.chars().count();
        if pw_len < 8 {
            errors.add("password", "Password must be at least 8 characters");
        } else if pw_len > 100 {
            errors.add("password", "Password too long");
        }
        errors.check("role", one_of(&self.role, ROLES, "Please choose tenant or owner"));
        if !self.terms {
            errors.add("terms", "Please accept the Terms of Service and Privacy Policy");
        }

        errors.into_result(|| SignupDraft {
            email: email.unwrap_or_default(),
            password: self.password.clone(),
            full_name: format!("{} {}", self.first_name.trim(), self.last_name.trim()),
            phone: phone.unwrap_or_default(),
            role: self.role.clone(),
            city: market::city_name(&self.city),
        })
    }
}

pub fn validate_otp(raw: &str) -> Result<String, FieldErrors> {
    let code: String = raw.chars().filter(|c| !c.is_whitespace()).collect();
    let mut errors = FieldErrors::new();
    if code.len() != OTP_LENGTH || !code.chars().all(|c| c.is_ascii_digit()) {
        errors.add("otp_code", format!("Enter the {OTP_LENGTH}-digit code we sent you"));
    }
    errors.into_result(|| code)
}
