// src/forms/profile.rs

use crate::api::models::AuthUser;
use crate::forms::validation::{length, normalize_phone};
use crate::forms::{FieldErrors, FormData};

#[derive(Debug, Clone, Default)]
pub struct ProfileForm {
    pub full_name: String,
    pub phone: String,
}

impl ProfileForm {
    pub fn from_form(form: &FormData) -> Self {
        Self {
            full_name: form.owned("full_name"),
            phone: form.owned("phone"),
        }
    }

    pub fn from_user(user: &AuthUser) -> Self {
        Self {
            full_name: user.full_name.clone(),
            phone: user.phone.clone().unwrap_or_default(),
        }
    }

    /// Returns `(full_name, phone)`; an empty phone clears it.
    pub fn validate(&self) -> Result<(String, String), FieldErrors> {
        let mut errors = FieldErrors::new();
        errors.check("full_name", length(&self.full_name, 2, 100, "Full name"));
        let phone = if self.phone.is_empty() {
            Ok(String::new())
        } else {
            normalize_phone(&self.phone)
        };
        if let Err(msg) = &phone {
            errors.add("phone", msg.clone());
        }
        errors.into_result(|| (self.full_name.clone(), phone.unwrap_or_default()))
    }
}
