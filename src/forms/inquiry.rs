// src/forms/inquiry.rs

use crate::api::models::{ContactInquiry, OwnerInquiry};
use crate::forms::validation::{length, normalize_email, normalize_phone, one_of};
use crate::forms::{FieldErrors, FormData};

pub const PROPERTY_TYPES: &[(&str, &str)] = &[
    ("apartment", "Apartment"),
    ("house", "Independent House"),
    ("villa", "Villa"),
    ("commercial", "Commercial"),
    ("land", "Plot/Land"),
    ("pg", "PG / Hostel"),
    ("other", "Other"),
];

pub const CONTACT_METHODS: &[(&str, &str)] = &[
    ("phone", "Phone call"),
    ("whatsapp", "WhatsApp"),
    ("email", "Email"),
];

pub const CONTACT_SUBJECTS: &[(&str, &str)] = &[
    ("rental", "Looking for a rental"),
    ("list", "List my property"),
    ("support", "Support / Issue"),
    ("partnership", "Partnership"),
    ("other", "Other"),
];

fn keys(options: &[(&'static str, &'static str)]) -> Vec<&'static str> {
    options.iter().map(|(k, _)| *k).collect()
}

#[derive(Debug, Clone, Default)]
pub struct OwnerInquiryForm {
    pub name: String,
    pub phone: String,
    pub email: String,
    pub property_type: String,
    pub city: String,
    pub message: String,
}

impl OwnerInquiryForm {
    pub fn from_form(form: &FormData) -> Self {
        Self {
            name: form.owned("name"),
            phone: form.owned("phone"),
            email: form.owned("email"),
            property_type: form.owned("property_type"),
            city: form.owned("city"),
            message: form.owned("message"),
        }
    }

    pub fn validate(&self) -> Result<OwnerInquiry, FieldErrors> {
        let mut errors = FieldErrors::new();
        errors.check("name", length(&self.name, 2, 200, "Name"));
        let phone = normalize_phone(&self.phone);
        if let Err(msg) = &phone {
            errors.add("phone", msg.clone());
        }
        let email = normalize_email(&self.email);
        if let Err(msg) = &email {
            errors.add("email", msg.clone());
        }
        errors.check(
            "property_type",
            one_of(&self.property_type, &keys(PROPERTY_TYPES), "Please select a property type"),
        );
        if !self.city.is_empty() {
            errors.check("city", length(&self.city, 2, 100, "City"));
        }
        errors.check("message", length(&self.message, 0, 2000, "Message"));

        errors.into_result(|| OwnerInquiry {
            name: self.name.clone(),
            phone: phone.unwrap_or_default(),
            email: email.unwrap_or_default(),
            property_type: self.property_type.clone(),
            city: (!self.city.is_empty()).then(|| self.city.clone()),
            message: (!self.message.is_empty()).then(|| self.message.clone()),
        })
    }
}

#[derive(Debug, Clone, Default)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub contact_method: String,
    pub subject: String,
    pub message: String,
}

impl ContactForm {
    pub fn from_form(form: &FormData) -> Self {
        Self {
            name: form.owned("name"),
            email: form.owned("email"),
            phone: form.owned("phone"),
            contact_method: form.owned("contact_method"),
            subject: form.owned("subject"),
            message: form.owned("message"),
        }
    }

    /// The chosen contact method decides which of phone/email is required;
    /// the other is validated only when given.
    pub fn validate(&self) -> Result<ContactInquiry, FieldErrors> {
        let mut errors = FieldErrors::new();
        errors.check("name", length(&self.name, 2, 100, "Name"));
        errors.check(
            "contact_method",
            one_of(&self.contact_method, &keys(CONTACT_METHODS), "Please choose how we should reach you"),
        );
        errors.check(
            "subject",
            one_of(&self.subject, &keys(CONTACT_SUBJECTS), "Please select a subject"),
        );
        errors.check("message", length(&self.message, 10, 1000, "Message"));

        let wants_email = self.contact_method == "email";
        let wants_phone = matches!(self.contact_method.as_str(), "phone" | "whatsapp");

        let email = if self.email.is_empty() {
            if wants_email {
                errors.add("email", "Email is required when we should reply by email");
            }
            None
        } else {
            match normalize_email(&self.email) {
                Ok(e) => Some(e),
                Err(msg) => {
                    errors.add("email", msg);
                    None
                }
            }
        };

        let phone = if self.phone.is_empty() {
            if wants_phone {
                errors.add("phone", "Phone number is required for calls and WhatsApp");
            }
            None
        } else {
            match normalize_phone(&self.phone) {
                Ok(p) => Some(p),
                Err(msg) => {
                    errors.add("phone", msg);
                    None
                }
            }
        };

        errors.into_result(|| ContactInquiry {
            name: self.name.clone(),
            email,
            phone,
            contact_method: self.contact_method.clone(),
            subject: self.subject.clone(),
            message: self.message.clone(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn owner_inquiry_valid() {
        let form = OwnerInquiryForm {
            name: "Lakshmi".into(),
            phone: "9123456780".into(),
            email: "L@x.in".into(),
            property_type: "villa".into(),
            city: String::new(),
            message: String::new(),
        };
        let inquiry = form.validate().unwrap();
        assert_eq!(inquiry.email, "l@x.in");
        assert_eq!(inquiry.city, None);
        assert_eq!(inquiry.message, None);
    }

    #[test]
    fn owner_inquiry_rejects_unknown_type_and_long_message() {
        let form = OwnerInquiryForm {
            name: "Lakshmi".into(),
            phone: "9123456780".into(),
            email: "l@x.in".into(),
            property_type: "castle".into(),
            city: "N".into(),
            message: "x".repeat(2001),
        };
        let errors = form.validate().unwrap_err();
        assert_eq!(errors.get("property_type"), Some("Please select a property type"));
        assert!(errors.get("city").is_some());
        assert!(errors.get("message").is_some());
    }

    #[test]
    fn contact_requires_phone_for_whatsapp() {
        let form = ContactForm {
            name: "Sai".into(),
            contact_method: "whatsapp".into(),
            subject: "rental".into(),
            message: "Looking for a 2BHK in Benz Circle".into(),
            ..ContactForm::default()
        };
        let errors = form.validate().unwrap_err();
        assert!(errors.get("phone").is_some());
        assert!(errors.get("email").is_none());
    }

    #[test]
    fn contact_by_email_accepts_missing_phone() {
        let form = ContactForm {
            name: "Sai".into(),
            email: "sai@example.com".into(),
            contact_method: "email".into(),
            subject: "support".into(),
            message: "My visit was not confirmed yet".into(),
            ..ContactForm::default()
        };
        let inquiry = form.validate().unwrap();
        assert_eq!(inquiry.phone, None);
        assert_eq!(inquiry.email.as_deref(), Some("sai@example.com"));
    }

    #[test]
    fn contact_message_needs_ten_chars() {
        let form = ContactForm {
            name: "Sai".into(),
            email: "sai@example.com".into(),
            contact_method: "email".into(),
            subject: "other".into(),
            message: "hi".into(),
            ..ContactForm::default()
        };
        assert_eq!(
            form.validate().unwrap_err().get("message"),
            Some("Message must be at least 10 characters")
        );
    }
}
