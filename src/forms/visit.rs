// src/forms/visit.rs

use chrono::NaiveDate;

use crate::api::models::{Listing, VisitRequest};
use crate::domain::visit::TIME_SLOTS;
use crate::forms::validation::{length, normalize_phone, one_of};
use crate::forms::{FieldErrors, FormData};

#[derive(Debug, Clone, Default)]
pub struct VisitForm {
    pub requested_date: String,
    pub time_slot: String,
    pub phone: String,
    pub notes: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct VisitDetails {
    pub date: NaiveDate,
    pub time_slot: String,
    pub phone: String,
    pub notes: Option<String>,
}

impl VisitDetails {
    pub fn into_request(self, listing: &Listing) -> VisitRequest {
        VisitRequest {
            property_id: listing.property_id,
            visit_type: "rental",
            listing_id: Some(listing.id),
            requested_date: self.date.format("%Y-%m-%d").to_string(),
            requested_time_slot: self.time_slot,
            visitor_phone: self.phone,
            visitor_notes: self.notes,
        }
    }
}

impl VisitForm {
    pub fn from_form(form: &FormData) -> Self {
        Self {
            requested_date: form.owned("requested_date"),
            time_slot: form.owned("time_slot"),
            phone: form.owned("phone"),
            notes: form.owned("notes"),
        }
    }

    /// Prefill for a signed-in visitor.
    pub fn with_phone(phone: Option<&str>) -> Self {
        Self {
            phone: phone.unwrap_or_default().to_string(),
            ..Self::default()
        }
    }

    pub fn validate(&self, today: NaiveDate) -> Result<VisitDetails, FieldErrors> {
        let mut errors = FieldErrors::new();

        let date = match NaiveDate::parse_from_str(&self.requested_date, "%Y-%m-%d") {
            Ok(d) if d < today => {
                errors.add("requested_date", "Please pick today or a later date");
                None
            }
            Ok(d) => Some(d),
            Err(_) => {
                errors.add("requested_date", "Please pick a visit date");
                None
            }
        };
        errors.check(
            "time_slot",
            one_of(&self.time_slot, TIME_SLOTS, "Please choose a time slot"),
        );
        let phone = normalize_phone(&self.phone);
        if let Err(msg) = &phone {
            errors.add("phone", msg.clone());
        }
        errors.check("notes", length(&self.notes, 0, 500, "Message"));

        errors.into_result(|| VisitDetails {
            date: date.unwrap_or(today),
            time_slot: self.time_slot.clone(),
            phone: phone.unwrap_or_default(),
            notes: (!self.notes.is_empty()).then(|| self.notes.clone()),
        })
    }
}

pub fn validate_cancel_reason(raw: &str) -> Result<String, FieldErrors> {
    let mut errors = FieldErrors::new();
    errors.check("reason", length(raw.trim(), 1, 500, "Cancellation reason"));
    errors.into_result(|| raw.trim().to_string())
}
