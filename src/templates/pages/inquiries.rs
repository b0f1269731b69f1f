// templates/pages/inquiries.rs
//
// Owner inquiry (`/owners`) and contact (`/contact`) pages.

use crate::api::models::AuthUser;
use crate::domain::market::{CONTACT_EMAIL, CONTACT_PHONE, CONTACT_WHATSAPP, MARKETS};
use crate::forms::inquiry::{
    ContactForm, OwnerInquiryForm, CONTACT_METHODS, CONTACT_SUBJECTS, PROPERTY_TYPES,
};
use crate::forms::FieldErrors;
use crate::templates::components::forms::{input_field, select_field, textarea_field};
use crate::templates::components::{alert, AlertKind};
use crate::templates::layouts::site_layout;
use maud::{html, Markup};

pub const OWNER_SUCCESS: &str = "Inquiry submitted! Our team will contact you within 24 hours.";
pub const OWNER_FAILURE: &str = "Failed to submit inquiry. Please try again.";
pub const CONTACT_SUCCESS: &str =
    "Message sent successfully! We'll get back to you within 24 hours.";
pub const CONTACT_FAILURE: &str =
    "Failed to send message. Please try again or email us directly.";

const OWNER_SERVICES: &[(&str, &str)] = &[
    ("Free tenant search", "We market your property and screen every applicant."),
    ("Full-Service Management", "Rent collection, maintenance and inspections handled for you."),
    ("No Upfront Fees", "Pay only when occupied. No rent = No commission."),
];

/// Where a submitted form stands.
pub enum FormState<F> {
    Open { form: F, errors: FieldErrors, error: Option<String> },
    Sent,
}

impl<F: Default> FormState<F> {
    pub fn blank() -> Self {
        FormState::Open {
            form: F::default(),
            errors: FieldErrors::new(),
            error: None,
        }
    }
}

fn owner_form(form: &OwnerInquiryForm, errors: &FieldErrors) -> Markup {
    let cities: Vec<(&str, &str)> = MARKETS.iter().map(|m| (m.name, m.name)).collect();
    html! {
        form method="post" action="/owners" class="stack" {
            (input_field("Your name", "name", "text", &form.name, "Full name", errors))
            div class="row" {
                (input_field("Phone", "phone", "tel", &form.phone, "9876543210", errors))
                (input_field("Email", "email", "email", &form.email, "you@example.com", errors))
            }
            div class="row" {
                (select_field("Property type", "property_type", PROPERTY_TYPES, &form.property_type, Some("Select property type"), errors))
                (select_field("City", "city", &cities, &form.city, Some("Select city"), errors))
            }
            (textarea_field("Tell us about your property (optional)", "message", &form.message, "Location, size, expected rent...", errors))
            button type="submit" class="btn btn-primary btn-block" { "List My Property" }
        }
    }
}

/// Self-service entry points in the owner app.
pub struct OwnerLinks {
    pub list_property: String,
    pub owner_signup: String,
}

pub fn owners_page(
    user: Option<&AuthUser>,
    state: &FormState<OwnerInquiryForm>,
    links: &OwnerLinks,
) -> Markup {
    site_layout(
        "List Your Property",
        user,
        html! {
            section class="hero" {
                div class="container" {
                    h1 { "Rent out your property. " span class="accent" { "Passive Income." } }
                    p class="lead" { "Simple, Transparent Pricing: 8% Commission Only, of collected rent only." }
                }
            }
            section class="section" {
                div class="container split" {
                    div {
                        h2 { "What you get" }
                        div class="feature-grid" {
                            @for (title, body) in OWNER_SERVICES {
                                div class="feature" { h3 { (title) } p class="muted" { (body) } }
                            }
                        }
                    }
                    div class="panel" id="inquiry" {
                        h2 { "List Your Property" }
                        @match state {
                            FormState::Sent => {
                                h3 { "Thank You!" }
                                (alert(AlertKind::Success, OWNER_SUCCESS))
                            },
                            FormState::Open { form, errors, error } => {
                                @if let Some(msg) = error {
                                    (alert(AlertKind::Error, msg))
                                }
                                (owner_form(form, errors))
                            },
                        }
                        p class="small muted" {
                            "Prefer to do it yourself? "
                            a href=(links.list_property) { "List it in the owner app" }
                            " or "
                            a href=(links.owner_signup) { "create an owner account" }
                            "."
                        }
                    }
                }
            }
        },
    )
}

fn contact_form(form: &ContactForm, errors: &FieldErrors) -> Markup {
    html! {
        form method="post" action="/contact" class="stack" {
            (input_field("Your name", "name", "text", &form.name, "Full name", errors))
            (select_field("How should we reach you?", "contact_method", CONTACT_METHODS, &form.contact_method, None, errors))
            div class="row" {
                (input_field("Phone", "phone", "tel", &form.phone, "9876543210", errors))
                (input_field("Email", "email", "email", &form.email, "you@example.com", errors))
            }
            (select_field("Subject", "subject", CONTACT_SUBJECTS, &form.subject, Some("Select a subject"), errors))
            (textarea_field("Message", "message", &form.message, "How can we help?", errors))
            button type="submit" class="btn btn-primary btn-block" { "Send Message" }
        }
    }
}

pub fn contact_page(user: Option<&AuthUser>, state: &FormState<ContactForm>) -> Markup {
    site_layout(
        "Contact Us",
        user,
        html! {
            section class="section" {
                div class="container split" {
                    div {
                        h1 { "Have Questions?" }
                        p class="lead" { "We'd love to hear from you" }
                        div class="panel" {
                            h3 { "Call Us" }
                            p { a href={ "tel:" (CONTACT_PHONE.replace(' ', "")) } { (CONTACT_PHONE) } }
                            p class="small muted" { "Mon-Sat, 9:00 AM - 7:00 PM" }
                        }
                        div class="panel" {
                            h3 { "Chat with us" }
                            p { a href={ "https://wa.me/" (CONTACT_WHATSAPP.trim_start_matches('+')) } { "WhatsApp" } }
                            p class="small muted" { "Quick responses during business hours" }
                        }
                        div class="panel" {
                            h3 { "Email Us" }
                            p { a href={ "mailto:" (CONTACT_EMAIL) } { (CONTACT_EMAIL) } }
                        }
                        div class="panel" {
                            h3 { "Our Office" }
                            p { "Nellore, Andhra Pradesh" }
                        }
                    }
                    div class="panel" {
                        h2 { "Send us a Message" }
                        @match state {
                            FormState::Sent => {
                                h3 { "Message Sent!" }
                                (alert(AlertKind::Success, CONTACT_SUCCESS))
                            },
                            FormState::Open { form, errors, error } => {
                                @if let Some(msg) = error {
                                    (alert(AlertKind::Error, msg))
                                }
                                (contact_form(form, errors))
                            },
                        }
                    }
                }
            }
        },
    )
}
