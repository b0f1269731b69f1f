use crate::api::models::{AuthUser, Listing};
use crate::domain::listing::{
    available_label, format_area, format_inr, full_image_url, location_line, title_case,
};
use crate::domain::market::{CONTACT_PHONE, CONTACT_WHATSAPP};
use crate::domain::visit::TIME_SLOTS;
use crate::forms::visit::VisitForm;
use crate::forms::FieldErrors;
use crate::templates::components::forms::{input_field, select_field, textarea_field};
use crate::templates::components::{alert, property_card, AlertKind};
use crate::templates::layouts::site_layout;
use maud::{html, Markup};

pub const VISIT_SUCCESS: &str = "Visit request submitted! Our team will contact you shortly.";
pub const VISIT_FAILURE: &str = "Failed to submit request. Please try again.";

/// What the sidebar shows for scheduling a visit.
pub enum VisitPanel {
    /// Not signed in: link to login that comes back here.
    Guest,
    Form {
        form: VisitForm,
        errors: FieldErrors,
        error: Option<String>,
    },
    Submitted,
}

pub struct DetailVm<'a> {
    pub user: Option<&'a AuthUser>,
    pub listing: &'a Listing,
    pub similar: &'a [&'a Listing],
    pub storage_base: &'a str,
    pub apply_url: String,
    /// Scheduling inside the signed-in app, for visitors who already use it.
    pub schedule_url: String,
    pub min_visit_date: String,
    pub visit: VisitPanel,
}

fn stat(label: &str, value: impl maud::Render) -> Markup {
    html! {
        div class="stat" {
            span class="muted" { (label) }
            strong { (value) }
        }
    }
}

fn visit_panel(vm: &DetailVm<'_>) -> Markup {
    let listing = vm.listing;
    let action = format!("/properties/{}/visit", listing.public_id);
    let slots: Vec<(&str, &str)> = TIME_SLOTS.iter().map(|s| (*s, *s)).collect();
    html! {
        div class="panel" id="schedule-visit" {
            h3 { "Schedule a Visit" }
            @match &vm.visit {
                VisitPanel::Guest => {
                    p class="muted" { "Sign in to request a free visit. Our team confirms every visit by phone." }
                    a class="btn btn-primary btn-block"
                        href={ "/login?return=/properties/" (listing.public_id) } { "Sign in to schedule" }
                    p class="small" { "New here? " a href="/signup" { "Create an account" } }
                    p class="small muted" { "Already use the PropThinks app? " a href=(vm.schedule_url) { "Schedule there" } }
                },
                VisitPanel::Submitted => {
                    (alert(AlertKind::Success, VISIT_SUCCESS))
                    p class="small" { "Track it any time from " a href="/profile" { "your profile" } "." }
                },
                VisitPanel::Form { form, errors, error } => {
                    @if let Some(msg) = error {
                        (alert(AlertKind::Error, msg))
                    }
                    form method="post" action=(action) class="stack" {
                        div class=(if errors.get("requested_date").is_some() { "field has-error" } else { "field" }) {
                            label for="requested_date" { "Preferred date" }
                            input id="requested_date" name="requested_date" type="date"
                                min=(vm.min_visit_date) value=(form.requested_date);
                            @if let Some(msg) = errors.get("requested_date") {
                                p class="field-error" { (msg) }
                            }
                        }
                        (select_field("Time slot", "time_slot", &slots, &form.time_slot, Some("Select a time slot"), errors))
                        (input_field("Phone", "phone", "tel", &form.phone, "9876543210", errors))
                        (textarea_field("Notes (optional)", "notes", &form.notes, "Anything we should know?", errors))
                        button type="submit" class="btn btn-primary btn-block" { "Request Visit" }
                    }
                }
            }
        }
    }
}

pub fn property_detail_page(vm: &DetailVm<'_>) -> Markup {
    let listing = vm.listing;
    let image = full_image_url(vm.storage_base, listing.image_url.as_deref());
    site_layout(
        &listing.title,
        vm.user,
        html! {
            section class="section" {
                div class="container" {
                    p class="breadcrumbs" {
                        a href="/properties" { "Properties" } " / "
                        a href={ "/" (listing.city.to_lowercase()) } { (title_case(&listing.city)) } " / "
                        span { (listing.title) }
                    }
                    div class="detail" {
                        div class="detail-main" {
                            div class="detail-media" {
                                @if let Some(src) = &image {
                                    img src=(src) alt=(listing.title);
                                } @else {
                                    div class="card-media-empty" { "Photos coming soon" }
                                }
                            }
                            h1 { (listing.title) }
                            p class="card-location" { (location_line(listing)) }

                            div class="price-block" {
                                p class="price" { strong { (format_inr(listing.rent_amount)) } span class="muted" { " per month" } }
                                div class="stats" {
                                    (stat("Security Deposit", format_inr(listing.security_deposit)))
                                    (stat("Maintenance", format_inr(listing.maintenance_amount)))
                                    (stat("Available", available_label(listing)))
                                }
                            }

                            div class="stats" {
                                (stat("Bedrooms", listing.bedrooms))
                                (stat("Bathrooms", listing.bathrooms.unwrap_or(1)))
                                @if let Some(area) = listing.area_sqft.filter(|a| *a > 0.0) {
                                    (stat("Area", format_area(area)))
                                }
                                (stat("Furnishing", listing.furnishing_type.label()))
                                (stat("Preferred tenants", listing.tenant_type_allowed.label()))
                                @if listing.minimum_lease_months > 0 {
                                    (stat("Minimum lease", format!("{} months", listing.minimum_lease_months)))
                                }
                            }

                            @if let Some(description) = listing.description.as_deref().filter(|d| !d.trim().is_empty()) {
                                h2 { "About this property" }
                                p { (description) }
                            }

                            @if !listing.amenities.is_empty() {
                                h2 { "Amenities" }
                                ul class="amenities" {
                                    @for amenity in &listing.amenities {
                                        li { (title_case(amenity)) }
                                    }
                                }
                            }
                        }

                        aside class="detail-side" {
                            (visit_panel(vm))
                            div class="panel" {
                                h3 { "Ready to apply?" }
                                a class="btn btn-outline btn-block" href=(vm.apply_url) { "Apply for this property" }
                            }
                            div class="panel" {
                                h3 { "Need help?" }
                                p { a href={ "tel:" (CONTACT_PHONE.replace(' ', "")) } { (CONTACT_PHONE) } }
                                p { a href={ "https://wa.me/" (CONTACT_WHATSAPP.trim_start_matches('+')) } { "WhatsApp" } }
                            }
                        }
                    }

                    @if !vm.similar.is_empty() {
                        h2 { "Similar properties" }
                        div class="property-grid" {
                            @for other in vm.similar {
                                (property_card(other, vm.storage_base))
                            }
                        }
                    }
                }
            }
        },
    )
}
