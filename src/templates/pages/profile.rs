use crate::api::models::{AuthUser, Visit};
use crate::domain::visit::{
    active_count, apply_target, format_visit_date, status_of, visit_title, MAX_ACTIVE_VISITS,
};
use crate::forms::profile::ProfileForm;
use crate::forms::FieldErrors;
use crate::templates::components::forms::input_field;
use crate::templates::components::{alert, empty_state, AlertKind};
use crate::templates::layouts::site_layout;
use maud::{html, Markup};

/// Result banners carried through the post/redirect/get query string.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProfileFlash {
    Updated,
    UpdateFailed,
    Cancelled,
    CancelFailed,
    ReasonRequired,
}

impl ProfileFlash {
    pub fn code(self) -> &'static str {
        match self {
            ProfileFlash::Updated => "updated",
            ProfileFlash::UpdateFailed => "update-failed",
            ProfileFlash::Cancelled => "cancelled",
            ProfileFlash::CancelFailed => "cancel-failed",
            ProfileFlash::ReasonRequired => "reason-required",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        [
            ProfileFlash::Updated,
            ProfileFlash::UpdateFailed,
            ProfileFlash::Cancelled,
            ProfileFlash::CancelFailed,
            ProfileFlash::ReasonRequired,
        ]
        .into_iter()
        .find(|f| f.code() == code)
    }

    fn banner(self) -> Markup {
        match self {
            ProfileFlash::Updated => alert(AlertKind::Success, "Profile updated successfully!"),
            ProfileFlash::UpdateFailed => {
                alert(AlertKind::Error, "Failed to update profile. Please try again.")
            }
            ProfileFlash::Cancelled => alert(AlertKind::Success, "Visit cancelled successfully!"),
            ProfileFlash::CancelFailed => {
                alert(AlertKind::Error, "Failed to cancel visit. Please try again.")
            }
            ProfileFlash::ReasonRequired => {
                alert(AlertKind::Error, "Please provide a cancellation reason.")
            }
        }
    }
}

pub struct ProfileVm<'a> {
    pub user: &'a AuthUser,
    pub form: ProfileForm,
    pub errors: FieldErrors,
    pub editing: bool,
    pub visits: &'a [Visit],
    pub flash: Option<ProfileFlash>,
    pub apply_url: &'a dyn Fn(&str) -> String,
}

fn details(vm: &ProfileVm<'_>) -> Markup {
    let user = vm.user;
    html! {
        div class="panel" {
            div class="panel-head" {
                h2 { "Account details" }
                @if !vm.editing {
                    a class="btn btn-outline" href="/profile?edit=1" { "Edit Profile" }
                }
            }
            @if vm.editing {
                form method="post" action="/profile" class="stack" {
                    (input_field("Full name", "full_name", "text", &vm.form.full_name, "", &vm.errors))
                    div class="field" {
                        label for="email" { "Email" }
                        input id="email" type="email" value=(user.email) disabled;
                        p class="small muted" { "Email cannot be changed" }
                    }
                    (input_field("Phone", "phone", "tel", &vm.form.phone, "9876543210", &vm.errors))
                    div class="row" {
                        button type="submit" class="btn btn-primary" { "Save changes" }
                        a class="btn btn-ghost" href="/profile" { "Cancel" }
                    }
                }
            } @else {
                dl class="details" {
                    dt { "Full name" } dd { (user.full_name) }
                    dt { "Email" } dd { (user.email) }
                    dt { "Phone" } dd { (user.phone.as_deref().filter(|p| !p.is_empty()).unwrap_or("Not provided")) }
                    dt { "Account type" } dd { (user.role_label()) }
                }
            }
        }
    }
}

fn visit_item(visit: &Visit, apply_url: &dyn Fn(&str) -> String) -> Markup {
    let status = status_of(visit);
    html! {
        li class="visit" {
            div class="visit-head" {
                h3 { (visit_title(visit)) }
                span class={ "badge " (status.badge()) } { (status.label()) }
            }
            p class="muted" {
                (format_visit_date(&visit.requested_date))
                @if !visit.requested_time_slot.is_empty() {
                    " • " (visit.requested_time_slot)
                }
            }
            @if let Some(notes) = visit.visitor_notes.as_deref().filter(|n| !n.is_empty()) {
                p class="small" { strong { "Notes: " } (notes) }
            }
            @if status.is_active() {
                form method="post" action={ "/profile/visits/" (visit.public_id) "/cancel" } class="cancel-visit" {
                    label for={ "reason-" (visit.public_id) } class="small" { "Cancellation reason" }
                    input id={ "reason-" (visit.public_id) } name="reason" type="text" required maxlength="500";
                    button type="submit" class="btn btn-danger" { "Cancel Visit" }
                }
            }
            @if status == crate::domain::visit::VisitStatus::Completed {
                @if let Some(target) = apply_target(visit) {
                    a class="btn btn-primary" href=(apply_url(target)) { "Apply for Property" }
                }
            }
        }
    }
}

pub fn profile_page(vm: &ProfileVm<'_>) -> Markup {
    let user = vm.user;
    let active = active_count(vm.visits);
    site_layout(
        "My Profile",
        Some(user),
        html! {
            section class="section" {
                div class="container narrow" {
                    div class="profile-head" {
                        span class="avatar avatar-lg" { (user.initial()) }
                        div {
                            h1 { "My Profile" }
                            p class="muted" { "Manage your account and track property visits" }
                            span class="badge badge-blue" { (user.role_label()) }
                        }
                    }

                    @if let Some(flash) = vm.flash {
                        (flash.banner())
                    }

                    (details(vm))

                    div class="panel" {
                        div class="panel-head" {
                            h2 { "Visit History" }
                            span class="counter" title="Active Visits" {
                                "Active Visits: " (active) "/" (MAX_ACTIVE_VISITS)
                            }
                        }
                        @if vm.visits.is_empty() {
                            (empty_state(
                                "No visits scheduled",
                                "Find a home you like and request a free visit.",
                                Some(("/properties", "Browse properties")),
                            ))
                        } @else {
                            ul class="visits" {
                                @for visit in vm.visits {
                                    (visit_item(visit, vm.apply_url))
                                }
                            }
                        }
                    }
                }
            }
        },
    )
}
