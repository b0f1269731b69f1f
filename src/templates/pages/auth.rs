// templates/pages/auth.rs
//
// Login and the three signup steps.

use crate::api::models::AuthUser;
use crate::domain::market::MARKETS;
use crate::forms::auth::{LoginForm, SignupForm, OTP_LENGTH};
use crate::forms::FieldErrors;
use crate::templates::components::forms::{
    checkbox_field, input_field, password_field, select_field,
};
use crate::templates::components::{maybe_alert, AlertKind};
use crate::templates::layouts::auth_layout;
use maud::{html, Markup};

pub const LOGIN_FAILED: &str = "Login failed. Please check your credentials.";
pub const SIGNUP_EXPIRED: &str = "Your signup session expired. Please start again.";
pub const SIGNUP_FAILED: &str = "Signup failed. Please try again.";

pub fn login_page(form: &LoginForm, errors: &FieldErrors, error: Option<&str>) -> Markup {
    auth_layout(
        "Sign in",
        html! {
            h1 { "Welcome back" }
            p class="muted" { "Sign in to schedule visits and track your applications." }
            (maybe_alert(AlertKind::Error, error))
            form method="post" action="/login" class="stack" {
                input type="hidden" name="return" value=(form.return_to);
                (input_field("Email", "email", "email", &form.email, "you@example.com", errors))
                (password_field("Password", "password", errors))
                button type="submit" class="btn btn-primary btn-block" { "Sign in" }
            }
            p class="small center" { "New to PropThinks? " a href="/signup" { "Create an account" } }
        },
    )
}

fn role_choice(form: &SignupForm, errors: &FieldErrors) -> Markup {
    let roles = [
        ("tenant", "Tenant", "Looking for a home"),
        ("owner", "Property Owner", "Want to list property"),
    ];
    html! {
        fieldset class="role-choice" {
            legend { "I am a" }
            @for (value, label, hint) in roles {
                label class="role-option" {
                    input type="radio" name="role" value=(value) checked[form.role == value];
                    strong { (label) }
                    span class="muted small" { (hint) }
                }
            }
            @if let Some(msg) = errors.get("role") {
                p class="field-error" { (msg) }
            }
        }
    }
}

pub fn signup_form_page(form: &SignupForm, errors: &FieldErrors, error: Option<&str>) -> Markup {
    let cities: Vec<(&str, &str)> = MARKETS.iter().map(|m| (m.slug, m.name)).collect();
    auth_layout(
        "Create account",
        html! {
            h1 { "Create your account" }
            p class="muted" { "Join PropThinks Today" }
            (maybe_alert(AlertKind::Error, error))
            form method="post" action="/signup" class="stack" {
                (role_choice(form, errors))
                div class="row" {
                    (input_field("First name", "first_name", "text", &form.first_name, "Ravi", errors))
                    (input_field("Last name", "last_name", "text", &form.last_name, "Kumar", errors))
                }
                (input_field("Email", "email", "email", &form.email, "you@example.com", errors))
                (input_field("Phone", "phone", "tel", &form.phone, "9876543210", errors))
                (select_field("City", "city", &cities, &form.city, Some("Select your city"), errors))
                (password_field("Password", "password", errors))
                (checkbox_field("terms", form.terms, html! {
                    "I agree to the " a href="/terms" { "Terms of Service" } " and " a href="/privacy" { "Privacy Policy" }
                }, errors))
                button type="submit" class="btn btn-primary btn-block" { "Continue" }
            }
            p class="small center" { "Already have an account? " a href="/login" { "Sign in" } }
        },
    )
}

pub fn signup_otp_page(
    email: &str,
    errors: &FieldErrors,
    error: Option<&str>,
    notice: Option<&str>,
) -> Markup {
    auth_layout(
        "Verify your email",
        html! {
            h1 { "Verify your email" }
            p class="muted" { "We sent a " (OTP_LENGTH) "-digit code to " strong { (email) } "." }
            (maybe_alert(AlertKind::Error, error))
            (maybe_alert(AlertKind::Info, notice))
            form method="post" action="/signup/verify" class="stack" {
                (input_field("Verification code", "otp_code", "text", "", "123456", errors))
                button type="submit" class="btn btn-primary btn-block" { "Verify & create account" }
            }
            form method="post" action="/signup/resend" class="center" {
                button type="submit" class="btn btn-link" { "Resend verification" }
            }
            p class="small center" { a href="/signup" { "Start over" } }
        },
    )
}

/// `list_property_url` is the owner's next step in the app.
pub fn signup_success_page(user: &AuthUser, list_property_url: &str) -> Markup {
    auth_layout(
        "Account created",
        html! {
            h1 { "Account Created!" }
            p { "Welcome to PropThinks, " (user.full_name) "." }
            @if user.role == "owner" {
                p class="muted" { "List your first property from the owner dashboard." }
                a class="btn btn-primary btn-block" href=(list_property_url) { "List your property" }
            } @else {
                p class="muted" { "You can now schedule visits and apply for homes." }
                a class="btn btn-primary btn-block" href="/properties" { "Browse properties" }
            }
            p class="small center" { a href="/profile" { "View your profile" } }
        },
    )
}
