//! Form field helpers. Each renders its label, control and inline error.

use crate::forms::FieldErrors;
use maud::{html, Markup};

fn field_error(errors: &FieldErrors, name: &str) -> Markup {
    html! {
        @if let Some(msg) = errors.get(name) {
            p class="field-error" id={ (name) "-error" } { (msg) }
        }
    }
}

fn field_class(errors: &FieldErrors, name: &str) -> &'static str {
    if errors.get(name).is_some() {
        "field has-error"
    } else {
        "field"
    }
}

pub fn input_field(
    label: &str,
    name: &str,
    kind: &str,
    value: &str,
    placeholder: &str,
    errors: &FieldErrors,
) -> Markup {
    html! {
        div class=(field_class(errors, name)) {
            label for=(name) { (label) }
            input id=(name) name=(name) type=(kind) value=(value) placeholder=(placeholder);
            (field_error(errors, name))
        }
    }
}

/// Passwords are never echoed back.
pub fn password_field(label: &str, name: &str, errors: &FieldErrors) -> Markup {
    html! {
        div class=(field_class(errors, name)) {
            label for=(name) { (label) }
            input id=(name) name=(name) type="password" autocomplete="current-password";
            (field_error(errors, name))
        }
    }
}

pub fn select_field(
    label: &str,
    name: &str,
    options: &[(&str, &str)],
    selected: &str,
    placeholder: Option<&str>,
    errors: &FieldErrors,
) -> Markup {
    html! {
        div class=(field_class(errors, name)) {
            label for=(name) { (label) }
            select id=(name) name=(name) {
                @if let Some(p) = placeholder {
                    option value="" { (p) }
                }
                @for (value, text) in options {
                    option value=(value) selected[*value == selected] { (text) }
                }
            }
            (field_error(errors, name))
        }
    }
}

pub fn textarea_field(
    label: &str,
    name: &str,
    value: &str,
    placeholder: &str,
    errors: &FieldErrors,
) -> Markup {
    html! {
        div class=(field_class(errors, name)) {
            label for=(name) { (label) }
            textarea id=(name) name=(name) rows="4" placeholder=(placeholder) { (value) }
            (field_error(errors, name))
        }
    }
}

pub fn checkbox_field(name: &str, checked: bool, label: Markup, errors: &FieldErrors) -> Markup {
    html! {
        div class=(field_class(errors, name)) {
            label class="checkbox" {
                input type="checkbox" name=(name) value="on" checked[checked];
                " " (label)
            }
            (field_error(errors, name))
        }
    }
}
