use maud::{html, Markup};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AlertKind {
    Success,
    Error,
    Info,
}

pub fn alert(kind: AlertKind, message: &str) -> Markup {
    let class = match kind {
        AlertKind::Success => "alert alert-success",
        AlertKind::Error => "alert alert-error",
        AlertKind::Info => "alert alert-info",
    };
    html! {
        div class=(class) role="alert" { (message) }
    }
}

pub fn maybe_alert(kind: AlertKind, message: Option<&str>) -> Markup {
    html! {
        @if let Some(msg) = message {
            (alert(kind, msg))
        }
    }
}
