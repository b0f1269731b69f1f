use crate::domain::market::{SITE_NAME, TAGLINE};
use crate::templates::layouts::site::{head, page_title};
use maud::{html, Markup, DOCTYPE};

/// Centered card for login and signup, without the site navigation.
pub fn auth_layout(title: &str, content: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            (head(&page_title(title)))
            body class="auth-body" {
                div class="auth-shell" {
                    a href="/" class="brand auth-brand" { (SITE_NAME) }
                    p class="muted" { (TAGLINE) }
                    div class="auth-card" { (content) }
                    p class="auth-back" { a href="/" { "← Back to home" } }
                }
            }
        }
    }
}
