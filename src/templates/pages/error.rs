use crate::templates::layouts::site_layout;
use maud::{html, Markup};

pub fn error_page(status: u16, title: &str, message: &str) -> Markup {
    site_layout(
        title,
        None,
        html! {
            section class="section" {
                div class="container narrow center error-page" {
                    p class="error-code" { (status) }
                    h1 { (title) }
                    p class="lead" { (message) }
                    div class="row center" {
                        a class="btn btn-primary" href="/" { "Back to home" }
                        a class="btn btn-outline" href="/properties" { "Browse properties" }
                    }
                }
            }
        },
    )
}
