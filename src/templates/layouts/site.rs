use crate::api::models::AuthUser;
use crate::domain::market::{
    CONTACT_EMAIL, CONTACT_PHONE, CONTACT_WHATSAPP, DESCRIPTION, MARKETS, SITE_NAME, TAGLINE,
};
use maud::{html, Markup, DOCTYPE};

const NAV_LINKS: &[(&str, &str)] = &[
    ("/properties", "Properties"),
    ("/how-it-works", "How It Works"),
    ("/owners", "For Owners"),
    ("/about", "About"),
];

const COMPANY_LINKS: &[(&str, &str)] = &[
    ("/about", "About Us"),
    ("/how-it-works", "How It Works"),
    ("/contact", "Contact"),
];

const RESOURCE_LINKS: &[(&str, &str)] = &[
    ("/properties", "Browse Properties"),
    ("/owners", "List Your Property"),
    ("/signup", "Create Account"),
];

const LEGAL_LINKS: &[(&str, &str)] = &[("/terms", "Terms of Service"), ("/privacy", "Privacy Policy")];

pub(crate) fn head(title: &str) -> Markup {
    html! {
        head {
            meta charset="utf-8";
            meta name="viewport" content="width=device-width, initial-scale=1.0";
            title { (title) }
            meta name="description" content=(DESCRIPTION);
            meta property="og:site_name" content=(SITE_NAME);
            meta property="og:title" content=(title);
            meta property="og:description" content=(DESCRIPTION);
            link rel="stylesheet" href="/static/main.css";
        }
    }
}

pub fn page_title(title: &str) -> String {
    if title.is_empty() {
        format!("{SITE_NAME} - {TAGLINE}")
    } else {
        format!("{title} | {SITE_NAME}")
    }
}

fn header(user: Option<&AuthUser>) -> Markup {
    html! {
        header class="site-header" {
            div class="container header-row" {
                a href="/" class="brand" { (SITE_NAME) }
                nav class="main-nav" {
                    @for (href, label) in NAV_LINKS {
                        a href=(href) { (label) }
                    }
                }
                div class="header-cta" {
                    @if let Some(user) = user {
                        a href="/profile" class="avatar-link" title=(user.full_name) {
                            span class="avatar" { (user.initial()) }
                            span { "My Profile" }
                        }
                        form method="post" action="/logout" class="inline" {
                            button type="submit" class="btn btn-ghost" { "Logout" }
                        }
                    } @else {
                        a href="/login" class="btn btn-ghost" { "Login" }
                        a href="/signup" class="btn btn-primary" { "Sign Up" }
                    }
                }
            }
        }
    }
}

fn link_column(heading: &str, links: &[(&str, &str)]) -> Markup {
    html! {
        div {
            h3 { (heading) }
            ul {
                @for (href, label) in links {
                    li { a href=(href) { (label) } }
                }
            }
        }
    }
}

fn footer() -> Markup {
    html! {
        footer class="site-footer" {
            div class="container footer-grid" {
                div class="footer-brand" {
                    a href="/" class="brand" { (SITE_NAME) }
                    p { (DESCRIPTION) }
                    p { a href={ "mailto:" (CONTACT_EMAIL) } { (CONTACT_EMAIL) } }
                    p { a href={ "tel:" (CONTACT_PHONE.replace(' ', "")) } { (CONTACT_PHONE) } }
                    p { a href={ "https://wa.me/" (CONTACT_WHATSAPP.trim_start_matches('+')) } { "WhatsApp us" } }
                }
                div {
                    h3 { "Properties" }
                    ul {
                        @for market in MARKETS {
                            li { a href={ "/" (market.slug) } { (market.name) } }
                        }
                    }
                }
                (link_column("Company", COMPANY_LINKS))
                (link_column("Resources", RESOURCE_LINKS))
                (link_column("Legal", LEGAL_LINKS))
            }
            div class="container footer-bottom" {
                p { "© " (chrono::Utc::now().format("%Y")) " " (SITE_NAME) ". All rights reserved." }
            }
        }
    }
}

pub fn site_layout(title: &str, user: Option<&AuthUser>, content: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            (head(&page_title(title)))
            body {
                (header(user))
                main class="site-main" { (content) }
                (footer())
            }
        }
    }
}
