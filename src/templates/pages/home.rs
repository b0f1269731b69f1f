// templates/pages/home.rs

use crate::api::models::{AuthUser, Listing};
use crate::domain::market::{Market, TAGLINE};
use crate::templates::components::{empty_state, property_grid, search_bar};
use crate::templates::layouts::site_layout;
use maud::{html, Markup};

const WHY: &[(&str, &str)] = &[
    ("Verified Properties", "Every listing is inspected by our team. No fake listings, no surprises."),
    ("No Hidden Charges", "What you see is what you pay. Transparent pricing, always."),
    ("24/7 Support", "We're here whenever you need us. Call, WhatsApp, or email."),
];

pub(crate) const STEPS: &[(&str, &str)] = &[
    ("Search", "Browse verified listings in your city"),
    ("Visit", "Schedule a free property visit"),
    ("Apply", "Submit your application online"),
    ("Move In", "Sign the lease and get your keys"),
];

const OWNER_BENEFITS: &[&str] = &[
    "Verified, background-checked tenants",
    "Rent collection and timely payouts",
    "Regular inspections and maintenance",
    "No direct tenant calls. We handle everything.",
];

pub struct HomeVm<'a> {
    pub user: Option<&'a AuthUser>,
    pub featured: &'a [Listing],
    /// Most viewed homes; the section is hidden when empty.
    pub popular: &'a [Listing],
    pub markets: &'a [(&'static Market, u64)],
    pub storage_base: &'a str,
}

pub fn home_page(vm: &HomeVm<'_>) -> Markup {
    site_layout(
        "",
        vm.user,
        html! {
            section class="hero" {
                div class="container" {
                    h1 { (TAGLINE) }
                    p class="lead" { "Verified rental homes across Andhra Pradesh, managed end-to-end by PropThinks." }
                    (search_bar())
                }
            }

            section class="section" {
                div class="container" {
                    div class="section-head" {
                        h2 { "Browse by City" }
                        p class="muted" { "Find homes in your preferred location" }
                    }
                    div class="market-strip" {
                        @for (market, count) in vm.markets {
                            a class="market-tile" href={ "/" (market.slug) } {
                                img src=(market.image) alt=(market.name) loading="lazy";
                                span class="market-name" { (market.name) }
                                span class="market-count" { (count) " properties" }
                            }
                        }
                    }
                }
            }

            section class="section section-alt" {
                div class="container" {
                    div class="section-head" {
                        h2 { "Featured Properties" }
                        p class="muted" { "Handpicked homes, ready to move in" }
                    }
                    (property_grid(vm.featured, vm.storage_base, empty_state(
                        "New listings coming soon",
                        "We're verifying new homes every week. Check back shortly.",
                        Some(("/properties", "Browse all properties")),
                    )))
                    @if !vm.featured.is_empty() {
                        p class="center" { a class="btn btn-outline" href="/properties" { "View all properties →" } }
                    }
                }
            }

            @if !vm.popular.is_empty() {
                section class="section" {
                    div class="container" {
                        div class="section-head" {
                            h2 { "Most Viewed" }
                            p class="muted" { "What other renters are looking at" }
                        }
                        (property_grid(vm.popular, vm.storage_base, html! {}))
                    }
                }
            }

            section class="section" {
                div class="container" {
                    div class="section-head" { h2 { "Why PropThinks" } }
                    div class="feature-grid" {
                        @for (title, body) in WHY {
                            div class="feature" { h3 { (title) } p class="muted" { (body) } }
                        }
                    }
                }
            }

            section class="section section-alt" {
                div class="container" {
                    div class="section-head" {
                        h2 { "How It Works" }
                        p class="muted" { "Four simple steps to your new home" }
                    }
                    ol class="steps" {
                        @for (i, (title, body)) in STEPS.iter().enumerate() {
                            li class="step" {
                                span class="step-num" { (i + 1) }
                                h3 { (title) }
                                p class="muted" { (body) }
                            }
                        }
                    }
                }
            }

            section class="section owner-cta" {
                div class="container split" {
                    div {
                        h2 { "Own a property?" }
                        p { "Let us manage it for you. 8% commission, no upfront fees." }
                        ul class="checklist" {
                            @for benefit in OWNER_BENEFITS { li { (benefit) } }
                        }
                        a class="btn btn-primary" href="/owners" { "List Your Property" }
                    }
                }
            }
        },
    )
}
