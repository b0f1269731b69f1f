use crate::api::models::{AuthUser, Listing};
use crate::domain::market::{Market, MARKETS};
use crate::templates::components::{empty_state, property_grid};
use crate::templates::layouts::site_layout;
use maud::{html, Markup};

pub struct CityVm<'a> {
    pub user: Option<&'a AuthUser>,
    pub market: &'static Market,
    pub listings: &'a [Listing],
    pub total: u64,
    pub storage_base: &'a str,
}

fn locality_href(market: &Market, locality: &str) -> String {
    let query = url::form_urlencoded::Serializer::new(String::new())
        .append_pair("city", market.slug)
        .append_pair("locality", locality)
        .finish();
    format!("/properties?{query}")
}

pub fn city_page(vm: &CityVm<'_>) -> Markup {
    let market = vm.market;
    let title = format!("Rental Properties in {}", market.name);
    site_layout(
        &title,
        vm.user,
        html! {
            section class="hero hero-city" style={ "background-image: url('" (market.image) "')" } {
                div class="container" {
                    h1 { "Homes for rent in " (market.name) }
                    p class="lead" { (vm.total) " verified properties available" }
                }
            }

            section class="section" {
                div class="container" {
                    h2 { "Popular localities" }
                    div class="chips" {
                        @for locality in market.localities {
                            a class="chip" href=(locality_href(market, locality)) { (locality) }
                        }
                    }
                }
            }

            section class="section section-alt" {
                div class="container" {
                    div class="section-head" {
                        h2 { "Available in " (market.name) }
                    }
                    (property_grid(vm.listings, vm.storage_base, empty_state(
                        &format!("No listings in {} yet", market.name),
                        "New properties are added every week. Tell us what you need and we'll find it.",
                        Some(("/contact", "Contact us")),
                    )))
                    @if !vm.listings.is_empty() {
                        p class="center" {
                            a class="btn btn-outline" href={ "/properties?city=" (market.slug) } {
                                "View all " (vm.total) " properties →"
                            }
                        }
                    }
                }
            }

            section class="section" {
                div class="container" {
                    h2 { "Other cities" }
                    div class="chips" {
                        @for other in MARKETS.iter().filter(|m| m.slug != market.slug) {
                            a class="chip" href={ "/" (other.slug) } { (other.name) }
                        }
                    }
                }
            }
        },
    )
}
