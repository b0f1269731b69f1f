use crate::api::models::{AuthUser, Listing};
use crate::domain::market::city_name;
use crate::domain::search::{total_pages, SearchParams};
use crate::templates::components::{empty_state, filter_form, property_grid};
use crate::templates::layouts::site_layout;
use maud::{html, Markup};

pub struct PropertiesVm<'a> {
    pub user: Option<&'a AuthUser>,
    pub params: &'a SearchParams,
    pub listings: &'a [Listing],
    pub total: u64,
    pub storage_base: &'a str,
}

fn heading(params: &SearchParams) -> String {
    match (&params.locality, &params.city) {
        (Some(locality), Some(city)) => format!("Properties in {locality}, {}", city_name(city)),
        (None, Some(city)) => format!("Properties in {}", city_name(city)),
        _ => "All Properties".to_string(),
    }
}

fn pagination(params: &SearchParams, total: u64) -> Markup {
    let pages = total_pages(total);
    let page = params.page.min(pages);
    html! {
        @if pages > 1 {
            nav class="pagination" aria-label="Pagination" {
                @if page > 1 {
                    a href=(params.page_href(page - 1)) rel="prev" { "← Previous" }
                }
                span class="muted" { "Page " (page) " of " (pages) }
                @if page < pages {
                    a href=(params.page_href(page + 1)) rel="next" { "Next →" }
                }
            }
        }
    }
}

pub fn properties_page(vm: &PropertiesVm<'_>) -> Markup {
    let title = heading(vm.params);
    let empty = if vm.params.has_filters() {
        empty_state(
            "No properties match your filters",
            "Try widening your budget or choosing another locality.",
            Some(("/properties", "Clear filters")),
        )
    } else {
        empty_state(
            "No properties available right now",
            "New homes are verified every week. Please check back soon.",
            None,
        )
    };

    site_layout(
        &title,
        vm.user,
        html! {
            section class="section" {
                div class="container" {
                    h1 { (title) }
                    p class="muted" { (vm.total) " properties found" }
                    div class="browse" {
                        aside { (filter_form(vm.params)) }
                        div class="browse-results" {
                            (property_grid(vm.listings, vm.storage_base, empty))
                            (pagination(vm.params, vm.total))
                        }
                    }
                }
            }
        },
    )
}
