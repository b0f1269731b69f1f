use crate::domain::market::{find_market, MARKETS};
use crate::domain::search::{SearchParams, BHK_OPTIONS, BUDGET_OPTIONS};
use maud::{html, Markup};

fn options(items: &[(&str, &str)], selected: Option<&str>) -> Markup {
    html! {
        @for (value, label) in items {
            option value=(value) selected[selected == Some(*value)] { (label) }
        }
    }
}

/// Hero search: city, bhk and budget, submitted to `/properties`.
pub fn search_bar() -> Markup {
    let cities: Vec<(&str, &str)> = MARKETS.iter().map(|m| (m.slug, m.name)).collect();
    html! {
        form class="search-bar" method="get" action="/properties" {
            select name="city" aria-label="City" {
                option value="" { "All cities" }
                (options(&cities, None))
            }
            select name="bhk" aria-label="Bedrooms" {
                option value="" { "Any BHK" }
                (options(BHK_OPTIONS, None))
            }
            select name="budget" aria-label="Budget" {
                option value="" { "Any budget" }
                (options(BUDGET_OPTIONS, None))
            }
            button type="submit" class="btn btn-primary" { "Search" }
        }
    }
}

/// Sidebar filters on `/properties`. A plain GET form.
pub fn filter_form(params: &SearchParams) -> Markup {
    let cities: Vec<(&str, &str)> = MARKETS.iter().map(|m| (m.slug, m.name)).collect();
    let bhk = params.bhk.map(|b| b.to_string());
    let localities: Vec<(&str, &str)> = params
        .city
        .as_deref()
        .and_then(find_market)
        .map(|m| m.localities.iter().map(|l| (*l, *l)).collect())
        .unwrap_or_default();

    html! {
        form class="filters" method="get" action="/properties" {
            h3 { "Filters" }
            label for="f-city" { "City" }
            select id="f-city" name="city" {
                option value="" { "All cities" }
                (options(&cities, params.city.as_deref()))
            }
            @if !localities.is_empty() {
                label for="f-locality" { "Locality" }
                select id="f-locality" name="locality" {
                    option value="" { "All localities" }
                    (options(&localities, params.locality.as_deref()))
                }
            }
            label for="f-bhk" { "Bedrooms" }
            select id="f-bhk" name="bhk" {
                option value="" { "Any BHK" }
                (options(BHK_OPTIONS, bhk.as_deref()))
            }
            label for="f-budget" { "Monthly budget" }
            select id="f-budget" name="budget" {
                option value="" { "Any budget" }
                (options(BUDGET_OPTIONS, params.budget.as_deref()))
            }
            button type="submit" class="btn btn-primary btn-block" { "Apply filters" }
            @if params.has_filters() {
                a href="/properties" class="clear-filters" { "Clear filters" }
            }
        }
    }
}
