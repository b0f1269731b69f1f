// src/handlers/listings.rs
//
// Public listing pages and visit scheduling.

use std::thread::{self, ScopedJoinHandle};

use crate::api::models::{AuthUser, Listing, ListingFilters};
use crate::api::ApiError;
use crate::app::App;
use crate::domain::listing::similar;
use crate::domain::market::{find_market, Market, MARKETS};
use crate::domain::search::SearchParams;
use crate::errors::ServerError;
use crate::forms::visit::VisitForm;
use crate::forms::FieldErrors;
use crate::handlers::{login_redirect, session_expired, Ctx};
use crate::responses::{html_response, ResultResp};
use crate::templates::pages::city::{city_page, CityVm};
use crate::templates::pages::home::{home_page, HomeVm};
use crate::templates::pages::properties::{properties_page, PropertiesVm};
use crate::templates::pages::property_detail::{
    property_detail_page, DetailVm, VisitPanel, VISIT_FAILURE,
};

const FEATURED_COUNT: u32 = 4;
const POPULAR_COUNT: u32 = 4;
const CITY_PAGE_LIMIT: u32 = 12;
const SIMILAR_COUNT: usize = 3;

/// A panicked fetch thread counts as a failed fetch.
fn joined<T>(handle: ScopedJoinHandle<'_, Result<T, ApiError>>) -> Result<T, ApiError> {
    handle
        .join()
        .unwrap_or_else(|_| Err(ApiError::Network("fetch thread panicked".into())))
}

/// Non-critical data: log and show nothing.
fn or_empty(what: &str, result: Result<Vec<Listing>, ApiError>) -> Vec<Listing> {
    result.unwrap_or_else(|e| {
        tracing::warn!(error = %e, "{what} unavailable");
        Vec::new()
    })
}

pub fn home(ctx: &Ctx, app: &App) -> ResultResp {
    let current = ctx.current_user(app)?;
    let api = &app.api;

    let (featured, popular, markets) = thread::scope(|s| {
        let featured = s.spawn(|| api.newest_listings(FEATURED_COUNT));
        let popular = s.spawn(|| api.popular_listings(POPULAR_COUNT));
        let counts: Vec<_> = MARKETS
            .iter()
            .map(|m| s.spawn(move || api.city_listing_count(m.slug)))
            .collect();
        let markets: Vec<(&'static Market, u64)> = MARKETS
            .iter()
            .zip(counts)
            .map(|(m, h)| (m, h.join().unwrap_or(0)))
            .collect();
        (joined(featured), joined(popular), markets)
    });

    let featured = or_empty("featured listings", featured);
    let popular = or_empty("popular listings", popular);
    html_response(home_page(&HomeVm {
        user: current.as_ref().map(|c| &c.user),
        featured: &featured,
        popular: &popular,
        markets: &markets,
        storage_base: app.storage_base(),
    }))
}

pub fn city(ctx: &Ctx, app: &App, slug: &str) -> ResultResp {
    let market = find_market(slug).ok_or(ServerError::NotFound)?;
    let current = ctx.current_user(app)?;
    let api = &app.api;

    let (listings, total) = thread::scope(|s| {
        let listings =
            s.spawn(|| api.search_listings(&ListingFilters::for_city(market.slug, CITY_PAGE_LIMIT)));
        let total = s.spawn(|| api.city_listing_count(market.slug));
        (joined(listings), total.join().unwrap_or(0))
    });

    let listings = or_empty("city listings", listings);
    html_response(city_page(&CityVm {
        user: current.as_ref().map(|c| &c.user),
        market,
        listings: &listings,
        total,
        storage_base: app.storage_base(),
    }))
}

pub fn properties(ctx: &Ctx, app: &App) -> ResultResp {
    let current = ctx.current_user(app)?;
    let params = SearchParams::from_query(&ctx.query);
    let filters = params.to_filters();
    let api = &app.api;

    let (listings, count) = thread::scope(|s| {
        let listings = s.spawn(|| api.search_listings(&filters));
        let count = s.spawn(|| api.count_listings(&filters));
        (joined(listings), joined(count))
    });

    let listings = or_empty("search results", listings);
    let total = count.unwrap_or_else(|e| {
        tracing::warn!(error = %e, "listing count unavailable");
        u64::from(filters.skip.unwrap_or(0)) + listings.len() as u64
    });

    html_response(properties_page(&PropertiesVm {
        user: current.as_ref().map(|c| &c.user),
        params: &params,
        listings: &listings,
        total,
        storage_base: app.storage_base(),
    }))
}

/// Any backend failure shows the 404 page.
fn fetch_listing(app: &App, id: &str) -> Result<Listing, ServerError> {
    app.api.listing_detail(id).map_err(|e| {
        if !e.is_not_found() {
            tracing::warn!(listing = %id, error = %e, "listing fetch failed");
        }
        ServerError::NotFound
    })
}

fn render_detail(
    ctx: &Ctx,
    app: &App,
    listing: &Listing,
    user: Option<&AuthUser>,
    visit: VisitPanel,
) -> ResultResp {
    let candidates = or_empty(
        "similar listings",
        app.api
            .search_listings(&ListingFilters::for_city(&listing.city, SIMILAR_COUNT as u32 + 1)),
    );
    let similar = similar(listing, &candidates, SIMILAR_COUNT);

    html_response(property_detail_page(&DetailVm {
        user,
        listing,
        similar: &similar,
        storage_base: app.storage_base(),
        apply_url: app.api.apply_url(&listing.public_id),
        schedule_url: app.api.schedule_visit_url(&listing.public_id),
        min_visit_date: ctx.today.format("%Y-%m-%d").to_string(),
        visit,
    }))
}

pub fn detail(ctx: &Ctx, app: &App, id: &str) -> ResultResp {
    let listing = fetch_listing(app, id)?;
    let current = ctx.current_user(app)?;
    let visit = match &current {
        Some(c) => VisitPanel::Form {
            form: VisitForm::with_phone(c.user.phone.as_deref()),
            errors: FieldErrors::new(),
            error: None,
        },
        None => VisitPanel::Guest,
    };
    render_detail(ctx, app, &listing, current.as_ref().map(|c| &c.user), visit)
}

pub fn schedule_visit(ctx: &Ctx, app: &App, id: &str) -> ResultResp {
    let return_to = format!("/properties/{id}");
    let Some(current) = ctx.current_user(app)? else {
        return login_redirect(&return_to);
    };
    let listing = fetch_listing(app, id)?;
    let form = VisitForm::from_form(&ctx.form);

    let details = match form.validate(ctx.today) {
        Ok(details) => details,
        Err(errors) => {
            let panel = VisitPanel::Form { form, errors, error: None };
            return render_detail(ctx, app, &listing, Some(&current.user), panel);
        }
    };

    let panel = match app
        .api
        .schedule_visit(&current.access_token, &details.into_request(&listing))
    {
        Ok(visit) => {
            tracing::info!(visit = %visit.public_id, listing = %listing.public_id, "visit requested");
            VisitPanel::Submitted
        }
        Err(e) if e.is_unauthorized() => return session_expired(app, ctx, &current, &return_to),
        Err(e) => {
            tracing::warn!(listing = %listing.public_id, error = %e, "visit request failed");
            VisitPanel::Form {
                form,
                errors: FieldErrors::new(),
                error: Some(e.user_message(VISIT_FAILURE)),
            }
        }
    };
    render_detail(ctx, app, &listing, Some(&current.user), panel)
}
