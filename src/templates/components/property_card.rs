use crate::api::models::Listing;
use crate::domain::listing::{format_area, format_inr, full_image_url, location_line};
use maud::{html, Markup};

pub fn property_card(listing: &Listing, storage_base: &str) -> Markup {
    let image = full_image_url(storage_base, listing.image_url.as_deref());
    html! {
        article class="property-card" {
            div class="card-media" {
                @if let Some(src) = &image {
                    img src=(src) alt=(listing.title) loading="lazy";
                } @else {
                    div class="card-media-empty" { "No photo yet" }
                }
                span class="badge badge-dark card-bhk" { (listing.bedrooms) " BHK" }
                span class="badge badge-light card-verified" { "✓ Verified" }
            }
            div class="card-body" {
                h3 class="card-title" { (listing.title) }
                p class="card-location" { (location_line(listing)) }
                p class="card-stats" {
                    (listing.bedrooms) " Bed"
                    " • " (listing.bathrooms.unwrap_or(1)) " Bath"
                    @if let Some(area) = listing.area_sqft.filter(|a| *a > 0.0) {
                        " • " (format_area(area))
                    }
                }
                p class="card-price" {
                    strong { (format_inr(listing.rent_amount)) }
                    span class="muted" { "/month" }
                }
            }
            a class="btn btn-outline btn-block" href={ "/properties/" (listing.public_id) } { "View Details →" }
        }
    }
}

/// Grid of cards, or `empty` when there is nothing to show.
pub fn property_grid(listings: &[Listing], storage_base: &str, empty: Markup) -> Markup {
    html! {
        @if listings.is_empty() {
            (empty)
        } @else {
            div class="property-grid" {
                @for listing in listings {
                    (property_card(listing, storage_base))
                }
            }
        }
    }
}

pub fn empty_state(title: &str, message: &str, action: Option<(&str, &str)>) -> Markup {
    html! {
        div class="empty-state" {
            h3 { (title) }
            p class="muted" { (message) }
            @if let Some((href, label)) = action {
                a class="btn btn-primary" href=(href) { (label) }
            }
        }
    }
}
