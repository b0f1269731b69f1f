// src/domain/listing.rs

use crate::api::models::Listing;

/// Indian digit grouping, e.g. `125000.0` -> `₹1,25,000`.
pub fn format_inr(amount: f64) -> String {
    let rounded = amount.round() as i64;
    let digits = rounded.unsigned_abs().to_string();
    let sign = if rounded < 0 { "-" } else { "" };

    if digits.len() <= 3 {
        return format!("{sign}₹{digits}");
    }

    let (head, tail) = digits.split_at(digits.len() - 3);
    let mut groups: Vec<&str> = Vec::new();
    let mut end = head.len();
    while end > 2 {
        groups.push(&head[end - 2..end]);
        end -= 2;
    }
    groups.push(&head[..end]);
    groups.reverse();

    format!("{sign}₹{},{tail}", groups.join(","))
}

pub fn format_area(sqft: f64) -> String {
    format!("{} sq.ft", sqft.round() as i64)
}

/// Storage paths become bucket URLs; absolute URLs pass through.
pub fn full_image_url(storage_base: &str, image_url: Option<&str>) -> Option<String> {
    let image = image_url.map(str::trim).filter(|s| !s.is_empty())?;
    if image.starts_with("http://") || image.starts_with("https://") {
        return Some(image.to_string());
    }
    Some(format!(
        "{}/{}",
        storage_base.trim_end_matches('/'),
        image.trim_start_matches('/')
    ))
}

/// "Locality, City", or just the city.
pub fn location_line(listing: &Listing) -> String {
    match listing.locality.as_deref().filter(|l| !l.is_empty()) {
        Some(locality) => format!("{locality}, {}", title_case(&listing.city)),
        None => title_case(&listing.city),
    }
}

pub fn title_case(raw: &str) -> String {
    raw.split(|c: char| c == '_' || c == '-' || c.is_whitespace())
        .filter(|w| !w.is_empty())
        .map(|w| {
            let mut chars = w.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

pub fn available_label(listing: &Listing) -> String {
    listing
        .available_from
        .as_deref()
        .and_then(|d| chrono::NaiveDate::parse_from_str(d.get(..10)?, "%Y-%m-%d").ok())
        .map(|d| d.format("%b %d, %Y").to_string())
        .unwrap_or_else(|| "Immediate".to_string())
}

/// Same city, excluding the listing itself, at most `max`.
pub fn similar<'a>(current: &Listing, candidates: &'a [Listing], max: usize) -> Vec<&'a Listing> {
    candidates
        .iter()
        .filter(|l| l.public_id != current.public_id && l.city.eq_ignore_ascii_case(&current.city))
        .take(max)
        .collect()
}
