// src/domain/search.rs

use crate::api::models::ListingFilters;
use crate::forms::FormData;

pub const PAGE_SIZE: u32 = 24;

pub const BHK_OPTIONS: &[(&str, &str)] = &[
    ("1", "1 BHK"),
    ("2", "2 BHK"),
    ("3", "3 BHK"),
    ("4", "4 BHK"),
    ("5", "5+ BHK"),
];

pub const BUDGET_OPTIONS: &[(&str, &str)] = &[
    ("0-10000", "Up to ₹10,000"),
    ("10000-20000", "₹10,000 - ₹20,000"),
    ("20000-30000", "₹20,000 - ₹30,000"),
    ("30000-50000", "₹30,000 - ₹50,000"),
    ("50000+", "₹50,000+"),
];

/// The browse page's query string: `city`, `bhk`, `budget`, `locality`, `page`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SearchParams {
    pub city: Option<String>,
    pub bhk: Option<u32>,
    pub budget: Option<String>,
    pub locality: Option<String>,
    pub page: u32,
}

impl SearchParams {
    pub fn from_query(query: &FormData) -> Self {
        Self {
            city: query.opt("city").map(|c| c.to_lowercase()),
            bhk: query
                .opt("bhk")
                .and_then(|b| b.parse::<u32>().ok())
                .filter(|b| (1..=5).contains(b)),
            budget: query
                .opt("budget")
                .filter(|b| parse_budget(b).is_some())
                .map(str::to_string),
            locality: query.opt("locality").map(str::to_string),
            page: query
                .opt("page")
                .and_then(|p| p.parse::<u32>().ok())
                .filter(|p| *p >= 1 && (p - 1).checked_mul(PAGE_SIZE).is_some())
                .unwrap_or(1),
        }
    }

    pub fn has_filters(&self) -> bool {
        self.city.is_some() || self.bhk.is_some() || self.budget.is_some() || self.locality.is_some()
    }

    pub fn to_filters(&self) -> ListingFilters {
        let (min_rent, max_rent) = self
            .budget
            .as_deref()
            .and_then(parse_budget)
            .unwrap_or((None, None));
        ListingFilters {
            city: self.city.clone(),
            locality: self.locality.clone(),
            min_rent,
            max_rent,
            bedrooms: self.bhk,
            skip: Some(self.page.saturating_sub(1).saturating_mul(PAGE_SIZE)),
            limit: Some(PAGE_SIZE),
            ..ListingFilters::default()
        }
    }

    /// Query string for another page with the same filters.
    pub fn page_href(&self, page: u32) -> String {
        let mut ser = url::form_urlencoded::Serializer::new(String::new());
        if let Some(city) = &self.city {
            ser.append_pair("city", city);
        }
        if let Some(bhk) = self.bhk {
            ser.append_pair("bhk", &bhk.to_string());
        }
        if let Some(budget) = &self.budget {
            ser.append_pair("budget", budget);
        }
        if let Some(locality) = &self.locality {
            ser.append_pair("locality", locality);
        }
        if page > 1 {
            ser.append_pair("page", &page.to_string());
        }
        let query = ser.finish();
        if query.is_empty() {
            "/properties".to_string()
        } else {
            format!("/properties?{query}")
        }
    }
}

/// `"10000-20000"` -> `(Some(10000), Some(20000))`, `"50000+"` -> `(Some(50000), None)`.
/// Zero bounds mean "no bound".
pub fn parse_budget(raw: &str) -> Option<(Option<u32>, Option<u32>)> {
    let nonzero = |v: u32| (v > 0).then_some(v);
    if let Some(min) = raw.strip_suffix('+') {
        return min.parse::<u32>().ok().map(|m| (nonzero(m), None));
    }
    let (min, max) = raw.split_once('-')?;
    let min = min.parse::<u32>().ok()?;
    let max = max.parse::<u32>().ok()?;
    if max != 0 && max < min {
        return None;
    }
    Some((nonzero(min), nonzero(max)))
}

pub fn total_pages(total: u64) -> u32 {
    let pages = total.div_ceil(u64::from(PAGE_SIZE));
    u32::try_from(pages).unwrap_or(u32::MAX).max(1)
}
