// src/domain/visit.rs

use crate::api::models::Visit;

/// Backend enforces this; shown as `n/2` on the profile.
pub const MAX_ACTIVE_VISITS: usize = 2;

pub const TIME_SLOTS: &[&str] = &[
    "morning (9 AM - 12 PM)",
    "afternoon (12 PM - 4 PM)",
    "evening (4 PM - 7 PM)",
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VisitStatus {
    Requested,
    Scheduled,
    Confirmed,
    Completed,
    Cancelled,
    NoShow,
    Other(String),
}

impl VisitStatus {
    pub fn parse(raw: &str) -> Self {
        match raw {
            "requested" => VisitStatus::Requested,
            "scheduled" => VisitStatus::Scheduled,
            "confirmed" => VisitStatus::Confirmed,
            "completed" => VisitStatus::Completed,
            "cancelled" => VisitStatus::Cancelled,
            "no_show" => VisitStatus::NoShow,
            other => VisitStatus::Other(other.to_string()),
        }
    }

    pub fn label(&self) -> &str {
        match self {
            VisitStatus::Requested => "Requested",
            VisitStatus::Scheduled => "Scheduled",
            VisitStatus::Confirmed => "Confirmed",
            VisitStatus::Completed => "Completed",
            VisitStatus::Cancelled => "Cancelled",
            VisitStatus::NoShow => "No Show",
            VisitStatus::Other(raw) => raw,
        }
    }

    /// CSS modifier for the status badge.
    pub fn badge(&self) -> &'static str {
        match self {
            VisitStatus::Requested | VisitStatus::Scheduled => "badge-blue",
            VisitStatus::Confirmed => "badge-green",
            VisitStatus::Completed | VisitStatus::Other(_) => "badge-gray",
            VisitStatus::Cancelled => "badge-red",
            VisitStatus::NoShow => "badge-orange",
        }
    }

    /// Active visits count toward the limit and can be cancelled.
    pub fn is_active(&self) -> bool {
        matches!(
            self,
            VisitStatus::Requested | VisitStatus::Scheduled | VisitStatus::Confirmed
        )
    }
}

pub fn status_of(visit: &Visit) -> VisitStatus {
    VisitStatus::parse(&visit.status)
}

pub fn active_count(visits: &[Visit]) -> usize {
    visits.iter().filter(|v| status_of(v).is_active()).count()
}

/// `2026-10-20` -> `Oct 20, 2026`; unparsable dates are shown as given.
pub fn format_visit_date(raw: &str) -> String {
    raw.get(..10)
        .and_then(|d| chrono::NaiveDate::parse_from_str(d, "%Y-%m-%d").ok())
        .map(|d| d.format("%b %d, %Y").to_string())
        .unwrap_or_else(|| raw.to_string())
}

/// "Property 1a2b3c4d..." from the public id, as the backend gives no title.
pub fn visit_title(visit: &Visit) -> String {
    match visit.property_public_id.as_deref() {
        Some(id) if !id.is_empty() => {
            let short: String = id.chars().take(8).collect();
            format!("Property {short}...")
        }
        _ => "Property Visit".to_string(),
    }
}

/// Completed visits link back to the listing (or its property) to apply.
pub fn apply_target(visit: &Visit) -> Option<&str> {
    visit
        .listing_public_id
        .as_deref()
        .or(visit.property_public_id.as_deref())
        .filter(|id| !id.is_empty())
}
