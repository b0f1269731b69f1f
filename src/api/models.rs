// src/api/models.rs
//
// Request/response shapes owned by the backend. Optional and defaulted
// fields keep decoding tolerant of older or partial records.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FurnishingType {
    Unfurnished,
    SemiFurnished,
    FullyFurnished,
    #[serde(other)]
    Other,
}

impl Default for FurnishingType {
    fn default() -> Self {
        FurnishingType::Unfurnished
    }
}

impl FurnishingType {
    pub fn label(self) -> &'static str {
        match self {
            FurnishingType::Unfurnished => "Unfurnished",
            FurnishingType::SemiFurnished => "Semi Furnished",
            FurnishingType::FullyFurnished => "Fully Furnished",
            FurnishingType::Other => "Furnishing on request",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TenantType {
    Family,
    Bachelors,
    Students,
    Any,
    #[serde(other)]
    Other,
}

impl Default for TenantType {
    fn default() -> Self {
        TenantType::Any
    }
}

impl TenantType {
    pub fn label(self) -> &'static str {
        match self {
            TenantType::Family => "Families",
            TenantType::Bachelors => "Bachelors",
            TenantType::Students => "Students",
            TenantType::Any | TenantType::Other => "Anyone",
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Listing {
    pub id: i64,
    pub public_id: String,
    #[serde(default)]
    pub ops_ref: Option<String>,
    #[serde(default)]
    pub property_id: i64,
    #[serde(default)]
    pub property_public_id: Option<String>,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    pub rent_amount: f64,
    #[serde(default)]
    pub security_deposit: f64,
    #[serde(default)]
    pub maintenance_amount: f64,
    pub city: String,
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default)]
    pub locality: Option<String>,
    #[serde(default)]
    pub bedrooms: u32,
    #[serde(default)]
    pub bathrooms: Option<u32>,
    #[serde(default)]
    pub area_sqft: Option<f64>,
    #[serde(default)]
    pub furnishing_type: FurnishingType,
    #[serde(default)]
    pub amenities: Vec<String>,
    #[serde(default)]
    pub tenant_type_allowed: TenantType,
    #[serde(default)]
    pub minimum_lease_months: u32,
    #[serde(default)]
    pub available_from: Option<String>,
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub views_count: u64,
    #[serde(default)]
    pub application_count: u64,
    #[serde(default)]
    pub listed_by_user_id: Option<i64>,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub updated_at: Option<String>,
    #[serde(default)]
    pub published_at: Option<String>,
}

/// Search filters. Unset fields are not sent.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ListingFilters {
    pub city: Option<String>,
    pub locality: Option<String>,
    pub min_rent: Option<u32>,
    pub max_rent: Option<u32>,
    pub bedrooms: Option<u32>,
    pub furnishing_type: Option<String>,
    pub tenant_type_allowed: Option<String>,
    pub amenities: Vec<String>,
    pub available_from: Option<String>,
    pub skip: Option<u32>,
    pub limit: Option<u32>,
}

impl ListingFilters {
    pub fn for_city(city: &str, limit: u32) -> Self {
        Self {
            city: Some(city.to_string()),
            limit: Some(limit),
            ..Self::default()
        }
    }

    pub fn query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = self.filter_pairs();
        if let Some(skip) = self.skip {
            pairs.push(("skip", skip.to_string()));
        }
        if let Some(limit) = self.limit {
            pairs.push(("limit", limit.to_string()));
        }
        pairs
    }

    /// Same as `query_pairs` without `skip`/`limit`, for the count endpoint.
    pub fn filter_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::new();
        let mut push = |key: &'static str, value: Option<String>| {
            if let Some(v) = value.filter(|v| !v.is_empty()) {
                pairs.push((key, v));
            }
        };
        push("city", self.city.clone());
        push("locality", self.locality.clone());
        push("min_rent", self.min_rent.filter(|v| *v > 0).map(|v| v.to_string()));
        push("max_rent", self.max_rent.filter(|v| *v > 0).map(|v| v.to_string()));
        push("bedrooms", self.bedrooms.filter(|v| *v > 0).map(|v| v.to_string()));
        push("furnishing_type", self.furnishing_type.clone());
        push("tenant_type_allowed", self.tenant_type_allowed.clone());
        push("amenities", Some(self.amenities.join(",")));
        push("available_from", self.available_from.clone());
        pairs
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct CountResponse {
    pub total: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuthUser {
    pub id: i64,
    pub email: String,
    #[serde(default)]
    pub role: String,
    #[serde(default)]
    pub full_name: String,
    #[serde(default)]
    pub is_verified: bool,
    #[serde(default)]
    pub phone: Option<String>,
}

impl AuthUser {
    pub fn initial(&self) -> char {
        self.full_name
            .chars()
            .next()
            .map(|c| c.to_ascii_uppercase())
            .unwrap_or('U')
    }

    pub fn role_label(&self) -> String {
        match self.role.as_str() {
            "tenant" => "Tenant".to_string(),
            "owner" => "Owner".to_string(),
            other => crate::domain::listing::title_case(other),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct AuthResponse {
    pub access_token: String,
    #[serde(default)]
    pub token_type: String,
    #[serde(default)]
    pub expires_in: i64,
    #[serde(default)]
    pub role: String,
    pub user: AuthUser,
    #[serde(default)]
    pub message: Option<String>,
}

/// An auth response plus the cookies the backend set alongside it
/// (the refresh token travels as a cookie).
#[derive(Debug, Clone)]
pub struct AuthSession {
    pub auth: AuthResponse,
    pub backend_cookies: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct LoginRequest<'a> {
    pub email: &'a str,
    pub password: &'a str,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SignupRequest {
    pub email: String,
    pub password: String,
    pub full_name: String,
    pub phone: String,
    pub role: String,
    pub city: String,
    pub state: String,
    pub otp_code: String,
}

#[derive(Debug, Clone, Copy, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum OtpMethod {
    Email,
}

#[derive(Debug, Clone, Copy, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum OtpPurpose {
    Signup,
}

#[derive(Debug, Clone, Serialize)]
pub struct OtpRequest<'a> {
    pub identifier: &'a str,
    pub method: OtpMethod,
    pub purpose: OtpPurpose,
}

#[derive(Debug, Clone, Deserialize)]
pub struct OtpResponse {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub identifier: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct ProfileUpdate<'a> {
    pub full_name: &'a str,
    pub phone: &'a str,
}

#[derive(Debug, Clone, Serialize)]
pub struct VisitRequest {
    pub property_id: i64,
    pub visit_type: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub listing_id: Option<i64>,
    pub requested_date: String,
    pub requested_time_slot: String,
    pub visitor_phone: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub visitor_notes: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Visit {
    #[serde(default)]
    pub id: i64,
    pub public_id: String,
    #[serde(default)]
    pub property_id: i64,
    #[serde(default)]
    pub property_public_id: Option<String>,
    #[serde(default)]
    pub listing_id: Option<i64>,
    #[serde(default)]
    pub listing_public_id: Option<String>,
    #[serde(default)]
    pub visit_type: String,
    #[serde(default)]
    pub visitor_user_id: i64,
    pub requested_date: String,
    #[serde(default)]
    pub requested_time_slot: String,
    #[serde(default)]
    pub visitor_phone: String,
    #[serde(default)]
    pub visitor_notes: Option<String>,
    pub status: String,
    #[serde(default)]
    pub created_at: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct CancelVisit<'a> {
    pub cancellation_reason: &'a str,
}

#[derive(Debug, Clone, Serialize)]
pub struct OwnerInquiry {
    pub name: String,
    pub phone: String,
    pub email: String,
    pub property_type: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct OwnerInquiryResponse {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub inquiry_id: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct ContactInquiry {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    pub contact_method: String,
    pub subject: String,
    pub message: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ContactInquiryResponse {
    #[serde(default)]
    pub public_id: String,
    #[serde(default)]
    pub message: String,
}
