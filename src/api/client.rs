// src/api/client.rs

use reqwest::blocking::{Client, RequestBuilder, Response};
use reqwest::header::{AUTHORIZATION, COOKIE, SET_COOKIE};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::time::Duration;
use url::Url;

use crate::api::error::ApiError;
use crate::api::models::*;

/// Blocking client for the backend REST API.
///
/// Every call is a single request: no retries, no caching.
#[derive(Clone)]
pub struct ApiClient {
    base: Url,
    auth_app: Url,
    client: Client,
}

impl ApiClient {
    pub fn new(base: Url, auth_app: Url, timeout: Duration) -> Result<Self, ApiError> {
        let client = Client::builder()
            .timeout(timeout)
            .user_agent(concat!("propthinks-site/", env!("CARGO_PKG_VERSION")))
            .build()?;
        Ok(Self {
            base,
            auth_app,
            client,
        })
    }

    fn url(&self, path: &str) -> Result<Url, ApiError> {
        self.base
            .join(path.trim_start_matches('/'))
            .map_err(|e| ApiError::Network(format!("bad endpoint {path}: {e}")))
    }

    fn url_with_query(&self, path: &str, pairs: &[(&str, String)]) -> Result<Url, ApiError> {
        let mut url = self.url(path)?;
        if !pairs.is_empty() {
            let mut q = url.query_pairs_mut();
            for (k, v) in pairs {
                q.append_pair(k, v);
            }
        }
        Ok(url)
    }

    fn send(&self, req: RequestBuilder) -> Result<Response, ApiError> {
        let resp = req.send()?;
        let status = resp.status();
        if status.is_success() {
            return Ok(resp);
        }
        let body = resp.text().unwrap_or_default();
        tracing::debug!(status = status.as_u16(), %body, "backend rejected request");
        Err(ApiError::from_body(status.as_u16(), &body))
    }

    fn json<T: DeserializeOwned>(&self, req: RequestBuilder) -> Result<T, ApiError> {
        self.send(req)?
            .json::<T>()
            .map_err(|e| ApiError::Decode(e.to_string()))
    }

    fn get<T: DeserializeOwned>(&self, url: Url) -> Result<T, ApiError> {
        self.json(self.client.get(url))
    }

    fn post<B: Serialize + ?Sized, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, ApiError> {
        self.json(self.client.post(self.url(path)?).json(body))
    }

    fn auth_session(&self, req: RequestBuilder) -> Result<AuthSession, ApiError> {
        let resp = self.send(req)?;
        let backend_cookies = cookie_pairs(&resp);
        let auth = resp
            .json::<AuthResponse>()
            .map_err(|e| ApiError::Decode(e.to_string()))?;
        Ok(AuthSession {
            auth,
            backend_cookies,
        })
    }

    // ---------------------------------------------------------------------
    // Public listing endpoints
    // ---------------------------------------------------------------------

    pub fn search_listings(&self, filters: &ListingFilters) -> Result<Vec<Listing>, ApiError> {
        self.get(self.url_with_query("listings/search", &filters.query_pairs())?)
    }

    pub fn count_listings(&self, filters: &ListingFilters) -> Result<u64, ApiError> {
        let resp: CountResponse =
            self.get(self.url_with_query("listings/count", &filters.filter_pairs())?)?;
        Ok(resp.total)
    }

    /// Live count for a city; any failure counts as zero.
    pub fn city_listing_count(&self, city: &str) -> u64 {
        self.count_listings(&ListingFilters {
            city: Some(city.to_string()),
            ..ListingFilters::default()
        })
        .unwrap_or_else(|e| {
            tracing::warn!(city, error = %e, "city listing count failed");
            0
        })
    }

    pub fn popular_listings(&self, limit: u32) -> Result<Vec<Listing>, ApiError> {
        self.get(self.url_with_query("listings/popular", &[("limit", limit.to_string())])?)
    }

    pub fn newest_listings(&self, limit: u32) -> Result<Vec<Listing>, ApiError> {
        self.get(self.url_with_query("listings/newest", &[("limit", limit.to_string())])?)
    }

    /// `id` may be the numeric id or the public UUID.
    pub fn listing_detail(&self, id: &str) -> Result<Listing, ApiError> {
        let mut url = self.url("listings/")?;
        url.path_segments_mut()
            .map_err(|_| ApiError::Network("base URL cannot carry a path".into()))?
            .pop_if_empty()
            .push(id);
        self.get(url)
    }

    // ---------------------------------------------------------------------
    // Public form submissions
    // ---------------------------------------------------------------------

    pub fn submit_owner_inquiry(
        &self,
        inquiry: &OwnerInquiry,
    ) -> Result<OwnerInquiryResponse, ApiError> {
        self.post("public/owner-inquiries", inquiry)
    }

    pub fn submit_contact_inquiry(
        &self,
        inquiry: &ContactInquiry,
    ) -> Result<ContactInquiryResponse, ApiError> {
        self.post("public/contact-inquiries", inquiry)
    }

    // ---------------------------------------------------------------------
    // Authentication
    // ---------------------------------------------------------------------

    pub fn request_otp(&self, req: &OtpRequest<'_>) -> Result<OtpResponse, ApiError> {
        self.post("verification/send", req)
    }

    pub fn login(&self, email: &str, password: &str) -> Result<AuthSession, ApiError> {
        let body = LoginRequest { email, password };
        self.auth_session(self.client.post(self.url("auth/login")?).json(&body))
    }

    pub fn signup(&self, req: &SignupRequest) -> Result<AuthSession, ApiError> {
        self.auth_session(self.client.post(self.url("auth/signup")?).json(req))
    }

    pub fn refresh(&self, backend_cookies: Option<&str>) -> Result<AuthSession, ApiError> {
        let mut req = self.client.post(self.url("auth/refresh")?);
        if let Some(cookies) = backend_cookies {
            req = req.header(COOKIE, cookies);
        }
        self.auth_session(req)
    }

    pub fn logout(&self, token: &str, backend_cookies: Option<&str>) -> Result<(), ApiError> {
        let mut req = self
            .client
            .post(self.url("auth/logout")?)
            .header(AUTHORIZATION, bearer(token))
            .json(&serde_json::json!({}));
        if let Some(cookies) = backend_cookies {
            req = req.header(COOKIE, cookies);
        }
        self.send(req).map(|_| ())
    }

    pub fn update_profile(
        &self,
        token: &str,
        update: &ProfileUpdate<'_>,
    ) -> Result<AuthUser, ApiError> {
        self.json(
            self.client
                .patch(self.url("users/me")?)
                .header(AUTHORIZATION, bearer(token))
                .json(update),
        )
    }

    // ---------------------------------------------------------------------
    // Property visits (authenticated)
    // ---------------------------------------------------------------------

    pub fn list_visits(&self, token: &str) -> Result<Vec<Visit>, ApiError> {
        self.json(
            self.client
                .get(self.url("property-visits")?)
                .header(AUTHORIZATION, bearer(token)),
        )
    }

    pub fn schedule_visit(&self, token: &str, visit: &VisitRequest) -> Result<Visit, ApiError> {
        self.json(
            self.client
                .post(self.url("property-visits")?)
                .header(AUTHORIZATION, bearer(token))
                .json(visit),
        )
    }

    pub fn cancel_visit(&self, token: &str, visit_id: &str, reason: &str) -> Result<(), ApiError> {
        let mut url = self.url("property-visits/")?;
        url.path_segments_mut()
            .map_err(|_| ApiError::Network("base URL cannot carry a path".into()))?
            .pop_if_empty()
            .push(visit_id)
            .push("cancel");
        self.send(
            self.client
                .patch(url)
                .header(AUTHORIZATION, bearer(token))
                .json(&CancelVisit {
                    cancellation_reason: reason,
                }),
        )
        .map(|_| ())
    }

    // ---------------------------------------------------------------------
    // Links into the authenticated app
    // ---------------------------------------------------------------------

    fn auth_app_link(&self, path: &str, listing: Option<&str>) -> String {
        let mut url = match self.auth_app.join(path) {
            Ok(url) => url,
            Err(_) => return self.auth_app.to_string(),
        };
        if let Some(listing) = listing {
            url.query_pairs_mut().append_pair("listing", listing);
        }
        url.to_string()
    }

    pub fn schedule_visit_url(&self, listing_public_id: &str) -> String {
        self.auth_app_link("tenant/schedule-visit", Some(listing_public_id))
    }

    pub fn apply_url(&self, listing_public_id: &str) -> String {
        self.auth_app_link("tenant/apply", Some(listing_public_id))
    }

    pub fn list_property_url(&self) -> String {
        self.auth_app_link("owner/properties/new", None)
    }

    pub fn owner_signup_url(&self) -> String {
        let mut url = self.auth_app_link("signup", None);
        url.push_str("?role=owner");
        url
    }
}

fn bearer(token: &str) -> String {
    format!("Bearer {token}")
}

/// `name=value` pairs from every `Set-Cookie` header, joined for replay in a
/// `Cookie` header.
fn cookie_pairs(resp: &Response) -> Option<String> {
    let pairs: Vec<&str> = resp
        .headers()
        .get_all(SET_COOKIE)
        .iter()
        .filter_map(|v| v.to_str().ok())
        .filter_map(|v| v.split(';').next())
        .map(str::trim)
        .filter(|p| p.contains('='))
        .collect();
    (!pairs.is_empty()).then(|| pairs.join("; "))
}
