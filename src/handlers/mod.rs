//! Request handlers, grouped by area. `router` picks one per route.

pub mod account;
pub mod inquiries;
pub mod listings;
pub mod site;

use std::io::Read;
use std::net::IpAddr;

use astra::Request;
use chrono::{FixedOffset, NaiveDate, Utc};
use http::{HeaderMap, Method};

use crate::app::App;
use crate::auth::cookies::{clear_cookie, cookie_value, SESSION_COOKIE};
use crate::auth::CurrentUser;
use crate::errors::ServerError;
use crate::forms::FormData;
use crate::responses::{redirect_with_cookies, ResultResp};

/// Form bodies above this are rejected.
const MAX_BODY_BYTES: u64 = 64 * 1024;

/// India Standard Time, for "today" in visit dates.
const IST_OFFSET_SECS: i32 = 5 * 3600 + 30 * 60;

/// Peer address inserted into request extensions by the server loop.
#[derive(Debug, Clone, Copy)]
pub struct ClientAddr(pub IpAddr);

/// Everything a handler needs from the incoming request.
pub struct Ctx {
    pub method: Method,
    pub path: String,
    pub query: FormData,
    pub headers: HeaderMap,
    pub form: FormData,
    pub client: String,
    pub now: i64,
    pub today: NaiveDate,
}

impl Ctx {
    pub fn from_request(req: Request, trust_proxy: bool) -> Result<Self, ServerError> {
        let (parts, mut body) = req.into_parts();

        let form = if parts.method == Method::POST {
            let mut raw = Vec::new();
            body.reader()
                .take(MAX_BODY_BYTES + 1)
                .read_to_end(&mut raw)
                .map_err(|e| ServerError::BadRequest(format!("unreadable body: {e}")))?;
            if raw.len() as u64 > MAX_BODY_BYTES {
                return Err(ServerError::BadRequest("form too large".into()));
            }
            FormData::parse(&raw)
        } else {
            FormData::default()
        };

        let client = client_address(&parts.headers, parts.extensions.get::<ClientAddr>(), trust_proxy);
        let now = Utc::now();
        let today = FixedOffset::east_opt(IST_OFFSET_SECS)
            .map(|tz| now.with_timezone(&tz).date_naive())
            .unwrap_or_else(|| now.date_naive());

        Ok(Self {
            path: parts.uri.path().to_string(),
            query: FormData::from_query(parts.uri.query()),
            method: parts.method,
            headers: parts.headers,
            form,
            client,
            now: now.timestamp(),
            today,
        })
    }

    pub fn session_cookie(&self) -> Option<String> {
        cookie_value(&self.headers, SESSION_COOKIE)
    }

    pub fn current_user(&self, app: &App) -> Result<Option<CurrentUser>, ServerError> {
        app.auth()
            .current_user(self.session_cookie().as_deref(), self.now)
    }
}

fn client_address(headers: &HeaderMap, peer: Option<&ClientAddr>, trust_proxy: bool) -> String {
    let forwarded = trust_proxy
        .then(|| headers.get("x-forwarded-for"))
        .flatten()
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.split(',').next())
        .map(str::trim)
        .filter(|v| !v.is_empty());
    match (forwarded, peer) {
        (Some(ip), _) => ip.to_string(),
        (None, Some(ClientAddr(ip))) => ip.to_string(),
        (None, None) => "unknown".to_string(),
    }
}

/// Send a signed-out visitor to login, coming back to `return_to` after.
pub fn login_redirect(return_to: &str) -> ResultResp {
    let query = url::form_urlencoded::Serializer::new(String::new())
        .append_pair("return", return_to)
        .finish();
    redirect_with_cookies(&format!("/login?{query}"), &[])
}

/// The backend no longer accepts this session's token.
pub fn session_expired(app: &App, ctx: &Ctx, current: &CurrentUser, return_to: &str) -> ResultResp {
    tracing::info!(session_id = current.session_id, "backend rejected token, signing out");
    app.auth().revoke(current.session_id, ctx.now)?;
    let resp = login_redirect(return_to)?;
    crate::responses::with_cookies(
        resp,
        &[clear_cookie(SESSION_COOKIE, app.config.secure_cookies())],
    )
}
