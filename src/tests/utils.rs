use crate::app::App;
use crate::config::Config;
use astra::{Body, Request, Response};
use http::Method;
use httpmock::prelude::*;
use serde_json::{json, Value};
use std::io::Read;
use tempfile::TempDir;

/// An app wired to a mock backend and a throwaway SQLite file.
pub struct TestApp {
    pub app: App,
    pub server: MockServer,
    _dir: TempDir,
}

pub fn test_app() -> TestApp {
    test_app_with(&[])
}

pub fn test_app_with(extra: &[(&str, &str)]) -> TestApp {
    let server = MockServer::start();
    let dir = tempfile::tempdir().expect("tempdir");
    let db_path = dir.path().join("site.sqlite3").to_string_lossy().to_string();
    let api = server.base_url();

    let config = Config::from_lookup(|key| {
        if let Some((_, v)) = extra.iter().find(|(k, _)| *k == key) {
            return Some(v.to_string());
        }
        match key {
            "API_BASE_URL" => Some(api.clone()),
            "DATABASE_PATH" => Some(db_path.clone()),
            "SITE_URL" => Some("https://www.propthinks.com".into()),
            "APP_ENV" => Some("test".into()),
            "TRUST_PROXY" => Some("1".into()),
            "API_TIMEOUT_SECS" => Some("5".into()),
            _ => None,
        }
    })
    .expect("test config");

    TestApp {
        app: App::new(config).expect("test app"),
        server,
        _dir: dir,
    }
}

pub fn get(path: &str) -> Request {
    request(Method::GET, path, None, Vec::new())
}

pub fn get_with_cookie(path: &str, cookie: &str) -> Request {
    request(Method::GET, path, Some(cookie), Vec::new())
}

pub fn post_form(path: &str, body: &str, cookie: Option<&str>) -> Request {
    request(Method::POST, path, cookie, body.as_bytes().to_vec())
}

fn request(method: Method, path: &str, cookie: Option<&str>, body: Vec<u8>) -> Request {
    let mut builder = http::Request::builder()
        .method(method)
        .uri(path)
        .header("x-forwarded-for", "198.51.100.20");
    if !body.is_empty() {
        builder = builder.header("content-type", "application/x-www-form-urlencoded");
    }
    if let Some(cookie) = cookie {
        builder = builder.header("cookie", cookie);
    }
    builder.body(Body::from(body)).expect("request")
}

pub fn body_string(resp: Response) -> String {
    let mut body = String::new();
    resp.into_body()
        .reader()
        .read_to_string(&mut body)
        .expect("body");
    body
}

pub fn set_cookies(resp: &Response) -> Vec<String> {
    resp.headers()
        .get_all("set-cookie")
        .iter()
        .filter_map(|v| v.to_str().ok())
        .map(str::to_string)
        .collect()
}

/// `name=value` of the first `Set-Cookie` for `name`.
pub fn cookie_pair(resp: &Response, name: &str) -> Option<String> {
    set_cookies(resp)
        .into_iter()
        .filter_map(|c| c.split(';').next().map(str::to_string))
        .find(|pair| pair.starts_with(&format!("{name}=")))
}

pub fn location(resp: &Response) -> String {
    resp.headers()
        .get("location")
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default()
        .to_string()
}

pub fn listing_json(public_id: &str, city: &str, rent: f64) -> Value {
    json!({
        "id": 1,
        "public_id": public_id,
        "property_id": 10,
        "property_public_id": format!("prop-{public_id}"),
        "title": format!("Sunny 2BHK {public_id}"),
        "description": "Corner flat near the market.",
        "rent_amount": rent,
        "security_deposit": rent * 2.0,
        "city": city,
        "locality": "Brodipet",
        "bedrooms": 2,
        "bathrooms": 2,
        "area_sqft": 1100.0,
        "furnishing_type": "semi_furnished",
        "amenities": ["parking", "lift"],
        "tenant_type_allowed": "family",
        "minimum_lease_months": 11,
        "status": "active"
    })
}

pub fn user_json(role: &str) -> Value {
    json!({
        "id": 42,
        "email": "ravi@example.com",
        "role": role,
        "full_name": "Ravi Kumar",
        "is_verified": true,
        "phone": "9876543210"
    })
}

pub fn auth_json(token: &str, role: &str) -> Value {
    json!({
        "access_token": token,
        "token_type": "bearer",
        "expires_in": 1800,
        "role": role,
        "user": user_json(role)
    })
}

/// Log in against a mocked backend and return the `pt_session=...` pair.
pub fn sign_in(t: &TestApp) -> String {
    t.server.mock(|when, then| {
        when.method(POST).path("/auth/login");
        then.status(200)
            .header("set-cookie", "refresh_token=r-1; HttpOnly; Path=/")
            .json_body(auth_json("access-1", "tenant"));
    });
    let resp = crate::router::serve(
        post_form("/login", "email=ravi%40example.com&password=secret123", None),
        &t.app,
    );
    assert_eq!(resp.status(), 303);
    cookie_pair(&resp, "pt_session").expect("session cookie")
}
