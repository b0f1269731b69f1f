use crate::errors::ServerError;
use crate::responses::ResultResp;
use astra::{Body, Response, ResponseBuilder};
use http::header::{CACHE_CONTROL, CONTENT_TYPE, LOCATION, SET_COOKIE};
use http::HeaderValue;
use maud::Markup;

pub fn html_response(markup: Markup) -> ResultResp {
    html_status(200, markup)
}

pub fn html_status(status: u16, markup: Markup) -> ResultResp {
    ResponseBuilder::new()
        .status(status)
        .header(CONTENT_TYPE, mime::TEXT_HTML_UTF_8.as_ref())
        .body(Body::from(markup.into_string()))
        .map_err(|_| ServerError::InternalError)
}

/// Text assets compiled into the binary (css, robots.txt, sitemap.xml).
pub fn asset_response(content_type: mime::Mime, body: impl Into<String>) -> ResultResp {
    ResponseBuilder::new()
        .status(200)
        .header(CONTENT_TYPE, content_type.as_ref())
        .header(CACHE_CONTROL, "public, max-age=3600")
        .body(Body::from(body.into()))
        .map_err(|_| ServerError::InternalError)
}

/// 303 so a POST is followed by a GET.
pub fn redirect(location: &str) -> ResultResp {
    ResponseBuilder::new()
        .status(303)
        .header(LOCATION, location)
        .body(Body::empty())
        .map_err(|_| ServerError::InternalError)
}

pub fn redirect_with_cookies(location: &str, cookies: &[String]) -> ResultResp {
    with_cookies(redirect(location)?, cookies)
}

pub fn with_cookies(mut resp: Response, cookies: &[String]) -> ResultResp {
    for cookie in cookies {
        let value = HeaderValue::from_str(cookie).map_err(|_| ServerError::InternalError)?;
        resp.headers_mut().append(SET_COOKIE, value);
    }
    Ok(resp)
}
