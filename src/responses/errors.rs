use crate::errors::ServerError;
use crate::templates::pages::error_page;
use astra::{Body, Response};
use http::header::CONTENT_TYPE;
use http::{HeaderValue, StatusCode};

pub type ResultResp = Result<Response, ServerError>;

/// Convert a ServerError into a full HTML error page.
pub fn error_response(err: &ServerError) -> Response {
    let status = err.status();
    let (title, message) = match err {
        ServerError::NotFound => (
            "Page not found",
            "The page you're looking for doesn't exist or has been moved.".to_string(),
        ),
        ServerError::BadRequest(msg) => ("Bad request", msg.clone()),
        ServerError::TooManyRequests => ("Slow down", err.to_string()),
        ServerError::Upstream(_) => (
            "Service unavailable",
            "We couldn't reach our servers. Please try again in a moment.".to_string(),
        ),
        ServerError::DbError(_) | ServerError::InternalError => (
            "Something went wrong",
            "An unexpected error occurred. Please try again.".to_string(),
        ),
    };

    let mut resp = Response::new(Body::from(error_page(status, title, &message).into_string()));
    *resp.status_mut() = StatusCode::from_u16(status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
    resp.headers_mut().insert(
        CONTENT_TYPE,
        HeaderValue::from_static("text/html; charset=utf-8"),
    );
    resp
}
