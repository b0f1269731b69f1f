use std::time::Instant;

use astra::{Request, Response};
use http::Method;

use crate::app::App;
use crate::errors::ServerError;
use crate::handlers::site::InfoPage;
use crate::handlers::{account, inquiries, listings, site, Ctx};
use crate::responses::{error_response, ResultResp};

pub fn handle(req: Request, app: &App) -> ResultResp {
    let ctx = Ctx::from_request(req, app.config.trust_proxy)?;

    if ctx.method == Method::POST {
        if let Err(e) = app.limiter.check_and_record(&ctx.client) {
            tracing::warn!(client = %ctx.client, path = %ctx.path, error = %e, "rate limited");
            return Err(ServerError::TooManyRequests);
        }
    }

    let segments: Vec<&str> = ctx
        .path
        .trim_matches('/')
        .split('/')
        .filter(|s| !s.is_empty())
        .collect();

    match (ctx.method.as_str(), segments.as_slice()) {
        ("GET", []) => listings::home(&ctx, app),
        ("GET", ["properties"]) => listings::properties(&ctx, app),
        ("GET", ["properties", id]) => listings::detail(&ctx, app, id),
        ("POST", ["properties", id, "visit"]) => listings::schedule_visit(&ctx, app, id),

        ("GET", ["login"]) => account::login_form(&ctx, app),
        ("POST", ["login"]) => account::login(&ctx, app),
        ("POST", ["logout"]) => account::logout(&ctx, app),
        ("GET", ["signup"]) => account::signup_form(&ctx, app),
        ("POST", ["signup"]) => account::signup_start(&ctx, app),
        ("GET", ["signup", "verify"]) => account::signup_verify_form(&ctx, app),
        ("POST", ["signup", "verify"]) => account::signup_verify(&ctx, app),
        ("POST", ["signup", "resend"]) => account::signup_resend(&ctx, app),
        ("GET", ["profile"]) => account::profile(&ctx, app),
        ("POST", ["profile"]) => account::update_profile(&ctx, app),
        ("POST", ["profile", "visits", id, "cancel"]) => account::cancel_visit(&ctx, app, id),

        ("GET", ["owners"]) => inquiries::owners(&ctx, app),
        ("POST", ["owners"]) => inquiries::submit_owner(&ctx, app),
        ("GET", ["contact"]) => inquiries::contact(&ctx, app),
        ("POST", ["contact"]) => inquiries::submit_contact(&ctx, app),

        ("GET", ["about"]) => site::info(&ctx, app, InfoPage::About),
        ("GET", ["how-it-works"]) => site::info(&ctx, app, InfoPage::HowItWorks),
        ("GET", ["terms"]) => site::info(&ctx, app, InfoPage::Terms),
        ("GET", ["privacy"]) => site::info(&ctx, app, InfoPage::Privacy),
        ("GET", ["robots.txt"]) => site::robots(app),
        ("GET", ["sitemap.xml"]) => site::sitemap(app),
        ("GET", ["static", "main.css"]) => site::stylesheet(),

        // City landing pages: /nellore, /guntur, ...
        ("GET", [slug]) => listings::city(&ctx, app, slug),

        _ => Err(ServerError::NotFound),
    }
}

/// Route one request and turn any error into its HTML page.
pub fn serve(req: Request, app: &App) -> Response {
    let started = Instant::now();
    let method = req.method().clone();
    let path = req.uri().path().to_string();

    let resp = match handle(req, app) {
        Ok(resp) => resp,
        Err(err) => {
            match &err {
                ServerError::NotFound | ServerError::TooManyRequests => {}
                ServerError::BadRequest(msg) => tracing::info!(%path, %msg, "bad request"),
                other => tracing::error!(%path, error = %other, "request failed"),
            }
            error_response(&err)
        }
    };

    tracing::info!(
        %method,
        %path,
        status = resp.status().as_u16(),
        elapsed_ms = started.elapsed().as_millis() as u64,
        "request"
    );
    resp
}
