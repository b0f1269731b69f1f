// src/handlers/account.rs
//
// Login, signup, logout and the profile page.

use crate::api::models::{ProfileUpdate, Visit};
use crate::app::App;
use crate::auth::cookies::{clear_cookie, cookie_value, set_cookie, SESSION_COOKIE, SIGNUP_COOKIE};
use crate::auth::drafts::DRAFT_TTL_SECS;
use crate::auth::sessions::SESSION_TTL_SECS;
use crate::auth::{CurrentUser, SignupOutcome};
use crate::errors::ServerError;
use crate::forms::auth::{safe_return_path, validate_otp, LoginForm, SignupForm};
use crate::forms::profile::ProfileForm;
use crate::forms::visit::validate_cancel_reason;
use crate::forms::FieldErrors;
use crate::handlers::{login_redirect, session_expired, Ctx};
use crate::responses::{html_response, redirect, redirect_with_cookies, with_cookies, ResultResp};
use crate::templates::pages::auth::{
    login_page, signup_form_page, signup_otp_page, signup_success_page, LOGIN_FAILED,
    SIGNUP_EXPIRED, SIGNUP_FAILED,
};
use crate::templates::pages::profile::{profile_page, ProfileFlash, ProfileVm};

const OTP_SEND_FAILED: &str = "Could not send the verification code. Please try again.";
const OTP_RESENT: &str = "A new code is on its way. It may take a minute to arrive.";

fn session_cookie(app: &App, token: &str) -> String {
    set_cookie(SESSION_COOKIE, token, SESSION_TTL_SECS, app.config.secure_cookies())
}

// ---------------------------------------------------------------------
// Login / logout
// ---------------------------------------------------------------------

pub fn login_form(ctx: &Ctx, app: &App) -> ResultResp {
    let return_to = safe_return_path(ctx.query.get("return"));
    if ctx.current_user(app)?.is_some() {
        return redirect(return_to);
    }
    let form = LoginForm {
        return_to: return_to.to_string(),
        ..LoginForm::default()
    };
    html_response(login_page(&form, &FieldErrors::new(), None))
}

pub fn login(ctx: &Ctx, app: &App) -> ResultResp {
    let form = LoginForm::from_form(&ctx.form);
    let email = match form.validate() {
        Ok(email) => email,
        Err(errors) => return html_response(login_page(&form, &errors, None)),
    };

    match app.auth().login(&email, &form.password, ctx.now) {
        Ok(token) => redirect_with_cookies(
            safe_return_path(&form.return_to),
            &[session_cookie(app, &token)],
        ),
        Err(ServerError::Upstream(e)) => {
            tracing::info!(error = %e, "login rejected");
            let message = e.user_message(LOGIN_FAILED);
            html_response(login_page(&form, &FieldErrors::new(), Some(&message)))
        }
        Err(e) => Err(e),
    }
}

pub fn logout(ctx: &Ctx, app: &App) -> ResultResp {
    if let Some(current) = ctx.current_user(app)? {
        app.auth().logout(&current, ctx.now)?;
    }
    redirect_with_cookies(
        "/",
        &[clear_cookie(SESSION_COOKIE, app.config.secure_cookies())],
    )
}

// ---------------------------------------------------------------------
// Signup: details -> OTP -> success
// ---------------------------------------------------------------------

fn draft_cookie(ctx: &Ctx) -> Option<String> {
    cookie_value(&ctx.headers, SIGNUP_COOKIE)
}

fn signup_expired(app: &App) -> ResultResp {
    let resp = html_response(signup_form_page(
        &SignupForm::default(),
        &FieldErrors::new(),
        Some(SIGNUP_EXPIRED),
    ))?;
    with_cookies(resp, &[clear_cookie(SIGNUP_COOKIE, app.config.secure_cookies())])
}

pub fn signup_form(ctx: &Ctx, app: &App) -> ResultResp {
    if ctx.current_user(app)?.is_some() {
        return redirect("/profile");
    }
    let mut form = SignupForm::default();
    if let Some(role) = ctx.query.opt("role").filter(|r| *r == "owner") {
        form.role = role.to_string();
    }
    html_response(signup_form_page(&form, &FieldErrors::new(), None))
}

pub fn signup_start(ctx: &Ctx, app: &App) -> ResultResp {
    let form = SignupForm::from_form(&ctx.form);
    let draft = match form.validate() {
        Ok(draft) => draft,
        Err(errors) => return html_response(signup_form_page(&form, &errors, None)),
    };

    match app.auth().start_signup(&draft, ctx.now) {
        Ok(token) => {
            let resp = html_response(signup_otp_page(&draft.email, &FieldErrors::new(), None, None))?;
            with_cookies(
                resp,
                &[set_cookie(SIGNUP_COOKIE, &token, DRAFT_TTL_SECS, app.config.secure_cookies())],
            )
        }
        Err(ServerError::Upstream(e)) => {
            tracing::warn!(error = %e, "otp request failed");
            let message = e.user_message(OTP_SEND_FAILED);
            html_response(signup_form_page(&form, &FieldErrors::new(), Some(&message)))
        }
        Err(e) => Err(e),
    }
}

/// Re-show the OTP step for a live draft (e.g. after a reload).
pub fn signup_verify_form(ctx: &Ctx, app: &App) -> ResultResp {
    let Some(token) = draft_cookie(ctx) else {
        return redirect("/signup");
    };
    match app.auth().pending_signup(&token, ctx.now)? {
        Some(draft) => html_response(signup_otp_page(&draft.email, &FieldErrors::new(), None, None)),
        None => signup_expired(app),
    }
}

pub fn signup_verify(ctx: &Ctx, app: &App) -> ResultResp {
    let Some(token) = draft_cookie(ctx) else {
        return signup_expired(app);
    };
    let Some(draft) = app.auth().pending_signup(&token, ctx.now)? else {
        return signup_expired(app);
    };

    let otp = match validate_otp(ctx.form.get("otp_code")) {
        Ok(otp) => otp,
        Err(errors) => return html_response(signup_otp_page(&draft.email, &errors, None, None)),
    };

    match app.auth().complete_signup(&token, &otp, ctx.now) {
        Ok(SignupOutcome::Created(session_token, user)) => {
            let secure = app.config.secure_cookies();
            let resp = html_response(signup_success_page(&user, &app.api.list_property_url()))?;
            with_cookies(
                resp,
                &[session_cookie(app, &session_token), clear_cookie(SIGNUP_COOKIE, secure)],
            )
        }
        Ok(SignupOutcome::Expired) => signup_expired(app),
        Err(ServerError::Upstream(e)) => {
            tracing::info!(error = %e, "signup rejected");
            let message = e.user_message(SIGNUP_FAILED);
            html_response(signup_otp_page(&draft.email, &FieldErrors::new(), Some(&message), None))
        }
        Err(e) => Err(e),
    }
}

pub fn signup_resend(ctx: &Ctx, app: &App) -> ResultResp {
    let Some(token) = draft_cookie(ctx) else {
        return signup_expired(app);
    };
    let Some(draft) = app.auth().pending_signup(&token, ctx.now)? else {
        return signup_expired(app);
    };
    match app.auth().resend_otp(&token, ctx.now) {
        Ok(Some(_)) => html_response(signup_otp_page(&draft.email, &FieldErrors::new(), None, Some(OTP_RESENT))),
        Ok(None) => signup_expired(app),
        Err(ServerError::Upstream(e)) => {
            tracing::warn!(error = %e, "otp resend failed");
            let message = e.user_message(OTP_SEND_FAILED);
            html_response(signup_otp_page(&draft.email, &FieldErrors::new(), Some(&message), None))
        }
        Err(e) => Err(e),
    }
}

// ---------------------------------------------------------------------
// Profile
// ---------------------------------------------------------------------

enum Visits {
    Loaded(Vec<Visit>),
    Unauthorized,
}

fn load_visits(app: &App, current: &CurrentUser) -> Visits {
    match app.api.list_visits(&current.access_token) {
        Ok(visits) => Visits::Loaded(visits),
        Err(e) if e.is_unauthorized() => Visits::Unauthorized,
        Err(e) => {
            tracing::warn!(error = %e, "visit history unavailable");
            Visits::Loaded(Vec::new())
        }
    }
}

fn render_profile(
    ctx: &Ctx,
    app: &App,
    current: &CurrentUser,
    form: ProfileForm,
    errors: FieldErrors,
    editing: bool,
) -> ResultResp {
    let visits = match load_visits(app, current) {
        Visits::Loaded(v) => v,
        Visits::Unauthorized => return session_expired(app, ctx, current, "/profile"),
    };
    let apply_url = |id: &str| app.api.apply_url(id);
    html_response(profile_page(&ProfileVm {
        user: &current.user,
        form,
        errors,
        editing,
        visits: &visits,
        flash: ctx.query.opt("flash").and_then(ProfileFlash::from_code),
        apply_url: &apply_url,
    }))
}

fn flash_redirect(flash: ProfileFlash, editing: bool) -> ResultResp {
    let edit = if editing { "edit=1&" } else { "" };
    redirect(&format!("/profile?{edit}flash={}", flash.code()))
}

pub fn profile(ctx: &Ctx, app: &App) -> ResultResp {
    let Some(current) = ctx.current_user(app)? else {
        return login_redirect("/profile");
    };
    let editing = ctx.query.get("edit") == "1";
    let form = ProfileForm::from_user(&current.user);
    render_profile(ctx, app, &current, form, FieldErrors::new(), editing)
}

pub fn update_profile(ctx: &Ctx, app: &App) -> ResultResp {
    let Some(current) = ctx.current_user(app)? else {
        return login_redirect("/profile");
    };
    let form = ProfileForm::from_form(&ctx.form);
    let (full_name, phone) = match form.validate() {
        Ok(values) => values,
        Err(errors) => return render_profile(ctx, app, &current, form, errors, true),
    };

    let update = ProfileUpdate {
        full_name: &full_name,
        phone: &phone,
    };
    match app.api.update_profile(&current.access_token, &update) {
        Ok(user) => {
            app.auth().store_user(current.session_id, &user)?;
            flash_redirect(ProfileFlash::Updated, false)
        }
        Err(e) if e.is_unauthorized() => session_expired(app, ctx, &current, "/profile"),
        Err(e) => {
            tracing::warn!(error = %e, "profile update failed");
            flash_redirect(ProfileFlash::UpdateFailed, true)
        }
    }
}

pub fn cancel_visit(ctx: &Ctx, app: &App, visit_id: &str) -> ResultResp {
    let Some(current) = ctx.current_user(app)? else {
        return login_redirect("/profile");
    };
    let Ok(reason) = validate_cancel_reason(ctx.form.get("reason")) else {
        return flash_redirect(ProfileFlash::ReasonRequired, false);
    };

    match app.api.cancel_visit(&current.access_token, visit_id, &reason) {
        Ok(()) => {
            tracing::info!(visit = %visit_id, "visit cancelled");
            flash_redirect(ProfileFlash::Cancelled, false)
        }
        Err(e) if e.is_unauthorized() => session_expired(app, ctx, &current, "/profile"),
        Err(e) => {
            tracing::warn!(visit = %visit_id, error = %e, "visit cancel failed");
            flash_redirect(ProfileFlash::CancelFailed, false)
        }
    }
}
