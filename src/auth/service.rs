// src/auth/service.rs
use crate::api::models::{AuthUser, OtpMethod, OtpPurpose, OtpRequest};
use crate::api::ApiClient;
use crate::auth::{drafts, sessions};
use crate::db::Database;
use crate::errors::ServerError;
use crate::forms::auth::SignupDraft;

/// Refresh this many seconds before the backend token actually expires.
const REFRESH_LEEWAY_SECS: i64 = 30;

/// A signed-in visitor, resolved from the session cookie.
#[derive(Debug, Clone)]
pub struct CurrentUser {
    pub session_id: i64,
    pub access_token: String,
    pub backend_cookies: Option<String>,
    pub user: AuthUser,
}

#[derive(Debug)]
pub enum SignupOutcome {
    /// Raw session token plus the new account.
    Created(String, AuthUser),
    /// Draft missing, expired or already used.
    Expired,
}

pub struct AuthService<'a> {
    api: &'a ApiClient,
    db: &'a Database,
}

impl<'a> AuthService<'a> {
    pub fn new(api: &'a ApiClient, db: &'a Database) -> Self {
        Self { api, db }
    }

    /// Backend login, then a local session. Returns the raw cookie token.
    pub fn login(&self, email: &str, password: &str, now: i64) -> Result<String, ServerError> {
        let session = self.api.login(email, password)?;
        let token = self
            .db
            .with_conn(|conn| sessions::create_session(conn, &session, now))?;
        tracing::info!(user_id = session.auth.user.id, "signed in");
        Ok(token)
    }

    /// Store validated details and send the OTP. Returns the draft cookie token.
    pub fn start_signup(&self, draft: &SignupDraft, now: i64) -> Result<String, ServerError> {
        self.send_otp(&draft.email)?;
        self.db
            .with_conn(|conn| drafts::create_draft(conn, draft, now))
    }

    /// The draft behind a signup cookie, if still live.
    pub fn pending_signup(
        &self,
        draft_token: &str,
        now: i64,
    ) -> Result<Option<SignupDraft>, ServerError> {
        if !crate::auth::token::looks_like_token(draft_token) {
            return Ok(None);
        }
        self.db
            .with_conn(|conn| drafts::load_draft(conn, draft_token, now))
    }

    /// Re-issue the OTP. `Ok(None)` when the draft is gone.
    pub fn resend_otp(
        &self,
        draft_token: &str,
        now: i64,
    ) -> Result<Option<SignupDraft>, ServerError> {
        let Some(draft) = self.db.with_conn(|conn| drafts::load_draft(conn, draft_token, now))?
        else {
            return Ok(None);
        };
        self.send_otp(&draft.email)?;
        Ok(Some(draft))
    }

    fn send_otp(&self, email: &str) -> Result<(), ServerError> {
        self.api.request_otp(&OtpRequest {
            identifier: email,
            method: OtpMethod::Email,
            purpose: OtpPurpose::Signup,
        })?;
        Ok(())
    }

    /// The draft is claimed for the backend call and handed back if the
    /// backend rejects it, so the code can be retried.
    pub fn complete_signup(
        &self,
        draft_token: &str,
        otp_code: &str,
        now: i64,
    ) -> Result<SignupOutcome, ServerError> {
        let Some(draft) = self.db.with_conn(|conn| drafts::claim_draft(conn, draft_token, now))?
        else {
            return Ok(SignupOutcome::Expired);
        };

        let session = match self.api.signup(&draft.into_request(otp_code)) {
            Ok(session) => session,
            Err(e) => {
                self.db
                    .with_conn(|conn| drafts::release_draft(conn, draft_token))?;
                return Err(e.into());
            }
        };

        let token = self.db.with_conn(|conn| {
            drafts::delete_draft(conn, draft_token)?;
            sessions::create_session(conn, &session, now)
        })?;
        tracing::info!(user_id = session.auth.user.id, role = %session.auth.user.role, "account created");
        Ok(SignupOutcome::Created(token, session.auth.user))
    }

    /// Resolve a cookie to a user, refreshing the backend token when it has
    /// expired. A failed refresh ends the session.
    pub fn current_user(
        &self,
        raw_token: Option<&str>,
        now: i64,
    ) -> Result<Option<CurrentUser>, ServerError> {
        let Some(raw) = raw_token.filter(|t| crate::auth::token::looks_like_token(t)) else {
            return Ok(None);
        };
        let Some(row) = self.db.with_conn(|conn| sessions::load_session(conn, raw, now))? else {
            return Ok(None);
        };

        if row.token_expires_at > now + REFRESH_LEEWAY_SECS {
            return Ok(Some(CurrentUser {
                session_id: row.id,
                access_token: row.access_token,
                backend_cookies: row.backend_cookies,
                user: row.user,
            }));
        }

        match self.api.refresh(row.backend_cookies.as_deref()) {
            Ok(session) => {
                self.db
                    .with_conn(|conn| sessions::update_tokens(conn, row.id, &session, now))?;
                tracing::debug!(session_id = row.id, "backend token refreshed");
                Ok(Some(CurrentUser {
                    session_id: row.id,
                    access_token: session.auth.access_token,
                    backend_cookies: session.backend_cookies.or(row.backend_cookies),
                    user: session.auth.user,
                }))
            }
            Err(e) => {
                tracing::warn!(session_id = row.id, error = %e, "token refresh failed, ending session");
                self.revoke(row.id, now)?;
                Ok(None)
            }
        }
    }

    pub fn revoke(&self, session_id: i64, now: i64) -> Result<(), ServerError> {
        self.db
            .with_conn(|conn| sessions::revoke_session(conn, session_id, now))
    }

    /// Best-effort backend logout, then drop the local session.
    pub fn logout(&self, current: &CurrentUser, now: i64) -> Result<(), ServerError> {
        if let Err(e) = self
            .api
            .logout(&current.access_token, current.backend_cookies.as_deref())
        {
            tracing::warn!(error = %e, "backend logout failed");
        }
        self.revoke(current.session_id, now)
    }

    pub fn store_user(&self, session_id: i64, user: &AuthUser) -> Result<(), ServerError> {
        self.db
            .with_conn(|conn| sessions::update_user(conn, session_id, user))
    }
}
