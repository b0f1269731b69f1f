// src/auth/sessions.rs
//
// Maps an opaque browser cookie to the backend access token. The raw token
// only ever lives in the cookie; rows are keyed by its hash.

use crate::api::models::{AuthSession, AuthUser};
use crate::auth::token::{hash_token, new_token};
use crate::db::connection::purge_stale;
use crate::errors::ServerError;
use rusqlite::{params, Connection, OptionalExtension};

pub const SESSION_TTL_SECS: i64 = 60 * 60 * 24 * 7; // 7 days

/// Used when the backend omits `expires_in`.
const DEFAULT_TOKEN_TTL_SECS: i64 = 30 * 60;

#[derive(Debug, Clone)]
pub struct SessionRow {
    pub id: i64,
    pub access_token: String,
    pub backend_cookies: Option<String>,
    pub user: AuthUser,
    pub expires_at: i64,
    pub token_expires_at: i64,
}

fn token_expiry(session: &AuthSession, now: i64) -> i64 {
    let ttl = if session.auth.expires_in > 0 {
        session.auth.expires_in
    } else {
        DEFAULT_TOKEN_TTL_SECS
    };
    now + ttl
}

fn user_json(user: &AuthUser) -> Result<String, ServerError> {
    serde_json::to_string(user).map_err(|e| ServerError::DbError(format!("encode user failed: {e}")))
}

/// Store a new session and return the raw cookie token.
pub fn create_session(
    conn: &Connection,
    session: &AuthSession,
    now: i64,
) -> Result<String, ServerError> {
    purge_stale(conn, now)?;
    let raw_token = new_token();
    let hash = hash_token(&raw_token);

    conn.execute(
        r#"
        insert into sessions
          (token_hash, access_token, backend_cookies, user_json, created_at, expires_at, token_expires_at)
        values (?, ?, ?, ?, ?, ?, ?)
        "#,
        params![
            hash.as_slice(),
            session.auth.access_token,
            session.backend_cookies,
            user_json(&session.auth.user)?,
            now,
            now + SESSION_TTL_SECS,
            token_expiry(session, now),
        ],
    )
    .map_err(|e| ServerError::DbError(format!("create session failed: {e}")))?;

    Ok(raw_token)
}

pub fn load_session(
    conn: &Connection,
    raw_token: &str,
    now: i64,
) -> Result<Option<SessionRow>, ServerError> {
    let hash = hash_token(raw_token);

    let row = conn
        .query_row(
            r#"
            select id, access_token, backend_cookies, user_json, expires_at, token_expires_at
            from sessions
            where token_hash = ?
              and expires_at > ?
              and revoked_at is null
            "#,
            params![hash.as_slice(), now],
            |row| {
                Ok((
                    row.get::<_, i64>(0)?,
                    row.get::<_, String>(1)?,
                    row.get::<_, Option<String>>(2)?,
                    row.get::<_, String>(3)?,
                    row.get::<_, i64>(4)?,
                    row.get::<_, i64>(5)?,
                ))
            },
        )
        .optional()
        .map_err(|e| ServerError::DbError(format!("session lookup failed: {e}")))?;

    let Some((id, access_token, backend_cookies, user_raw, expires_at, token_expires_at)) = row
    else {
        return Ok(None);
    };

    // A row we can no longer decode is as good as gone.
    let Ok(user) = serde_json::from_str::<AuthUser>(&user_raw) else {
        tracing::warn!(session_id = id, "discarding session with undecodable user");
        revoke_session(conn, id, now)?;
        return Ok(None);
    };

    Ok(Some(SessionRow {
        id,
        access_token,
        backend_cookies,
        user,
        expires_at,
        token_expires_at,
    }))
}

/// Replace the backend tokens after a refresh. Cookies are only replaced when
/// the backend sent new ones.
pub fn update_tokens(
    conn: &Connection,
    id: i64,
    session: &AuthSession,
    now: i64,
) -> Result<(), ServerError> {
    conn.execute(
        r#"
        update sessions
        set access_token = ?,
            backend_cookies = coalesce(?, backend_cookies),
            user_json = ?,
            token_expires_at = ?
        where id = ?
        "#,
        params![
            session.auth.access_token,
            session.backend_cookies,
            user_json(&session.auth.user)?,
            token_expiry(session, now),
            id,
        ],
    )
    .map_err(|e| ServerError::DbError(format!("update session tokens failed: {e}")))?;
    Ok(())
}

pub fn update_user(conn: &Connection, id: i64, user: &AuthUser) -> Result<(), ServerError> {
    conn.execute(
        "update sessions set user_json = ? where id = ?",
        params![user_json(user)?, id],
    )
    .map_err(|e| ServerError::DbError(format!("update session user failed: {e}")))?;
    Ok(())
}

pub fn revoke_session(conn: &Connection, id: i64, now: i64) -> Result<(), ServerError> {
    conn.execute(
        "update sessions set revoked_at = ? where id = ? and revoked_at is null",
        params![now, id],
    )
    .map_err(|e| ServerError::DbError(format!("revoke session failed: {e}")))?;
    Ok(())
}
