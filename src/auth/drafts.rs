// src/auth/drafts.rs
//
// Signup details held between the details form and the OTP step.

use crate::auth::token::{hash_token, new_token};
use crate::db::connection::purge_stale;
use crate::errors::ServerError;
use crate::forms::auth::SignupDraft;
use rusqlite::{params, Connection, OptionalExtension};

pub const DRAFT_TTL_SECS: i64 = 15 * 60;

pub fn create_draft(conn: &Connection, draft: &SignupDraft, now: i64) -> Result<String, ServerError> {
    purge_stale(conn, now)?;
    let raw_token = new_token();
    let hash = hash_token(&raw_token);
    let payload = serde_json::to_string(draft)
        .map_err(|e| ServerError::DbError(format!("encode draft failed: {e}")))?;

    conn.execute(
        "insert into signup_drafts (token_hash, payload_json, created_at, expires_at) values (?, ?, ?, ?)",
        params![hash.as_slice(), payload, now, now + DRAFT_TTL_SECS],
    )
    .map_err(|e| ServerError::DbError(format!("insert signup draft failed: {e}")))?;

    Ok(raw_token)
}

/// Unexpired, unused draft for this token.
pub fn load_draft(
    conn: &Connection,
    raw_token: &str,
    now: i64,
) -> Result<Option<SignupDraft>, ServerError> {
    let hash = hash_token(raw_token);
    let payload: Option<String> = conn
        .query_row(
            "select payload_json from signup_drafts
             where token_hash = ? and expires_at > ? and used_at is null",
            params![hash.as_slice(), now],
            |r| r.get(0),
        )
        .optional()
        .map_err(|e| ServerError::DbError(format!("select signup draft failed: {e}")))?;

    Ok(payload.and_then(|p| serde_json::from_str(&p).ok()))
}

/// Take a live draft for one signup attempt. Only one caller gets it until
/// `release_draft` hands it back.
pub fn claim_draft(
    conn: &Connection,
    raw_token: &str,
    now: i64,
) -> Result<Option<SignupDraft>, ServerError> {
    let hash = hash_token(raw_token);
    let changed = conn
        .execute(
            "update signup_drafts set used_at = ?
             where token_hash = ? and expires_at > ? and used_at is null",
            params![now, hash.as_slice(), now],
        )
        .map_err(|e| ServerError::DbError(format!("claim signup draft failed: {e}")))?;
    if changed != 1 {
        return Ok(None);
    }

    let payload: String = conn
        .query_row(
            "select payload_json from signup_drafts where token_hash = ?",
            params![hash.as_slice()],
            |r| r.get(0),
        )
        .map_err(|e| ServerError::DbError(format!("select claimed draft failed: {e}")))?;
    Ok(serde_json::from_str(&payload).ok())
}

/// Make a claimed draft usable again after a rejected attempt.
pub fn release_draft(conn: &Connection, raw_token: &str) -> Result<(), ServerError> {
    conn.execute(
        "update signup_drafts set used_at = null where token_hash = ?",
        params![hash_token(raw_token).as_slice()],
    )
    .map_err(|e| ServerError::DbError(format!("release signup draft failed: {e}")))?;
    Ok(())
}

/// Drop a completed draft, password included.
pub fn delete_draft(conn: &Connection, raw_token: &str) -> Result<(), ServerError> {
    conn.execute(
        "delete from signup_drafts where token_hash = ?",
        params![hash_token(raw_token).as_slice()],
    )
    .map_err(|e| ServerError::DbError(format!("delete signup draft failed: {e}")))?;
    Ok(())
}
