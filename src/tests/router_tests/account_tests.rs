use crate::router::serve;
use crate::tests::utils::*;
use httpmock::Method::{GET, PATCH, POST};
use scraper::{Html, Selector};
use serde_json::json;

#[test]
fn login_page_carries_the_return_path() {
    let t = test_app();
    let resp = serve(get("/login?return=%2Fproperties%2Fabc"), &t.app);
    assert_eq!(resp.status(), 200);

    let doc = Html::parse_document(&body_string(resp));
    let hidden = Selector::parse(r#"input[name="return"]"#).unwrap();
    assert_eq!(
        doc.select(&hidden).next().unwrap().value().attr("value"),
        Some("/properties/abc")
    );
}

#[test]
fn successful_login_sets_session_cookie_and_redirects() {
    let t = test_app();
    let login = t.server.mock(|when, then| {
        when.method(POST)
            .path("/auth/login")
            .json_body(json!({ "email": "ravi@example.com", "password": "secret123" }));
        then.status(200).json_body(auth_json("access-1", "tenant"));
    });

    let resp = serve(
        post_form(
            "/login",
            "email=Ravi%40Example.com&password=secret123&return=%2Fproperties%2Fabc",
            None,
        ),
        &t.app,
    );
    login.assert();
    assert_eq!(resp.status(), 303);
    assert_eq!(location(&resp), "/properties/abc");

    let cookie = set_cookies(&resp)
        .into_iter()
        .find(|c| c.starts_with("pt_session="))
        .expect("session cookie");
    assert!(cookie.contains("HttpOnly"));
    assert!(cookie.contains("SameSite=Lax"));
    assert!(cookie.contains("Max-Age=604800"));
    assert!(!cookie.contains("Secure"));
}

#[test]
fn passwords_reach_the_backend_untrimmed() {
    let t = test_app();
    let login = t.server.mock(|when, then| {
        when.method(POST)
            .path("/auth/login")
            .json_body(json!({ "email": "ravi@example.com", "password": " secret123 " }));
        then.status(200).json_body(auth_json("access-1", "tenant"));
    });

    let resp = serve(
        post_form("/login", "email=ravi%40example.com&password=+secret123+", None),
        &t.app,
    );
    login.assert();
    assert_eq!(resp.status(), 303);
}

fn session_row(t: &TestApp) -> (String, Option<String>, Option<i64>) {
    t.app
        .db
        .with_conn(|conn| {
            Ok(conn.query_row(
                "select access_token, backend_cookies, revoked_at from sessions
                 order by id desc limit 1",
                [],
                |r| Ok((r.get(0)?, r.get(1)?, r.get(2)?)),
            )?)
        })
        .unwrap()
}

fn short_lived_sign_in(t: &TestApp) -> String {
    let mut auth = auth_json("access-1", "tenant");
    auth["expires_in"] = json!(1);
    t.server.mock(move |when, then| {
        when.method(POST).path("/auth/login");
        then.status(200)
            .header("set-cookie", "refresh_token=r-1; HttpOnly; Path=/")
            .json_body(auth);
    });
    let resp = serve(
        post_form("/login", "email=ravi%40example.com&password=secret123", None),
        &t.app,
    );
    cookie_pair(&resp, "pt_session").expect("session cookie")
}

#[test]
fn expired_backend_token_is_refreshed() {
    let t = test_app();
    let cookie = short_lived_sign_in(&t);
    let refresh = t.server.mock(|when, then| {
        when.method(POST)
            .path("/auth/refresh")
            .header("cookie", "refresh_token=r-1");
        then.status(200)
            .header("set-cookie", "refresh_token=r-2; HttpOnly; Path=/")
            .json_body(auth_json("access-2", "tenant"));
    });
    let visits = t.server.mock(|when, then| {
        when.method(GET)
            .path("/property-visits")
            .header("authorization", "Bearer access-2");
        then.status(200).json_body(json!([]));
    });

    let resp = serve(get_with_cookie("/profile", &cookie), &t.app);
    assert_eq!(resp.status(), 200);
    assert!(body_string(resp).contains("Ravi Kumar"));
    refresh.assert();
    visits.assert();

    let (access, cookies, revoked) = session_row(&t);
    assert_eq!(access, "access-2");
    assert_eq!(cookies.as_deref(), Some("refresh_token=r-2"));
    assert_eq!(revoked, None);
}

#[test]
fn failed_refresh_ends_the_session() {
    let t = test_app();
    let cookie = short_lived_sign_in(&t);
    let refresh = t.server.mock(|when, then| {
        when.method(POST).path("/auth/refresh");
        then.status(401).json_body(json!({ "detail": "Refresh token expired" }));
    });

    let resp = serve(get_with_cookie("/profile", &cookie), &t.app);
    assert_eq!(resp.status(), 303);
    assert_eq!(location(&resp), "/login?return=%2Fprofile");
    refresh.assert();
    assert!(session_row(&t).2.is_some());
}

#[test]
fn offsite_return_paths_are_ignored() {
    let t = test_app();
    t.server.mock(|when, then| {
        when.method(POST).path("/auth/login");
        then.status(200).json_body(auth_json("access-1", "tenant"));
    });

    let resp = serve(
        post_form(
            "/login",
            "email=ravi%40example.com&password=pw&return=%2F%2Fevil.example",
            None,
        ),
        &t.app,
    );
    assert_eq!(location(&resp), "/");
}

#[test]
fn rejected_login_shows_backend_message() {
    let t = test_app();
    t.server.mock(|when, then| {
        when.method(POST).path("/auth/login");
        then.status(401).json_body(json!({ "detail": "Incorrect email or password" }));
    });

    let resp = serve(
        post_form("/login", "email=ravi%40example.com&password=hunter2xyz", None),
        &t.app,
    );
    assert_eq!(resp.status(), 200);
    assert!(set_cookies(&resp).is_empty());
    let body = body_string(resp);
    assert!(body.contains("Incorrect email or password"));
    // Passwords are never echoed back.
    assert!(!body.contains("hunter2xyz"));
}

#[test]
fn login_validation_happens_before_the_backend() {
    let t = test_app();
    let login = t.server.mock(|when, then| {
        when.method(POST).path("/auth/login");
        then.status(200).json_body(auth_json("access-1", "tenant"));
    });

    let body = body_string(serve(post_form("/login", "email=nope&password=", None), &t.app));
    assert!(body.contains("Password is required"));
    assert_eq!(login.hits(), 0);
}

#[test]
fn profile_requires_a_session() {
    let t = test_app();
    let resp = serve(get("/profile"), &t.app);
    assert_eq!(resp.status(), 303);
    assert_eq!(location(&resp), "/login?return=%2Fprofile");

    let resp = serve(get_with_cookie("/profile", "pt_session=not-a-real-token"), &t.app);
    assert_eq!(resp.status(), 303);
}

fn mock_visits(t: &TestApp) {
    t.server.mock(|when, then| {
        when.method(GET)
            .path("/property-visits")
            .header("authorization", "Bearer access-1");
        then.status(200).json_body(json!([
            {
                "id": 1, "public_id": "visit-aaaa1111", "property_id": 10,
                "property_public_id": "prop-1234567890",
                "requested_date": "2030-03-14", "requested_time_slot": "morning (9 AM - 12 PM)",
                "status": "scheduled"
            },
            {
                "id": 2, "public_id": "visit-bbbb2222", "property_id": 11,
                "property_public_id": "prop-abcdefghij",
                "listing_public_id": "lst-77",
                "requested_date": "2030-02-01", "requested_time_slot": "evening (4 PM - 7 PM)",
                "status": "completed"
            }
        ]));
    });
}

#[test]
fn profile_shows_account_and_visits() {
    let t = test_app();
    let cookie = sign_in(&t);
    mock_visits(&t);

    let resp = serve(get_with_cookie("/profile", &cookie), &t.app);
    assert_eq!(resp.status(), 200);
    let body = body_string(resp);
    let doc = Html::parse_document(&body);

    assert!(body.contains("Ravi Kumar"));
    assert!(body.contains("Active Visits: 1/2"));
    let cancel = Selector::parse(r#"form[action="/profile/visits/visit-aaaa1111/cancel"]"#).unwrap();
    assert_eq!(doc.select(&cancel).count(), 1);
    let completed_cancel =
        Selector::parse(r#"form[action="/profile/visits/visit-bbbb2222/cancel"]"#).unwrap();
    assert_eq!(doc.select(&completed_cancel).count(), 0);
    assert!(body.contains("tenant/apply?listing=lst-77"));
}

#[test]
fn profile_survives_visit_history_outage() {
    let t = test_app();
    let cookie = sign_in(&t);
    t.server.mock(|when, then| {
        when.method(GET).path("/property-visits");
        then.status(503);
    });

    let resp = serve(get_with_cookie("/profile", &cookie), &t.app);
    assert_eq!(resp.status(), 200);
    assert!(body_string(resp).contains("Active Visits: 0/2"));
}

#[test]
fn profile_update_stores_new_details() {
    let t = test_app();
    let cookie = sign_in(&t);
    mock_visits(&t);
    let update = t.server.mock(|when, then| {
        when.method(PATCH)
            .path("/users/me")
            .json_body(json!({ "full_name": "Ravi K", "phone": "9123456780" }));
        then.status(200).json_body(json!({
            "id": 42, "email": "ravi@example.com", "role": "tenant",
            "full_name": "Ravi K", "phone": "9123456780"
        }));
    });

    let resp = serve(
        post_form("/profile", "full_name=Ravi+K&phone=9123456780", Some(&cookie)),
        &t.app,
    );
    update.assert();
    assert_eq!(resp.status(), 303);
    assert_eq!(location(&resp), "/profile?flash=updated");

    let body = body_string(serve(get_with_cookie("/profile?flash=updated", &cookie), &t.app));
    assert!(body.contains("Profile updated successfully!"));
    assert!(body.contains("Ravi K"));
}

#[test]
fn failed_profile_update_returns_to_the_editor() {
    let t = test_app();
    let cookie = sign_in(&t);
    t.server.mock(|when, then| {
        when.method(PATCH).path("/users/me");
        then.status(500);
    });

    let resp = serve(
        post_form("/profile", "full_name=Ravi+K&phone=", Some(&cookie)),
        &t.app,
    );
    assert_eq!(location(&resp), "/profile?edit=1&flash=update-failed");
}

#[test]
fn cancel_requires_a_reason() {
    let t = test_app();
    let cookie = sign_in(&t);
    let cancel = t.server.mock(|when, then| {
        when.method(PATCH).path("/property-visits/visit-aaaa1111/cancel");
        then.status(200).json_body(json!({}));
    });

    let resp = serve(
        post_form("/profile/visits/visit-aaaa1111/cancel", "reason=", Some(&cookie)),
        &t.app,
    );
    assert_eq!(location(&resp), "/profile?flash=reason-required");
    assert_eq!(cancel.hits(), 0);

    let resp = serve(
        post_form(
            "/profile/visits/visit-aaaa1111/cancel",
            "reason=Found+another+place",
            Some(&cookie),
        ),
        &t.app,
    );
    cancel.assert();
    assert_eq!(location(&resp), "/profile?flash=cancelled");
}

#[test]
fn logout_clears_the_session() {
    let t = test_app();
    let cookie = sign_in(&t);
    let logout = t.server.mock(|when, then| {
        when.method(POST)
            .path("/auth/logout")
            .header("cookie", "refresh_token=r-1");
        then.status(200).json_body(json!({ "message": "ok" }));
    });

    let resp = serve(post_form("/logout", "", Some(&cookie)), &t.app);
    logout.assert();
    assert_eq!(resp.status(), 303);
    assert_eq!(location(&resp), "/");
    assert!(set_cookies(&resp).iter().any(|c| c.starts_with("pt_session=;")));

    assert_eq!(serve(get_with_cookie("/profile", &cookie), &t.app).status(), 303);
}

const SIGNUP_BODY: &str = "role=tenant&first_name=Ravi&last_name=Kumar&email=ravi%40example.com\
&phone=9876543210&city=guntur&password=supersecret&terms=on";

fn start_signup(t: &TestApp) -> String {
    t.server.mock(|when, then| {
        when.method(POST)
            .path("/verification/send")
            .json_body_partial(r#"{"identifier": "ravi@example.com", "purpose": "signup"}"#);
        then.status(200).json_body(json!({
            "success": true, "message": "sent", "identifier": "ravi@example.com"
        }));
    });
    let resp = serve(post_form("/signup", SIGNUP_BODY, None), &t.app);
    assert_eq!(resp.status(), 200);
    let draft = cookie_pair(&resp, "pt_signup").expect("draft cookie");
    assert!(body_string(resp).contains("Verify your email"));
    draft
}

#[test]
fn signup_sends_otp_then_creates_the_account() {
    let t = test_app();
    let draft = start_signup(&t);

    let signup = t.server.mock(|when, then| {
        when.method(POST)
            .path("/auth/signup")
            .json_body_partial(r#"{"email": "ravi@example.com", "otp_code": "123456", "full_name": "Ravi Kumar"}"#);
        then.status(201).json_body(auth_json("access-new", "tenant"));
    });

    let resp = serve(post_form("/signup/verify", "otp_code=123456", Some(&draft)), &t.app);
    signup.assert();
    assert_eq!(resp.status(), 200);
    let session = cookie_pair(&resp, "pt_session").expect("session cookie");
    assert!(set_cookies(&resp).iter().any(|c| c.starts_with("pt_signup=;")));
    assert!(body_string(resp).contains("Account Created!"));

    let drafts: i64 = t
        .app
        .db
        .with_conn(|conn| Ok(conn.query_row("select count(*) from signup_drafts", [], |r| r.get(0))?))
        .unwrap();
    assert_eq!(drafts, 0);

    // The draft is single use.
    let resp = serve(post_form("/signup/verify", "otp_code=123456", Some(&draft)), &t.app);
    assert!(body_string(resp).contains("Your signup session expired"));
    assert_eq!(signup.hits(), 1);

    t.server.mock(|when, then| {
        when.method(GET).path("/property-visits");
        then.status(200).json_body(json!([]));
    });
    assert_eq!(serve(get_with_cookie("/profile", &session), &t.app).status(), 200);
}

#[test]
fn wrong_otp_keeps_the_draft() {
    let t = test_app();
    let draft = start_signup(&t);
    let signup = t.server.mock(|when, then| {
        when.method(POST).path("/auth/signup");
        then.status(400).json_body(json!({ "detail": "Invalid or expired code" }));
    });

    let body = body_string(serve(post_form("/signup/verify", "otp_code=000000", Some(&draft)), &t.app));
    assert!(body.contains("Invalid or expired code"));

    let body = body_string(serve(post_form("/signup/verify", "otp_code=12", Some(&draft)), &t.app));
    assert!(body.contains("Enter the 6-digit code"));
    assert_eq!(signup.hits(), 1);

    let resp = serve(get_with_cookie("/signup/verify", &draft), &t.app);
    assert_eq!(resp.status(), 200);
    assert!(body_string(resp).contains("ravi@example.com"));
}

#[test]
fn resend_issues_a_new_code() {
    let t = test_app();
    let draft = start_signup(&t);

    let body = body_string(serve(post_form("/signup/resend", "", Some(&draft)), &t.app));
    assert!(body.contains("A new code is on its way"));
}

#[test]
fn verify_without_a_draft_starts_over() {
    let t = test_app();
    let resp = serve(get("/signup/verify"), &t.app);
    assert_eq!(resp.status(), 303);
    assert_eq!(location(&resp), "/signup");

    let body = body_string(serve(post_form("/signup/verify", "otp_code=123456", None), &t.app));
    assert!(body.contains("Your signup session expired"));
}

#[test]
fn invalid_signup_details_are_reported() {
    let t = test_app();
    let otp = t.server.mock(|when, then| {
        when.method(POST).path("/verification/send");
        then.status(200).json_body(json!({ "success": true }));
    });

    let resp = serve(
        post_form("/signup", "role=tenant&first_name=R&email=bad&password=short", None),
        &t.app,
    );
    assert_eq!(resp.status(), 200);
    assert!(cookie_pair(&resp, "pt_signup").is_none());
    let body = body_string(resp);
    assert!(body.contains("Password must be at least 8 characters"));
    assert!(body.contains("Please select a city"));
    assert_eq!(otp.hits(), 0);
}
