use crate::router::serve;
use crate::tests::utils::*;
use httpmock::Method::{GET, POST};
use scraper::{Html, Selector};
use serde_json::json;

fn select_count(body: &str, selector: &str) -> usize {
    let doc = Html::parse_document(body);
    let sel = Selector::parse(selector).unwrap();
    doc.select(&sel).count()
}

#[test]
fn city_page_lists_homes_for_that_city() {
    let t = test_app();
    let search = t.server.mock(|when, then| {
        when.method(GET)
            .path("/listings/search")
            .query_param("city", "guntur")
            .query_param("limit", "12");
        then.status(200).json_body(json!([
            listing_json("g-1", "guntur", 15000.0),
            listing_json("g-2", "guntur", 18000.0),
            listing_json("g-3", "guntur", 21000.0),
        ]));
    });
    t.server.mock(|when, then| {
        when.method(GET).path("/listings/count").query_param("city", "guntur");
        then.status(200).json_body(json!({ "total": 31 }));
    });

    let resp = serve(get("/guntur"), &t.app);
    assert_eq!(resp.status(), 200);
    let body = body_string(resp);
    search.assert();
    assert_eq!(select_count(&body, ".property-card"), 3);
    assert!(body.contains("Homes for rent in Guntur"));
    assert!(body.contains("31"));
}

#[test]
fn city_slugs_are_case_insensitive() {
    let t = test_app();
    assert_eq!(serve(get("/Nellore"), &t.app).status(), 200);
}

#[test]
fn properties_forward_filters_and_paging() {
    let t = test_app();
    let search = t.server.mock(|when, then| {
        when.method(GET)
            .path("/listings/search")
            .query_param("city", "vijayawada")
            .query_param("bedrooms", "2")
            .query_param("min_rent", "10000")
            .query_param("max_rent", "20000")
            .query_param("skip", "24")
            .query_param("limit", "24");
        then.status(200)
            .json_body(json!([listing_json("v-1", "vijayawada", 14000.0)]));
    });
    let count = t.server.mock(|when, then| {
        when.method(GET)
            .path("/listings/count")
            .query_param("city", "vijayawada")
            .query_param("bedrooms", "2");
        then.status(200).json_body(json!({ "total": 49 }));
    });

    let resp = serve(
        get("/properties?city=vijayawada&bhk=2&budget=10000-20000&page=2"),
        &t.app,
    );
    assert_eq!(resp.status(), 200);
    let body = body_string(resp);
    search.assert();
    count.assert();

    assert!(body.contains("49 properties found"));
    assert!(body.contains("Page 2 of 3"));
    assert_eq!(select_count(&body, ".property-card"), 1);
    assert_eq!(select_count(&body, r#"select[name="bhk"] option[value="2"][selected]"#), 1);
}

#[test]
fn oversized_page_numbers_show_the_first_page() {
    let t = test_app();
    let search = t.server.mock(|when, then| {
        when.method(GET)
            .path("/listings/search")
            .query_param("skip", "0")
            .query_param("limit", "24");
        then.status(200)
            .json_body(json!([listing_json("p-1", "guntur", 12000.0)]));
    });
    t.server.mock(|when, then| {
        when.method(GET).path("/listings/count");
        then.status(200).json_body(json!({ "total": 1 }));
    });

    let resp = serve(get("/properties?page=4294967295"), &t.app);
    assert_eq!(resp.status(), 200);
    search.assert();
    assert_eq!(select_count(&body_string(resp), ".property-card"), 1);
}

#[test]
fn properties_fall_back_when_count_fails() {
    let t = test_app();
    t.server.mock(|when, then| {
        when.method(GET).path("/listings/search");
        then.status(200).json_body(json!([
            listing_json("a", "nellore", 8000.0),
            listing_json("b", "nellore", 9000.0),
        ]));
    });
    t.server.mock(|when, then| {
        when.method(GET).path("/listings/count");
        then.status(500).json_body(json!({ "detail": "boom" }));
    });

    let body = body_string(serve(get("/properties"), &t.app));
    assert!(body.contains("2 properties found"));
}

#[test]
fn properties_with_filters_and_no_results_offer_clearing() {
    let t = test_app();
    t.server.mock(|when, then| {
        when.method(GET).path("/listings/search");
        then.status(200).json_body(json!([]));
    });

    let body = body_string(serve(get("/properties?bhk=5"), &t.app));
    assert!(body.contains("No properties match your filters"));
}

#[test]
fn missing_listing_renders_404() {
    let t = test_app();
    t.server.mock(|when, then| {
        when.method(GET).path("/listings/gone");
        then.status(404).json_body(json!({ "detail": "Listing not found" }));
    });

    let resp = serve(get("/properties/gone"), &t.app);
    assert_eq!(resp.status(), 404);
    assert!(body_string(resp).contains("Page not found"));
}

#[test]
fn detail_page_for_guests_links_to_login() {
    let t = test_app();
    t.server.mock(|when, then| {
        when.method(GET).path("/listings/lst-9");
        then.status(200).json_body(listing_json("lst-9", "guntur", 16500.0));
    });
    t.server.mock(|when, then| {
        when.method(GET).path("/listings/search").query_param("city", "guntur");
        then.status(200).json_body(json!([
            listing_json("lst-9", "guntur", 16500.0),
            listing_json("lst-10", "guntur", 17000.0),
        ]));
    });

    let resp = serve(get("/properties/lst-9"), &t.app);
    assert_eq!(resp.status(), 200);
    let body = body_string(resp);

    assert!(body.contains("Sunny 2BHK lst-9"));
    assert_eq!(select_count(&body, r#"a[href="/login?return=/properties/lst-9"]"#), 1);
    assert_eq!(select_count(&body, r#"form[action="/properties/lst-9/visit"]"#), 0);
    // The listing itself is not among the similar homes.
    assert_eq!(select_count(&body, r#"a[href="/properties/lst-10"]"#), 1);
}

#[test]
fn scheduling_a_visit_while_signed_out_redirects_to_login() {
    let t = test_app();
    let resp = serve(
        post_form("/properties/lst-9/visit", "requested_date=2030-01-01", None),
        &t.app,
    );
    assert_eq!(resp.status(), 303);
    assert_eq!(location(&resp), "/login?return=%2Fproperties%2Flst-9");
}

fn mock_listing(t: &TestApp) {
    t.server.mock(|when, then| {
        when.method(GET).path("/listings/lst-9");
        then.status(200).json_body(listing_json("lst-9", "guntur", 16500.0));
    });
}

fn visit_body() -> String {
    let date = (chrono::Utc::now() + chrono::Duration::days(3))
        .format("%Y-%m-%d")
        .to_string();
    format!("requested_date={date}&time_slot=morning+%289+AM+-+12+PM%29&phone=9876543210&notes=")
}

#[test]
fn signed_in_visitor_can_request_a_visit() {
    let t = test_app();
    let cookie = sign_in(&t);
    mock_listing(&t);
    let create = t.server.mock(|when, then| {
        when.method(POST)
            .path("/property-visits")
            .header("authorization", "Bearer access-1")
            .json_body_partial(r#"{"listing_id": 1, "visit_type": "rental", "visitor_phone": "9876543210"}"#);
        then.status(201).json_body(json!({
            "id": 5,
            "public_id": "visit-5",
            "property_id": 10,
            "visit_type": "rental",
            "requested_date": "2030-01-01",
            "requested_time_slot": "morning (9 AM - 12 PM)",
            "status": "requested"
        }));
    });

    let resp = serve(post_form("/properties/lst-9/visit", &visit_body(), Some(&cookie)), &t.app);
    assert_eq!(resp.status(), 200);
    create.assert();
    assert!(body_string(resp).contains("Visit request submitted!"));
}

#[test]
fn invalid_visit_form_is_rerendered_with_errors() {
    let t = test_app();
    let cookie = sign_in(&t);
    mock_listing(&t);

    let resp = serve(
        post_form("/properties/lst-9/visit", "requested_date=2001-01-01&phone=12", Some(&cookie)),
        &t.app,
    );
    assert_eq!(resp.status(), 200);
    let body = body_string(resp);
    assert!(body.contains("Please pick today or a later date"));
    assert!(body.contains("Please choose a time slot"));
    assert_eq!(select_count(&body, r#"form[action="/properties/lst-9/visit"]"#), 1);
}

#[test]
fn rejected_backend_token_ends_the_session() {
    let t = test_app();
    let cookie = sign_in(&t);
    mock_listing(&t);
    t.server.mock(|when, then| {
        when.method(POST).path("/property-visits");
        then.status(401).json_body(json!({ "detail": "Token expired" }));
    });

    let resp = serve(post_form("/properties/lst-9/visit", &visit_body(), Some(&cookie)), &t.app);
    assert_eq!(resp.status(), 303);
    assert_eq!(location(&resp), "/login?return=%2Fproperties%2Flst-9");
    assert!(set_cookies(&resp).iter().any(|c| c.starts_with("pt_session=;")));

    // The old cookie no longer resolves to a user.
    let resp = serve(get_with_cookie("/profile", &cookie), &t.app);
    assert_eq!(resp.status(), 303);
}
