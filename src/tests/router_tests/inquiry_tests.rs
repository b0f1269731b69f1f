use crate::router::serve;
use crate::tests::utils::*;
use httpmock::Method::POST;
use scraper::{Html, Selector};
use serde_json::json;

const OWNER_BODY: &str = "name=Lakshmi+Devi&phone=9876543210&email=lakshmi%40example.com\
&property_type=apartment&city=Guntur&message=Two+flats+near+Lakshmipuram";

#[test]
fn owners_page_shows_the_form() {
    let t = test_app();
    let resp = serve(get("/owners"), &t.app);
    assert_eq!(resp.status(), 200);

    let doc = Html::parse_document(&body_string(resp));
    let form = Selector::parse(r#"form[action="/owners"] select[name="property_type"]"#).unwrap();
    assert_eq!(doc.select(&form).count(), 1);
}

#[test]
fn owner_inquiry_is_forwarded_and_confirmed() {
    let t = test_app();
    let submit = t.server.mock(|when, then| {
        when.method(POST)
            .path("/public/owner-inquiries")
            .json_body(json!({
                "name": "Lakshmi Devi",
                "phone": "9876543210",
                "email": "lakshmi@example.com",
                "property_type": "apartment",
                "city": "Guntur",
                "message": "Two flats near Lakshmipuram"
            }));
        then.status(201).json_body(json!({
            "success": true, "message": "ok", "inquiry_id": "inq-1"
        }));
    });

    let resp = serve(post_form("/owners", OWNER_BODY, None), &t.app);
    submit.assert();
    assert_eq!(resp.status(), 200);
    let body = body_string(resp);
    assert!(body.contains("Inquiry submitted!"));
    assert!(!body.contains(r#"action="/owners""#));
}

#[test]
fn owner_inquiry_failure_keeps_what_was_typed() {
    let t = test_app();
    t.server.mock(|when, then| {
        when.method(POST).path("/public/owner-inquiries");
        then.status(500);
    });

    let body = body_string(serve(post_form("/owners", OWNER_BODY, None), &t.app));
    assert!(body.contains("Failed to submit inquiry. Please try again."));
    assert!(body.contains(r#"value="Lakshmi Devi""#));
}

#[test]
fn owner_inquiry_validation_errors_skip_the_backend() {
    let t = test_app();
    let submit = t.server.mock(|when, then| {
        when.method(POST).path("/public/owner-inquiries");
        then.status(201).json_body(json!({ "success": true }));
    });

    let body = body_string(serve(
        post_form("/owners", "name=L&phone=123&property_type=castle", None),
        &t.app,
    ));
    assert!(body.contains("Invalid Indian phone number"));
    assert!(body.contains("Please select a property type"));
    assert_eq!(submit.hits(), 0);
}

#[test]
fn contact_by_email_requires_an_email() {
    let t = test_app();
    let body = body_string(serve(
        post_form(
            "/contact",
            "name=Ravi&contact_method=email&subject=rental&message=Looking+for+a+2BHK+in+Nellore",
            None,
        ),
        &t.app,
    ));
    assert!(body.contains("Email is required when we should reply by email"));
}

#[test]
fn contact_message_is_sent() {
    let t = test_app();
    let submit = t.server.mock(|when, then| {
        when.method(POST)
            .path("/public/contact-inquiries")
            .json_body_partial(r#"{"contact_method": "whatsapp", "subject": "rental", "phone": "9876543210"}"#);
        then.status(201).json_body(json!({ "public_id": "c-1", "message": "ok" }));
    });

    let resp = serve(
        post_form(
            "/contact",
            "name=Ravi&phone=9876543210&contact_method=whatsapp&subject=rental\
&message=Looking+for+a+2BHK+in+Nellore",
            None,
        ),
        &t.app,
    );
    submit.assert();
    assert!(body_string(resp).contains("Message Sent!"));
}

#[test]
fn contact_failure_shows_backend_detail() {
    let t = test_app();
    t.server.mock(|when, then| {
        when.method(POST).path("/public/contact-inquiries");
        then.status(422).json_body(json!({ "detail": [{ "msg": "message too short" }] }));
    });

    let body = body_string(serve(
        post_form(
            "/contact",
            "name=Ravi&phone=9876543210&contact_method=phone&subject=support\
&message=My+visit+was+never+confirmed",
            None,
        ),
        &t.app,
    ));
    assert!(body.contains("message too short"));
}
