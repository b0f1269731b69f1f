use crate::router::serve;
use crate::tests::utils::*;
use scraper::{Html, Selector};

#[test]
fn home_page_shows_empty_state_when_backend_is_down() {
    let t = test_app();

    let resp = serve(get("/"), &t.app);
    assert_eq!(resp.status(), 200);

    let doc = Html::parse_document(&body_string(resp));
    let title = Selector::parse("title").unwrap();
    assert_eq!(
        doc.select(&title).next().unwrap().inner_html(),
        "PropThinks - Find. Move. Live."
    );
    let empty = Selector::parse(".empty-state h3").unwrap();
    assert_eq!(
        doc.select(&empty).next().unwrap().inner_html(),
        "New listings coming soon"
    );
    let counts = Selector::parse(".market-count").unwrap();
    assert!(doc.select(&counts).all(|c| c.inner_html() == "0 properties"));
}

#[test]
fn home_page_lists_featured_and_city_counts() {
    let t = test_app();
    t.server.mock(|when, then| {
        when.method(httpmock::Method::GET).path("/listings/newest").query_param("limit", "4");
        then.status(200).json_body(serde_json::json!([
            listing_json("lst-1", "guntur", 12000.0),
            listing_json("lst-2", "nellore", 9000.0),
        ]));
    });
    t.server.mock(|when, then| {
        when.method(httpmock::Method::GET).path("/listings/count");
        then.status(200).json_body(serde_json::json!({ "total": 7 }));
    });

    let doc = Html::parse_document(&body_string(serve(get("/"), &t.app)));
    let cards = Selector::parse(".property-card").unwrap();
    assert_eq!(doc.select(&cards).count(), 2);
    let counts = Selector::parse(".market-count").unwrap();
    assert!(doc.select(&counts).all(|c| c.inner_html() == "7 properties"));
    let links = Selector::parse(r#"a[href="/properties/lst-1"]"#).unwrap();
    assert!(doc.select(&links).next().is_some());
}

#[test]
fn static_pages_render() {
    let t = test_app();
    let title = Selector::parse("title").unwrap();
    for (path, expected) in [
        ("/about", "About PropThinks | PropThinks"),
        ("/how-it-works", "How It Works | PropThinks"),
        ("/terms", "Terms of Service | PropThinks"),
        ("/privacy", "Privacy Policy | PropThinks"),
    ] {
        let resp = serve(get(path), &t.app);
        assert_eq!(resp.status(), 200, "{path}");
        let doc = Html::parse_document(&body_string(resp));
        assert_eq!(doc.select(&title).next().unwrap().inner_html(), expected);
    }
}

#[test]
fn unknown_paths_render_the_404_page() {
    let t = test_app();
    for path in ["/no/such/page", "/atlantis"] {
        let resp = serve(get(path), &t.app);
        assert_eq!(resp.status(), 404, "{path}");
        assert!(body_string(resp).contains("Page not found"));
    }
}

#[test]
fn robots_and_sitemap_use_the_site_url() {
    let t = test_app();

    let resp = serve(get("/robots.txt"), &t.app);
    assert_eq!(resp.status(), 200);
    assert!(resp.headers()["content-type"].to_str().unwrap().starts_with("text/plain"));
    assert!(body_string(resp).contains("Sitemap: https://www.propthinks.com/sitemap.xml"));

    let resp = serve(get("/sitemap.xml"), &t.app);
    assert_eq!(resp.headers()["content-type"], "text/xml");
    let xml = body_string(resp);
    assert!(xml.contains("<loc>https://www.propthinks.com/guntur</loc>"));
    assert!(xml.contains("<loc>https://www.propthinks.com/properties</loc>"));
}

#[test]
fn stylesheet_is_served_with_caching() {
    let t = test_app();
    let resp = serve(get("/static/main.css"), &t.app);
    assert_eq!(resp.status(), 200);
    assert!(resp.headers()["content-type"].to_str().unwrap().starts_with("text/css"));
    assert!(resp.headers().contains_key("cache-control"));
}

#[test]
fn posts_beyond_the_limit_are_rejected() {
    let t = test_app_with(&[("RATE_LIMIT_PER_CLIENT", "2")]);

    for _ in 0..2 {
        let resp = serve(post_form("/contact", "name=x", None), &t.app);
        assert_eq!(resp.status(), 200);
    }
    let resp = serve(post_form("/contact", "name=x", None), &t.app);
    assert_eq!(resp.status(), 429);
    assert!(body_string(resp).contains("Slow down"));

    // Reads are never limited.
    assert_eq!(serve(get("/contact"), &t.app).status(), 200);
}
