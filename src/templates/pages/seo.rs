use crate::domain::market::MARKETS;
use maud::{html, PreEscaped};
use url::Url;

/// Paths listed in the sitemap besides the city pages.
const STATIC_PATHS: &[(&str, &str, &str)] = &[
    ("", "daily", "1.0"),
    ("properties", "daily", "0.9"),
    ("how-it-works", "monthly", "0.6"),
    ("owners", "monthly", "0.7"),
    ("about", "monthly", "0.5"),
    ("contact", "monthly", "0.5"),
    ("terms", "yearly", "0.3"),
    ("privacy", "yearly", "0.3"),
];

fn absolute(site: &Url, path: &str) -> String {
    site.join(path)
        .map(|u| u.to_string())
        .unwrap_or_else(|_| format!("{site}{path}"))
}

pub fn robots_txt(site: &Url) -> String {
    format!(
        "User-agent: *\nAllow: /\nDisallow: /profile\n\nSitemap: {}\n",
        absolute(site, "sitemap.xml")
    )
}

pub fn sitemap_xml(site: &Url) -> String {
    let cities = MARKETS.iter().map(|m| (m.slug, "daily", "0.8"));
    let entries: Vec<(&str, &str, &str)> = STATIC_PATHS.iter().copied().chain(cities).collect();
    let body = html! {
        (PreEscaped(r#"<?xml version="1.0" encoding="UTF-8"?>"#))
        urlset xmlns="http://www.sitemaps.org/schemas/sitemap/0.9" {
            @for (path, freq, priority) in &entries {
                url {
                    loc { (absolute(site, path)) }
                    changefreq { (freq) }
                    priority { (priority) }
                }
            }
        }
    };
    body.into_string()
}
