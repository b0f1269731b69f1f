// src/handlers/site.rs
//
// Static content pages, SEO files and the stylesheet.

use maud::Markup;

use crate::api::models::AuthUser;
use crate::app::App;
use crate::handlers::Ctx;
use crate::responses::{asset_response, html_response, ResultResp};
use crate::templates::pages::info::{about_page, how_it_works_page, privacy_page, terms_page};
use crate::templates::pages::seo::{robots_txt, sitemap_xml};

const MAIN_CSS: &str = include_str!("../../static/main.css");

#[derive(Debug, Clone, Copy)]
pub enum InfoPage {
    About,
    HowItWorks,
    Terms,
    Privacy,
}

impl InfoPage {
    fn render(self, user: Option<&AuthUser>) -> Markup {
        match self {
            InfoPage::About => about_page(user),
            InfoPage::HowItWorks => how_it_works_page(user),
            InfoPage::Terms => terms_page(user),
            InfoPage::Privacy => privacy_page(user),
        }
    }
}

pub fn info(ctx: &Ctx, app: &App, page: InfoPage) -> ResultResp {
    let current = ctx.current_user(app)?;
    html_response(page.render(current.as_ref().map(|c| &c.user)))
}

pub fn robots(app: &App) -> ResultResp {
    asset_response(mime::TEXT_PLAIN_UTF_8, robots_txt(&app.config.site_url))
}

pub fn sitemap(app: &App) -> ResultResp {
    asset_response(mime::TEXT_XML, sitemap_xml(&app.config.site_url))
}

pub fn stylesheet() -> ResultResp {
    asset_response(mime::TEXT_CSS_UTF_8, MAIN_CSS)
}
