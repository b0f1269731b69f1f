pub mod errors;
pub mod html;

pub use errors::{error_response, ResultResp};

pub use html::{
    asset_response, html_response, html_status, redirect, redirect_with_cookies, with_cookies,
};
