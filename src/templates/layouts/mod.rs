pub mod auth;
pub mod site;

pub use auth::auth_layout;
pub use site::site_layout;
