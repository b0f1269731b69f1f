pub mod auth;
pub mod city;
pub mod error;
pub mod home;
pub mod info;
pub mod inquiries;
pub mod profile;
pub mod properties;
pub mod property_detail;
pub mod seo;

pub use error::error_page;
