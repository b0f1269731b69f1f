mod account_tests;
mod inquiry_tests;
mod listing_tests;
mod site_tests;
