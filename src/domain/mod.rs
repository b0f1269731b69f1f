pub mod listing;
pub mod market;
pub mod search;
pub mod visit;
