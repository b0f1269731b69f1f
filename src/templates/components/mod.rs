pub mod alerts;
pub mod forms;
pub mod property_card;
pub mod search;

pub use alerts::{alert, maybe_alert, AlertKind};
pub use property_card::{empty_state, property_card, property_grid};
pub use search::{filter_form, search_bar};
