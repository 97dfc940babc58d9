//! TUI screen implementations, one per tab.

pub mod owner_details;
pub mod property_details;

pub use owner_details::{OwnerDetailsState, draw_owner_details};
pub use property_details::{PropertyDetailsState, draw_property_details};
