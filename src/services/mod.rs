//! Business logic layer
//!
//! The builder turns submitted entries into line items; the session owns the
//! list those items are appended to.

pub mod builder;
pub mod session;

pub use builder::{build_line_item, parse_quantity, parse_unit_price};
pub use session::EstimateSession;
