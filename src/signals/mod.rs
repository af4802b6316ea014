//! Signal derivation: rule table, aggregation, sector rotation and the
//! engine entry points.

pub mod aggregation;
pub mod categories;
pub mod engine;
pub mod overview;
pub mod rules;
pub mod sector;

pub use aggregation::*;
pub use categories::*;
pub use engine::*;
pub use overview::*;
pub use rules::*;
pub use sector::*;
