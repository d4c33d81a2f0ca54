pub mod criteria;
pub mod record;
pub mod scoring;

pub use criteria::SelectionCriteria;
pub use record::{MatchRecord, Side};
pub use scoring::total_points;
