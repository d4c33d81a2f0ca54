pub mod aggregate;
pub mod error;
pub mod export;
pub mod filter;
pub mod metrics;
pub mod model;
pub mod player;
pub mod source;
pub mod store;
pub mod views;

pub use error::{Result, ViewError};
pub use filter::{apply, FilteredView};
pub use metrics::{summarize, Summary};
pub use model::*;
pub use store::RecordStore;
pub use views::DashboardViews;
