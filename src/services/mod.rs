pub mod decomposition;
pub mod features;
pub mod ranking;
pub mod recommend;
pub mod search;

pub use recommend::{overview, recommend_genre};
pub use search::{SearchEngine, SearchOutcome, SearchResults};
