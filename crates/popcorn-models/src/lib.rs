pub mod movie;
pub mod search;
pub mod watched;

pub use movie::MovieDetail;
pub use search::SearchResultItem;
pub use watched::WatchedEntry;
