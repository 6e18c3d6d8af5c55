pub mod app;
pub mod selection;
pub mod session;
pub mod store;
pub mod watchlist;

pub use app::App;
pub use selection::Selection;
pub use session::{SearchRequest, SearchSession, SearchStatus, MIN_QUERY_LEN};
pub use store::WatchedStore;
pub use watchlist::{Watchlist, WatchlistSummary};
