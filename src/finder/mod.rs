pub mod config;
pub mod header;
pub mod indexer;
pub mod keyword_finder;
pub mod util;

pub use config::{FinderConfig, IndexTable};
pub use indexer::build_index;
pub use keyword_finder::filter_by_keyword;
