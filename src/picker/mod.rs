pub mod columns;
pub mod fzf;

pub use columns::{encode_rows, resolve_selection, ColumnConfig};
pub use fzf::{FzfSelector, Selector};
