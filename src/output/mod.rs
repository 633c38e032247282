//! Output formatting module
//!
//! Handles the snapshot formats (JSON, YAML) and the discovery summary table.

mod snapshot;
mod summary;

pub use self::snapshot::{render_snapshot, write_snapshot};
pub use self::summary::{print_summary, summary_table};
