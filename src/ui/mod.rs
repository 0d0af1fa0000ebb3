pub mod icons;
pub mod output;
pub mod table;
pub mod theme;

pub use icons::Icons;
pub use output::{dim, error, header, quoted, retrieved_line, stored_line, success, warn};
pub use table::{TableBuilder, stats_table};
pub use theme::{theme, Theme};
