pub mod icons;
pub mod output;
pub mod table;
pub mod theme;

pub use icons::Icons;
pub use output::{error, header, section, status, success, warn};
pub use table::{entity_table, stats_table, TableBuilder};
pub use theme::{theme, Theme};
