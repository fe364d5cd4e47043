pub mod icons;
pub mod output;
pub mod progress;
pub mod table;
pub mod theme;

pub use icons::Icons;
pub use output::{
    approaching_line, error, header, none_found, outside_horizon_line, print_report, warn,
};
pub use progress::Spinner;
pub use table::summary_table;
pub use theme::{theme, Theme};
