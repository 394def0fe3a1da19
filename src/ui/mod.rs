pub mod icons;
pub mod output;
pub mod table;
pub mod theme;

pub use icons::Icons;
pub use output::{dim, header, info, section, status, success, warn};
pub use table::{NameTable, StateTable};
pub use theme::{theme, Theme};
