pub mod config;
pub mod convert;
pub mod escape;
pub mod normalize;
pub mod rename;
pub mod table;
pub mod utils;

pub use convert::{to_ascii, Converter};
pub use escape::{escape_by_mode, escape_non_ascii, escape_with, EscapeMode, InvalidModeError};
pub use normalize::{strip_diacritics, strip_diacritics_opt};
pub use table::Table;
