pub mod xlsx;

pub use xlsx::{convert_value, normalize, normalize_file};
