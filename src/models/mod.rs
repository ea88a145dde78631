pub mod settings;
pub mod survey;
pub mod trade;

pub use settings::*;
pub use survey::*;
pub use trade::*;
