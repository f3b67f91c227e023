pub mod conversion;
pub mod table;

pub use conversion::*;
pub use table::*;
