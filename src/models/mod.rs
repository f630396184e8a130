pub mod allocation;
pub mod field;

pub use allocation::*;
pub use field::*;
