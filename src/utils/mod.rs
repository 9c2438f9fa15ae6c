pub mod error;
pub mod locks;
pub mod tally;
pub mod validate;
