pub mod export;
pub mod probe;
pub mod validate;
