//! JSON scanning and writing primitives shared by the poimark crates.

pub mod scan;
pub mod write;
