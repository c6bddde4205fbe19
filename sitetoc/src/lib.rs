//! Library surface of the sitetoc binary crate, exposed for integration
//! tests.

pub mod cli;
pub mod manifest;
pub mod utils;
