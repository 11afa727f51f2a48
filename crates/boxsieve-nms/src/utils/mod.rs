//! Utility modules

pub mod batch;

pub use batch::suppress_batch;
