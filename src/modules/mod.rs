pub mod perception;
pub mod selection;
pub mod action;
pub mod pipeline;

pub use pipeline::NewsDigest;
