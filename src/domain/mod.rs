//! Value types shared by the coordinator and the fetch seam.

pub mod query;
pub mod types;
