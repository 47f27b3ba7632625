//! Wire payloads returned by list endpoints.

pub mod api;
