mod client;
pub mod response;
mod session;

pub use client::{ApiError, GardenaApi};
