mod merge;
mod store;

pub use merge::merge_resources;
pub use store::{Store, StoreError};
