pub mod dashboard;
pub mod error;
pub mod persistence;
pub mod records;
pub mod seeds;
pub mod state;
pub mod status;
pub mod storage_keys;
pub mod store;

pub use error::VitroLabError;
pub use status::{Status, StatusFilter};
pub use storage_keys::StoreKey;
