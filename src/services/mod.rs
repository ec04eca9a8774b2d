pub mod upsert;

pub use crate::errors::{ClientError, ClientResult};
