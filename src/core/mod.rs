pub mod client;
pub mod path_template;

pub use crate::domain::model::RemoteCallSpec;
pub use crate::domain::ports::{HelloClient, ServiceResolver};
pub use crate::utils::error::Result;
