pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;
pub use config::TomlConfig;

pub use adapters::StaticResolver;
pub use core::{client::HttpHelloClient, path_template::PathTemplate};
pub use domain::model::RemoteCallSpec;
pub use domain::ports::{HelloClient, ServiceResolver};
pub use utils::error::{HelloClientError, Result};
