//! Runtime configuration
//!
//! Values come from CLI flags, falling back to `SEARCHMARKS_*`
//! environment variables and then to the defaults below.

use crate::cli::ServeArgs;
use std::net::SocketAddr;
use std::path::PathBuf;

pub const DEFAULT_DATA_PATH: &str = "app/data/trademark_sample.json";
pub const DEFAULT_HOST: &str = "127.0.0.1";
pub const DEFAULT_PORT: u16 = 8000;

/// Resolved server settings
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub data_path: PathBuf,
    pub addr: SocketAddr,
}

impl From<&ServeArgs> for ServerConfig {
    fn from(args: &ServeArgs) -> Self {
        Self {
            data_path: args.data.data.clone(),
            addr: SocketAddr::new(args.host, args.port),
        }
    }
}
