//! Address of the running instance, reported on read responses

use std::ffi::OsString;
use std::io;
use std::net::ToSocketAddrs;

use tracing::{debug, warn};

use crate::domain::{DomainError, ServiceAddressProvider};

const UNKNOWN_HOST_NAME: &str = "unknown host name";
const UNKNOWN_IP_ADDRESS: &str = "unknown IP address";

/// Reports this instance as `hostname/ip:port`.
///
/// The address is resolved once, when the value is built.
#[derive(Debug, Clone)]
pub struct ServiceUtil {
    service_address: String,
}

impl ServiceUtil {
    /// Resolve the address for a server listening on `port`.
    ///
    /// Blocks on DNS; async callers go through [`ServiceUtil::resolve`].
    pub fn new(port: u16) -> Self {
        let host_name = host_name_from(hostname::get());
        let ip_address = find_ip_address(&host_name, port);
        let service_address = format!("{}/{}:{}", host_name, ip_address, port);

        debug!(service_address = %service_address, "Resolved service address");

        Self { service_address }
    }

    /// Same as [`ServiceUtil::new`], run on the blocking thread pool
    pub async fn resolve(port: u16) -> Result<Self, DomainError> {
        tokio::task::spawn_blocking(move || Self::new(port))
            .await
            .map_err(|e| DomainError::internal(format!("Service address lookup failed: {}", e)))
    }

    /// Use a fixed, already known address
    pub fn with_address(address: impl Into<String>) -> Self {
        Self {
            service_address: address.into(),
        }
    }
}

impl ServiceAddressProvider for ServiceUtil {
    fn service_address(&self) -> String {
        self.service_address.clone()
    }
}

fn host_name_from(lookup: io::Result<OsString>) -> String {
    match lookup {
        Ok(name) if !name.is_empty() => name.to_string_lossy().into_owned(),
        Ok(_) => UNKNOWN_HOST_NAME.to_string(),
        Err(e) => {
            warn!(error = %e, "Could not read local host name");
            UNKNOWN_HOST_NAME.to_string()
        }
    }
}

fn find_ip_address(host_name: &str, port: u16) -> String {
    if host_name == UNKNOWN_HOST_NAME {
        return UNKNOWN_IP_ADDRESS.to_string();
    }

    (host_name, port)
        .to_socket_addrs()
        .ok()
        .and_then(|mut addrs| addrs.next())
        .map(|addr| addr.ip().to_string())
        .unwrap_or_else(|| UNKNOWN_IP_ADDRESS.to_string())
}
