use std::fmt::Debug;

/// Source of the network address of the running service instance
pub trait ServiceAddressProvider: Send + Sync + Debug {
    /// Returns the address reported on read responses
    fn service_address(&self) -> String;
}
