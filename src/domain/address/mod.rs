//! Service address domain module

mod provider;
mod service_addresses;

pub use provider::ServiceAddressProvider;
pub use service_addresses::ServiceAddresses;
