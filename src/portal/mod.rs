mod apps;
mod client;
mod keysets;

pub use apps::create_app;
pub use client::{PortalClient, PortalError};
pub use keysets::{create_keyset, KeysetCredentials, KeysetFeatures};
