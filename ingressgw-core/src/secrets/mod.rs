mod manifest;
mod memory;
mod resolver;

pub use manifest::ManifestSecretStore;
pub use memory::InMemorySecretStore;
pub use resolver::{LookupError, SecretResolver};
