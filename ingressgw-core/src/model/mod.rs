mod ingress;
mod intent;
mod secret;

pub use ingress::{BackendRef, IngressResource, IngressRule, PathRule, TlsBlock, canonical_order};
pub use intent::{ExternalRedirect, IngressIntent, RedirectKind};
pub use secret::{SecretContent, SecretIdentifier, resource_key};
