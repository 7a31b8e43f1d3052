//! Adapter from Kubernetes `networking.k8s.io/v1` Ingress objects to the
//! synthesizer's input model.

mod annotations;
mod ingress;

pub use annotations::{AnnotationError, decode_intent, keys};
pub use ingress::{ingress_class, into_resource, is_managed};
