use crate::model::RedirectKind;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RedirectTarget {
    /// Name of a listener in the same graph.
    Listener(String),
    /// Opaque external URL.
    Url(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RedirectConfiguration {
    pub name: String,
    pub source_listener: String,
    pub target: RedirectTarget,
    pub kind: RedirectKind,
    pub include_path: bool,
    pub include_query_string: bool,
}
