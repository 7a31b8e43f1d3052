use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FrontendPort {
    pub name: String,
    pub port: u16,
}
