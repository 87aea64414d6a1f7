use serde::Serialize;
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct DatabaseHealthStatus {
    pub reachable: bool,
    pub response_time_ms: u64,
}
