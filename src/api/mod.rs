pub mod album;
pub mod artist;
pub mod error;
pub mod system;

pub use error::{ServiceError, ServiceResult};

/// Lookup handlers take their id as a raw query string; anything that does
/// not parse as an integer is rejected before the logic layer is reached.
fn parse_id_param(raw: Option<&str>) -> ServiceResult<i64> {
    raw.and_then(|raw| raw.parse().ok())
        .ok_or(ServiceError::InvalidParameter)
}
