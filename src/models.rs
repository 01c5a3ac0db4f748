use serde::{Deserialize, Serialize};

/// The only domain entity. Users are never stored; every value lives for the
/// duration of a single response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    pub id: u64,
    pub name: String,
    pub email: String,
}
