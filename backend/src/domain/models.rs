use serde::{Deserialize, Serialize};

/// A stored contact-form submission. Never interpreted beyond listing;
/// the operator reads these out of band.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContactMessage {
    pub id: String,
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub reason: String,
    pub message: String,
    /// RFC 3339 timestamp
    pub created_at: String,
}
