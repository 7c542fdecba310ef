use serde::{Deserialize, Serialize};
use time::OffsetDateTime;
use uuid::Uuid;

use crate::profile::UserProfile;

/// The single persisted user record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoredUser {
    pub id: Uuid,                   // generated at registration
    pub name: String,               // display name
    pub email: String,              // trimmed + lowercased
    pub password_hash: String,      // Argon2 PHC string, never sent to clients
    pub profile: UserProfile,       // measurements and objective
    #[serde(with = "time::serde::rfc3339")]
    pub registered_at: OffsetDateTime,
}
