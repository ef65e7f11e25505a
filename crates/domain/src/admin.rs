//! Admin: an administrator account, shown on the admin greeting card.

use serde::{Deserialize, Serialize};

use crate::id::AdminId;

/// An administrator as listed by `GET /api/auth/admin`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Admin {
    #[serde(rename = "_id")]
    pub id: AdminId,
    pub name: String,
}
