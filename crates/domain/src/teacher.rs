//! Teacher: a staff member who teaches courses and records results.

use serde::{Deserialize, Serialize};

use crate::id::TeacherId;

/// A teacher as listed by `GET /api/auth/teachers`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Teacher {
    #[serde(rename = "_id")]
    pub id: TeacherId,
    pub name: String,
}
