use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::UserId;

/// One login audit event, linked to its owning [`crate::User`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Login {
    pub user_id: UserId,
    pub login_timestamp: DateTime<Utc>,
}
