use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::Application;
use crate::user::User;

/// Details of the bearer token used to make the request.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct AuthorizationInformation {
    pub application: Application,
    pub scopes: Vec<String>,
    pub expires: DateTime<Utc>,
    /// Present when the `identify` scope was granted.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user: Option<User>,
}
