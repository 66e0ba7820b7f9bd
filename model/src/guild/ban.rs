use crate::user::User;
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct Ban {
    pub reason: Option<String>,
    pub user: User,
}
