use serde::{Deserialize, Serialize};
use serde_repr::{Deserialize_repr, Serialize_repr};

use crate::user::User;
use crate::{ImageHash, Snowflake};

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct Team {
    pub icon: Option<ImageHash>,
    pub id: Snowflake,
    pub members: Vec<TeamMember>,
    pub name: String,
    pub owner_user_id: Snowflake,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct TeamMember {
    pub membership_state: MembershipState,
    pub team_id: Snowflake,
    pub user: User,
    #[serde(default)]
    pub role: String,
}

#[derive(Serialize_repr, Deserialize_repr, Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum MembershipState {
    Invited = 1,
    Accepted = 2,
}
