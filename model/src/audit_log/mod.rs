use serde::{Deserialize, Serialize};
use serde_json::value::RawValue;

use crate::channel::Channel;
use crate::guild::{GuildScheduledEvent, Integration};
use crate::interaction::ApplicationCommand;
use crate::user::User;
use crate::webhook::Webhook;
use crate::Snowflake;

mod audit_log_event;
pub use audit_log_event::AuditLogEvent;

#[derive(Serialize, Deserialize, Debug, Clone, Default)]
pub struct AuditLog {
    #[serde(default)]
    pub audit_log_entries: Vec<AuditLogEntry>,
    #[serde(default)]
    pub application_commands: Vec<ApplicationCommand>,
    #[serde(default)]
    pub guild_scheduled_events: Vec<GuildScheduledEvent>,
    #[serde(default)]
    pub integrations: Vec<Integration>,
    #[serde(default)]
    pub threads: Vec<Channel>,
    #[serde(default)]
    pub users: Vec<User>,
    #[serde(default)]
    pub webhooks: Vec<Webhook>,
}

impl AuditLog {
    pub fn user(&self, id: Snowflake) -> Option<&User> {
        self.users.iter().find(|u| u.id == id)
    }
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct AuditLogEntry {
    pub id: Snowflake,
    /// Not always a snowflake, so kept as the raw string.
    pub target_id: Option<String>,
    #[serde(default)]
    pub changes: Vec<AuditLogChange>,
    pub user_id: Option<Snowflake>,
    pub action_type: AuditLogEvent,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub options: Option<OptionalAuditEntryInfo>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
}

/// Values are polymorphic per `key` and are preserved verbatim.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct AuditLogChange {
    pub key: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub new_value: Option<Box<RawValue>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub old_value: Option<Box<RawValue>>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default)]
pub struct OptionalAuditEntryInfo {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub application_id: Option<Snowflake>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub auto_moderation_rule_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub channel_id: Option<Snowflake>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub count: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub delete_member_days: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<Snowflake>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub members_removed: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message_id: Option<Snowflake>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role_name: Option<String>,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub overwrite_type: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entries() {
        let raw = r#"{
            "audit_log_entries": [{
                "id": "10",
                "target_id": "20",
                "user_id": "30",
                "action_type": 25,
                "reason": "promoted",
                "changes": [{"key": "$add", "new_value": [{"id": "40", "name": "mod"}]}]
            }, {
                "id": "11",
                "target_id": null,
                "user_id": "30",
                "action_type": 73,
                "options": {"channel_id": "50", "count": "5"}
            }],
            "users": [{"id": "30", "username": "admin"}],
            "webhooks": [],
            "integrations": []
        }"#;

        let log: AuditLog = serde_json::from_str(raw).unwrap();
        assert_eq!(log.audit_log_entries.len(), 2);

        let first = &log.audit_log_entries[0];
        assert_eq!(first.action_type, AuditLogEvent::MemberRoleUpdate);
        assert_eq!(first.changes[0].new_value.as_ref().unwrap().get(), r#"[{"id": "40", "name": "mod"}]"#);
        assert_eq!(log.user(first.user_id.unwrap()).unwrap().username, "admin");

        let second = &log.audit_log_entries[1];
        assert_eq!(second.action_type, AuditLogEvent::MessageBulkDelete);
        assert_eq!(second.options.as_ref().unwrap().count.as_deref(), Some("5"));
    }
}
