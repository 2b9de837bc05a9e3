//! User: the single record type persisted by the service.

use serde::{Deserialize, Serialize};

use crate::id::UserId;
use crate::time::{Timestamp, truncate_to_seconds};

/// A stored user record.
///
/// `id` and `created_at` are fixed at creation; only the descriptive fields
/// and `updated_at` change afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: UserId,
    pub name: String,
    pub age: i32,
    pub address: String,
    #[serde(rename = "createdat")]
    pub created_at: Timestamp,
    #[serde(rename = "updatedat", default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<Timestamp>,
}

impl User {
    /// Build a fresh record from request parameters.
    ///
    /// Assigns a new identifier and stamps both timestamps with `now`,
    /// truncated to whole seconds.
    #[must_use]
    pub fn from_params(params: UserParams, now: Timestamp) -> Self {
        let now = truncate_to_seconds(now);
        Self {
            id: UserId::new(),
            name: params.name,
            age: params.age,
            address: params.address,
            created_at: now,
            updated_at: Some(now),
        }
    }

    /// Overwrite the descriptive fields and bump `updated_at`.
    ///
    /// This is the update every `UserRepository` must perform: `id` and
    /// `created_at` stay as they are. Storage backends that update in place
    /// (such as in-memory repositories) call it directly.
    pub fn apply(&mut self, params: UserParams, now: Timestamp) {
        self.name = params.name;
        self.age = params.age;
        self.address = params.address;
        self.updated_at = Some(truncate_to_seconds(now));
    }
}

/// Input for creating or updating a [`User`].
///
/// Carries no identifier or timestamps; the server sets those. Missing fields
/// fall back to their zero value.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct UserParams {
    #[serde(alias = "Name")]
    pub name: String,
    #[serde(alias = "Age")]
    pub age: i32,
    #[serde(alias = "Address")]
    pub address: String,
}

impl UserParams {
    #[must_use]
    pub fn new(name: impl Into<String>, age: i32, address: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            age,
            address: address.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{DateTime, Timelike};

    fn at(s: &str) -> Timestamp {
        DateTime::parse_from_rfc3339(s).unwrap().to_utc()
    }

    #[test]
    fn should_stamp_both_timestamps_when_created() {
        let user = User::from_params(
            UserParams::new("Alice", 30, "123 St"),
            at("2024-01-01T00:00:00.750Z"),
        );
        assert_eq!(user.name, "Alice");
        assert_eq!(user.created_at.nanosecond(), 0);
        assert_eq!(user.updated_at, Some(user.created_at));
    }

    #[test]
    fn should_keep_id_and_created_at_when_applying_update() {
        let mut user = User::from_params(
            UserParams::new("Alice", 30, "123 St"),
            at("2024-01-01T00:00:00Z"),
        );
        let id = user.id;
        let created = user.created_at;

        user.apply(
            UserParams::new("Alice B.", 31, "456 Ave"),
            at("2024-01-02T00:00:00Z"),
        );

        assert_eq!(user.id, id);
        assert_eq!(user.created_at, created);
        assert_eq!(user.age, 31);
        assert_eq!(user.updated_at, Some(at("2024-01-02T00:00:00Z")));
    }

    #[test]
    fn should_serialize_with_wire_field_names() {
        let user = User::from_params(
            UserParams::new("Alice", 30, "123 St"),
            at("2024-01-01T00:00:00Z"),
        );
        let json = serde_json::to_value(&user).unwrap();
        assert_eq!(json["name"], "Alice");
        assert_eq!(json["age"], 30);
        assert_eq!(json["address"], "123 St");
        assert!(json.get("createdat").is_some());
        assert!(json.get("updatedat").is_some());
    }

    #[test]
    fn should_omit_updatedat_when_absent() {
        let mut user = User::from_params(UserParams::default(), at("2024-01-01T00:00:00Z"));
        user.updated_at = None;
        let json = serde_json::to_value(&user).unwrap();
        assert!(json.get("updatedat").is_none());
    }

    #[test]
    fn should_accept_capitalized_param_keys() {
        let params: UserParams =
            serde_json::from_str(r#"{"Name":"Bob","Age":41,"Address":"1 Road"}"#).unwrap();
        assert_eq!(params, UserParams::new("Bob", 41, "1 Road"));
    }

    #[test]
    fn should_default_missing_param_fields() {
        let params: UserParams = serde_json::from_str(r#"{"name":"Bob"}"#).unwrap();
        assert_eq!(params.age, 0);
        assert!(params.address.is_empty());
    }
}
