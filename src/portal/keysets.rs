use serde::{Deserialize, Serialize};

use super::client::{is_created, truncated, PortalClient, PortalError};

/// The feature-configuration block a keyset is created with.
///
/// These are fixed policy for a provisioning run, not something this tool
/// negotiates with the portal: a caller wanting different behavior supplies
/// a different block. Field names follow the portal's camelCase convention.
#[derive(Serialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct KeysetFeatures {
    message_persistence: MessagePersistence,
    app_context: AppContext,
    presence: Presence,
    files: Files,
}

/// Message-persistence policy: how long history is retained, and whether
/// deletion and presence events participate in it.
#[derive(Serialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
struct MessagePersistence {
    enabled: bool,
    /// Retention window, in days.
    retention: u32,
    delete_from_history: bool,
    include_presence_events: bool,
}

/// App Context (metadata objects) policy: where metadata lives and which
/// metadata-change events the portal emits.
#[derive(Serialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
struct AppContext {
    enabled: bool,
    region: &'static str,
    user_metadata_events: bool,
    channel_metadata_events: bool,
    membership_events: bool,
    referential_integrity: bool,
    disallow_get_all_user_metadata: bool,
    disallow_get_all_channel_metadata: bool,
}

/// Presence-tracking policy: announce limits, heartbeat cadence, and
/// whether disconnects synthesize leave events.
#[derive(Serialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
struct Presence {
    enabled: bool,
    announce_max: u32,
    /// Heartbeat announce interval, in seconds.
    interval: u32,
    /// Debounce window for presence events, in seconds.
    debounce: u32,
    generate_leave_on_disconnect: bool,
}

/// File-attachment support toggle.
#[derive(Serialize, Debug, Clone)]
struct Files {
    enabled: bool,
}

impl KeysetFeatures {
    /// The fixed policy this tool provisions with: a week of history,
    /// presence with leave-on-disconnect, metadata events on, and no
    /// file attachments.
    pub fn standard() -> Self {
        Self {
            message_persistence: MessagePersistence {
                enabled: true,
                retention: 7,
                delete_from_history: true,
                include_presence_events: false,
            },
            app_context: AppContext {
                enabled: true,
                region: "aws-iad-1",
                user_metadata_events: true,
                channel_metadata_events: true,
                membership_events: true,
                referential_integrity: false,
                disallow_get_all_user_metadata: false,
                disallow_get_all_channel_metadata: false,
            },
            presence: Presence {
                enabled: true,
                announce_max: 20,
                interval: 10,
                debounce: 3,
                generate_leave_on_disconnect: true,
            },
            files: Files { enabled: false },
        }
    }
}

/// The body we POST when creating a keyset beneath an application.
#[derive(Serialize)]
struct CreateKeysetRequest<'a> {
    name: &'a str,
    config: &'a KeysetFeatures,
}

/// The slice of the creation response we care about: the issued key pair.
#[derive(Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct KeysetCredentials {
    #[serde(default)]
    pub publish_key: String,
    #[serde(default)]
    pub subscribe_key: String,
}

/// Creates a keyset scoped to the given application, returning the issued
/// publish/subscribe key pair.
pub async fn create_keyset(
    client: &PortalClient,
    app_id: &str,
    name: &str,
    features: &KeysetFeatures,
) -> Result<KeysetCredentials, PortalError> {
    println!();
    println!("Creating keyset: {name}...");

    let request = CreateKeysetRequest {
        name,
        config: features,
    };
    let (status, body) = client
        .post_json(&format!("/apps/{app_id}/keysets"), &request)
        .await?;

    println!("Status: {status}");
    // Keyset responses echo the entire configuration back; keep it readable.
    println!("Response: {}...", truncated(&body, 500));

    if !is_created(status) {
        println!("✗ Failed to create keyset");
        return Err(PortalError::Status { status, body });
    }

    let credentials: KeysetCredentials = serde_json::from_str(&body)?;
    if credentials.publish_key.is_empty() {
        return Err(PortalError::MissingField("publishKey"));
    }
    if credentials.subscribe_key.is_empty() {
        return Err(PortalError::MissingField("subscribeKey"));
    }

    println!("✓ Keyset created successfully!");
    println!("  Publish Key: {}", credentials.publish_key);
    println!("  Subscribe Key: {}", credentials.subscribe_key);
    Ok(credentials)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn standard_features_serialize_to_portal_shape() {
        let features = KeysetFeatures::standard();
        let value = serde_json::to_value(&features).expect("features serialize");

        assert_eq!(
            value,
            json!({
                "messagePersistence": {
                    "enabled": true,
                    "retention": 7,
                    "deleteFromHistory": true,
                    "includePresenceEvents": false
                },
                "appContext": {
                    "enabled": true,
                    "region": "aws-iad-1",
                    "userMetadataEvents": true,
                    "channelMetadataEvents": true,
                    "membershipEvents": true,
                    "referentialIntegrity": false,
                    "disallowGetAllUserMetadata": false,
                    "disallowGetAllChannelMetadata": false
                },
                "presence": {
                    "enabled": true,
                    "announceMax": 20,
                    "interval": 10,
                    "debounce": 3,
                    "generateLeaveOnDisconnect": true
                },
                "files": {
                    "enabled": false
                }
            })
        );
    }

    #[test]
    fn credentials_tolerate_missing_fields() {
        // Absent fields deserialize as empty strings, which the create
        // operation then rejects. Extra fields are simply ignored.
        let credentials: KeysetCredentials =
            serde_json::from_str(r#"{"id": "ks_1", "publishKey": "pub_abc"}"#)
                .expect("partial body still parses");
        assert_eq!(credentials.publish_key, "pub_abc");
        assert!(credentials.subscribe_key.is_empty());
    }
}
