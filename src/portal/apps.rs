use serde::{Deserialize, Serialize};

use super::client::{is_created, PortalClient, PortalError};

/// The body we POST when creating an application.
#[derive(Serialize)]
struct CreateAppRequest<'a> {
    name: &'a str,
}

/// The slice of the creation response we care about.
/// (The portal returns far more; only the identifier matters downstream.)
#[derive(Deserialize)]
struct CreateAppResponse {
    #[serde(default)]
    id: String,
}

/// Creates an application container on the portal, returning its
/// platform-assigned identifier.
///
/// Every keyset is scoped to an application, so this must come first.
/// Note that the portal happily creates another application with the same
/// name on every call; there is no deduplication on either side.
pub async fn create_app(client: &PortalClient, name: &str) -> Result<String, PortalError> {
    println!("Creating app: {name}...");

    let (status, body) = client
        .post_json("/apps", &CreateAppRequest { name })
        .await?;

    println!("Status: {status}");
    println!("Response: {body}");

    if !is_created(status) {
        println!("✗ Failed to create app");
        return Err(PortalError::Status { status, body });
    }

    let response: CreateAppResponse = serde_json::from_str(&body)?;
    if response.id.is_empty() {
        // A success status without an identifier is useless to us:
        // nothing downstream can be scoped to it.
        return Err(PortalError::MissingField("id"));
    }

    println!("✓ App created successfully!");
    println!("  App ID: {}", response.id);
    Ok(response.id)
}
