use std::io;
use std::path::PathBuf;

use crate::config::Config;
use crate::env_file;
use crate::portal::{self, KeysetFeatures, PortalClient, PortalError};

/// The display name for the application container we create.
pub const APP_NAME: &str = "Swap It Game";

/// The display name for the keyset beneath it.
pub const KEYSET_NAME: &str = "Swap It Game Keys";

/// Possible errors during a provisioning run.
#[derive(Debug, thiserror::Error)]
pub enum ProvisionError {
    #[error(transparent)]
    Portal(#[from] PortalError),
    #[error("unable to write env file at {path}: {source}")]
    EnvFile {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// What a successful run produced.
#[derive(Debug)]
pub struct Provisioned {
    pub app_id: String,
    pub publish_key: String,
    pub subscribe_key: String,
}

/// Runs the full provisioning pipeline: create an application, create a
/// keyset scoped to it, and persist the issued keys to the env file.
///
/// The three stages run strictly in sequence, and the first failure ends
/// the run. There is no rollback: if keyset creation fails, the application
/// created moments earlier is left orphaned on the portal, and rerunning
/// later will create another one.
pub async fn run(config: &Config) -> Result<Provisioned, ProvisionError> {
    let client = PortalClient::new(config)?;

    // Stage 1: the application container. Everything else is scoped to
    // the identifier the portal assigns here.
    let app_id = portal::create_app(&client, APP_NAME).await?;

    // Stage 2: the keyset, carrying our fixed feature policy.
    let credentials =
        portal::create_keyset(&client, &app_id, KEYSET_NAME, &KeysetFeatures::standard()).await?;

    // Stage 3: persist the key pair for the client application.
    env_file::write_env_file(
        &config.env_file,
        &credentials.publish_key,
        &credentials.subscribe_key,
    )
    .map_err(|source| ProvisionError::EnvFile {
        path: config.env_file.clone(),
        source,
    })?;

    println!();
    println!("✓ Env file created at {}", config.env_file.display());
    println!();
    println!("Your PubNub keys are ready to use!");
    println!();
    println!("Next steps:");
    println!("1. Deploy the Before Publish Function from server/before-publish-function.js");
    println!("2. Configure it to run on channel pattern: game.*");
    println!("3. Enable KV Store for the Function");
    println!("4. Test the game!");

    Ok(Provisioned {
        app_id,
        publish_key: credentials.publish_key,
        subscribe_key: credentials.subscribe_key,
    })
}
