//! Ad hoc diagnostic tool: probes the candidate portal endpoint/version
//! combinations and prints what each one answers, for manual comparison.
//! Nothing in the provisioning pipeline depends on this.

use std::process::ExitCode;
use std::time::Duration;

use pubnubctl::config::Config;

/// Candidate endpoints observed across portal API versions.
/// Each is probed independently; one failing does not stop the rest.
const ENDPOINTS: &[(&str, &str)] = &[
    ("List apps v2", "https://ps.pndsn.com/v2/apps"),
    ("List apps v1", "https://admin.pubnub.com/api/v1/apps"),
    ("List apps v2 alt", "https://ps.pndsn.com/api/v2/apps"),
    ("List keysets v2", "https://ps.pndsn.com/v2/keysets"),
    ("List keys v2", "https://ps.pndsn.com/v2/keys"),
];

/// A short timeout: a probe that hangs tells us as much as one that errors.
const PROBE_TIMEOUT: Duration = Duration::from_secs(5);

#[tokio::main]
async fn main() -> ExitCode {
    let config = match Config::from_env() {
        Ok(config) => config,
        Err(error) => {
            eprintln!("✗ {error}");
            return ExitCode::FAILURE;
        }
    };

    let client = match reqwest::Client::builder().timeout(PROBE_TIMEOUT).build() {
        Ok(client) => client,
        Err(error) => {
            eprintln!("✗ unable to build HTTP client: {error}");
            return ExitCode::FAILURE;
        }
    };

    println!("Testing PubNub API endpoints...");
    println!();

    for (description, url) in ENDPOINTS {
        println!("Testing: {description}");
        println!("URL: {url}");

        let response = client
            .get(*url)
            .header("Authorization", format!("Bearer {}", config.api_key))
            .header("Content-Type", "application/json")
            .send()
            .await;

        match response {
            Ok(response) => {
                println!("Status: {}", response.status());
                let body = response.text().await.unwrap_or_default();
                println!("Response: {}", truncated(&body, 200));
            }
            Err(error) => {
                println!("Error: {error}");
            }
        }

        println!("{}", "-".repeat(80));
        println!();
    }

    ExitCode::SUCCESS
}

fn truncated(body: &str, limit: usize) -> &str {
    match body.char_indices().nth(limit) {
        Some((index, _)) => &body[..index],
        None => body,
    }
}
