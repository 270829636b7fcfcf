use std::io;

use smsportal::{BulkMessages, Credentials, SmsPortalClient};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .compact()
        .init();

    let destination = std::env::var("SMSPORTAL_DESTINATION").map_err(|_| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            "SMSPORTAL_DESTINATION environment variable is required",
        )
    })?;
    let content = std::env::var("SMSPORTAL_MESSAGE")
        .unwrap_or_else(|_| "Hello from the smsportal demo.".to_owned());
    // Anything but an explicit "0" keeps the demo in test mode.
    let test_mode = std::env::var("SMSPORTAL_TEST_MODE").map_or(true, |value| value != "0");

    let mut client = SmsPortalClient::new(Credentials::from_env()?);
    let bulk = BulkMessages::broadcast([destination], content)?;

    let response = client
        .in_test_mode(test_mode)
        .message()
        .send(bulk.into())
        .await?;
    println!(
        "status: {}, body: {}",
        response.status,
        serde_json::Value::Object(response.body)
    );

    Ok(())
}
