use std::io;

use serde_json::json;
use smsportal::{Credentials, Options, SmsPortalClient};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .compact()
        .init();

    let group = std::env::var("SMSPORTAL_GROUP").map_err(|_| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            "SMSPORTAL_GROUP environment variable is required",
        )
    })?;
    let content = std::env::var("SMSPORTAL_MESSAGE")
        .unwrap_or_else(|_| "Hello from the smsportal demo.".to_owned());

    let mut options = Options::new();
    options.insert("message".to_owned(), json!(content));
    options.insert("groups".to_owned(), json!([group]));

    let mut client = SmsPortalClient::new(Credentials::from_env()?);
    let response = client.message().send_to_group(options).await?;
    println!(
        "status: {}, body: {}",
        response.status,
        serde_json::Value::Object(response.body)
    );

    Ok(())
}
