use smsportal::{Credentials, SmsPortalClient};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .compact()
        .init();

    let mut client = SmsPortalClient::new(Credentials::from_env()?);
    let authorized = client.authorize().await?.token().is_some();

    println!("token received: {authorized}");

    Ok(())
}
