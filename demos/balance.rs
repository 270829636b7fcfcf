use smsportal::{Credentials, SmsPortalClient};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .compact()
        .init();

    let mut client = SmsPortalClient::new(Credentials::from_env()?);
    match client.balance().await? {
        Some(balance) => println!("balance: {balance}"),
        None => println!("balance: unavailable (check credentials)"),
    }

    Ok(())
}
