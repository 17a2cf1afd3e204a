use ats_client::prelude::*;
use tracing::{error, info};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    setup_logger();

    // Configuration and token storage come from the environment
    let client = Client::from_env()?;
    info!("Using API at {}", client.config().rest_api.base_url);

    let mut events = client.subscribe();
    tokio::spawn(async move {
        while let Ok(event) = events.recv().await {
            match event {
                AuthEvent::TokenRefreshed => info!("Access token refreshed"),
                AuthEvent::LoggedOut { redirect_to } => {
                    info!("Session ended, navigate to {}", redirect_to)
                }
            }
        }
    });

    if !client.session().is_authenticated().await? {
        let email = std::env::var("ATS_EMAIL").unwrap_or_else(|_| "admin@ucube.ai".to_string());
        let password = std::env::var("ATS_PASSWORD").unwrap_or_else(|_| "admin".to_string());
        let login = client.auth().login(&email, &password).await?;
        info!("Signed in as {}", login.user.username);
    }

    match client.me().await {
        Ok(user) => info!("Current user: {}", user),
        Err(e) if e.is_unauthenticated() => {
            error!("Please sign in again at {}", e.login_route().unwrap_or("/auth"));
            return Ok(());
        }
        Err(e) => return Err(e.into()),
    }

    let candidates: serde_json::Value = client.get("/candidates").await?;
    info!("Candidates: {}", candidates);

    Ok(())
}
