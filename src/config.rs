use anyhow::Result;
use sea_orm::Database;

use crate::schemas::AppState;

/// Initialize application state against an explicit database URL
pub async fn initialize_app_state_with_url(database_url: &str) -> Result<AppState> {
    tracing::info!("Connecting to database: {}", database_url);
    let db = Database::connect(database_url).await?;

    Ok(AppState { db })
}

/// Get bind address from environment or use default
pub fn get_bind_address() -> String {
    std::env::var("BIND_ADDRESS").unwrap_or_else(|_| "0.0.0.0:3000".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn app_state_connects_to_explicit_url() {
        let state = initialize_app_state_with_url("sqlite::memory:")
            .await
            .expect("in-memory connection should succeed");
        assert!(state.db.ping().await.is_ok());
    }

    #[tokio::test]
    async fn app_state_propagates_connection_errors() {
        let result = initialize_app_state_with_url("not-a-database-url").await;
        assert!(result.is_err());
    }

    #[test]
    fn bind_address_prefers_environment_over_default() {
        unsafe { std::env::set_var("BIND_ADDRESS", "127.0.0.1:8123") };
        assert_eq!(get_bind_address(), "127.0.0.1:8123");

        unsafe { std::env::remove_var("BIND_ADDRESS") };
        assert_eq!(get_bind_address(), "0.0.0.0:3000");
    }
}
