//! Shared helpers for CLI commands.

use slotwise_core::Availability;

/// Environment variable consulted when --url is not given.
pub const URL_ENV_VAR: &str = "SCHEDULE_API_URL";

/// Resolve the schedule endpoint from the --url flag or the environment.
pub fn resolve_url(flag: Option<String>) -> Result<String, Box<dyn std::error::Error>> {
    flag.or_else(|| std::env::var(URL_ENV_VAR).ok())
        .ok_or_else(|| format!("no endpoint configured: pass --url or set {URL_ENV_VAR}").into())
}

/// Fetch a fresh snapshot and build the engine for one invocation.
pub async fn load_engine(flag: Option<String>) -> Result<Availability, Box<dyn std::error::Error>> {
    let url = resolve_url(flag)?;
    let engine = Availability::fetch(&url).await?;
    Ok(engine)
}
