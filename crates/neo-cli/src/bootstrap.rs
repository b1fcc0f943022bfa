use anyhow::Context;
use neo_config::NeoConfig;

use crate::cli::GlobalFlags;

/// Load configuration (`.env`, TOML files, `NEOWATCH_*`), then apply `--user`.
pub fn load_config(flags: &GlobalFlags) -> anyhow::Result<NeoConfig> {
    let mut config = NeoConfig::load_with_dotenv().context("failed to load neowatch config")?;
    if let Some(email) = &flags.user {
        config.general.user_email.clone_from(email);
    }
    if config.feed.uses_demo_key() {
        tracing::debug!("using the shared DEMO_KEY; set NEOWATCH_FEED__API_KEY for higher rate limits");
    }
    Ok(config)
}

/// Email of the user to act as, if one is configured.
pub fn requested_email(config: &NeoConfig) -> Option<&str> {
    config
        .general
        .has_user()
        .then(|| config.general.user_email.trim())
}
