/// Link service configuration loaded from environment variables.
#[derive(Debug)]
pub struct LinkConfig {
    /// PostgreSQL connection URL.
    pub database_url: String,
    /// SMTP relay hostname (e.g. "smtp.gmail.com").
    pub smtp_host: String,
    /// SMTP username.
    pub smtp_username: String,
    /// SMTP password or app token.
    pub smtp_password: String,
    /// From address for OTP mail (e.g. "Community <noreply@example.com>").
    pub mail_from: String,
    /// Discord invite URL returned on successful verification. Optional;
    /// omitted from the response when unset. Env var: `DISCORD_INVITE_URL`.
    pub invite_url: Option<String>,
    /// TCP port to listen on (default 3000). Env var: `LINK_PORT`.
    pub link_port: u16,
    /// Gateway bot settings; `None` when `DISCORD_TOKEN` is unset, in which
    /// case the service runs HTTP-only.
    pub discord: Option<DiscordConfig>,
}

#[derive(Debug)]
pub struct DiscordConfig {
    /// Bot token. Env var: `DISCORD_TOKEN`.
    pub token: String,
    /// Guild the bot watches for joins. Env var: `DISCORD_GUILD_ID`.
    pub guild_id: u64,
    /// Role granted to linked members. Env var: `DISCORD_ROLE_ID`.
    pub role_id: u64,
}

impl LinkConfig {
    pub fn from_env() -> Self {
        Self {
            database_url: std::env::var("DATABASE_URL").expect("DATABASE_URL"),
            smtp_host: std::env::var("SMTP_HOST").expect("SMTP_HOST"),
            smtp_username: std::env::var("SMTP_USERNAME").expect("SMTP_USERNAME"),
            smtp_password: std::env::var("SMTP_PASSWORD").expect("SMTP_PASSWORD"),
            mail_from: std::env::var("MAIL_FROM").expect("MAIL_FROM"),
            invite_url: std::env::var("DISCORD_INVITE_URL").ok(),
            link_port: std::env::var("LINK_PORT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(3000),
            discord: DiscordConfig::from_env(),
        }
    }
}

impl DiscordConfig {
    fn from_env() -> Option<Self> {
        let token = std::env::var("DISCORD_TOKEN").ok()?;
        Some(Self {
            token,
            guild_id: std::env::var("DISCORD_GUILD_ID")
                .expect("DISCORD_GUILD_ID")
                .parse()
                .expect("DISCORD_GUILD_ID must be a u64"),
            role_id: std::env::var("DISCORD_ROLE_ID")
                .expect("DISCORD_ROLE_ID")
                .parse()
                .expect("DISCORD_ROLE_ID must be a u64"),
        })
    }
}
