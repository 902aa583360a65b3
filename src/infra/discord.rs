use std::sync::Arc;

use anyhow::Context as _;
use serenity::all::{GuildId, RoleId, UserId};
use serenity::http::Http;

use crate::domain::repository::RoleGranter;
use crate::error::LinkServiceError;

/// Grants the configured guild role through the Discord HTTP API.
#[derive(Clone)]
pub struct SerenityRoleGranter {
    pub http: Arc<Http>,
    pub guild_id: GuildId,
    pub role_id: RoleId,
}

impl RoleGranter for SerenityRoleGranter {
    async fn grant_member_role(&self, discord_id: &str) -> Result<(), LinkServiceError> {
        let user_id = discord_id
            .parse::<u64>()
            .map_err(|_| anyhow::anyhow!("non-numeric discord id: {discord_id}"))?;
        self.http
            .add_member_role(
                self.guild_id,
                UserId::new(user_id),
                self.role_id,
                Some("email-verified link"),
            )
            .await
            .context("grant member role")?;
        Ok(())
    }
}
