//! Discord gateway bot: reacts to members joining the configured guild and
//! grants the member role to anyone whose Discord ID is already linked.
//!
//! The reaction is fire-and-forget — failures are logged, never surfaced to
//! a caller. Requires the `GUILD_MEMBERS` privileged intent, which must be
//! enabled in the Discord Developer Portal for the bot application.

use anyhow::Context as _;
use sea_orm::DatabaseConnection;
use serenity::all::{Client, Context, EventHandler, GatewayIntents, GuildId, Member, Ready, RoleId};
use serenity::async_trait;
use tracing::{debug, error, info};

use crate::config::DiscordConfig;
use crate::infra::db::DbUserRepository;
use crate::infra::discord::SerenityRoleGranter;
use crate::usecase::grant::GrantRoleUseCase;

struct Handler {
    db: DatabaseConnection,
    guild_id: GuildId,
    role_id: RoleId,
}

#[async_trait]
impl EventHandler for Handler {
    async fn ready(&self, _ctx: Context, ready: Ready) {
        info!("{} is connected to Discord", ready.user.name);
    }

    async fn guild_member_addition(&self, ctx: Context, new_member: Member) {
        if new_member.guild_id != self.guild_id {
            return;
        }
        let discord_id = new_member.user.id.get().to_string();

        let usecase = GrantRoleUseCase {
            repo: DbUserRepository {
                db: self.db.clone(),
            },
            granter: SerenityRoleGranter {
                http: ctx.http.clone(),
                guild_id: self.guild_id,
                role_id: self.role_id,
            },
        };

        match usecase.execute(&discord_id).await {
            Ok(true) => info!("granted member role to {}", new_member.user.name),
            Ok(false) => debug!("joining member {discord_id} has no linked record"),
            Err(e) => error!("failed to grant role to {discord_id}: {e}"),
        }
    }
}

/// Run the gateway client until it exits. Spawned from `main` so the HTTP
/// server is never blocked on the Discord connection.
pub async fn start_bot(config: DiscordConfig, db: DatabaseConnection) -> anyhow::Result<()> {
    let intents = GatewayIntents::GUILDS | GatewayIntents::GUILD_MEMBERS;

    let handler = Handler {
        db,
        guild_id: GuildId::new(config.guild_id),
        role_id: RoleId::new(config.role_id),
    };

    let mut client = Client::builder(&config.token, intents)
        .event_handler(handler)
        .await
        .context("build Discord client")?;

    client.start().await.context("run Discord client")?;
    Ok(())
}
