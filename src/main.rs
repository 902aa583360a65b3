use sea_orm::Database;
use tracing::{error, info, warn};

use guildpass::bot::start_bot;
use guildpass::config::LinkConfig;
use guildpass::infra::mail::SmtpMailer;
use guildpass::router::build_router;
use guildpass::state::AppState;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt::init();

    let mut config = LinkConfig::from_env();

    let db = Database::connect(&config.database_url)
        .await
        .expect("failed to connect to database");

    let mailer = SmtpMailer::new(&config).expect("failed to build SMTP mailer");

    // Spawn the gateway bot when Discord is configured; otherwise run
    // HTTP-only (OTP flow still works, no role grants on guild join).
    if let Some(discord) = config.discord.take() {
        let bot_db = db.clone();
        tokio::spawn(async move {
            if let Err(e) = start_bot(discord, bot_db).await {
                error!("discord bot error: {e:#}");
            }
        });
    } else {
        warn!("DISCORD_TOKEN not set - guild-join role grants disabled");
    }

    let state = AppState {
        db,
        mailer,
        invite_url: config.invite_url,
    };

    let router = build_router(state);
    let addr = format!("0.0.0.0:{}", config.link_port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .expect("failed to bind");

    info!("link service listening on {addr}");
    axum::serve(listener, router).await.expect("server error");
}
