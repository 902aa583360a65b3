use anyhow::Context as _;
use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue::Set, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter,
};

use guildpass_schema::users;

use crate::domain::repository::UserRepository;
use crate::domain::types::UserRecord;
use crate::error::LinkServiceError;

// ── User repository ──────────────────────────────────────────────────────────

#[derive(Clone)]
pub struct DbUserRepository {
    pub db: DatabaseConnection,
}

impl UserRepository for DbUserRepository {
    async fn find_by_email(&self, email: &str) -> Result<Option<UserRecord>, LinkServiceError> {
        let model = users::Entity::find_by_id(email.to_owned())
            .one(&self.db)
            .await
            .context("find user by email")?;
        Ok(model.map(record_from_model))
    }

    async fn find_by_discord_id(
        &self,
        discord_id: &str,
    ) -> Result<Option<UserRecord>, LinkServiceError> {
        let model = users::Entity::find()
            .filter(users::Column::DiscordId.eq(discord_id))
            .one(&self.db)
            .await
            .context("find user by discord id")?;
        Ok(model.map(record_from_model))
    }

    async fn create(&self, email: &str) -> Result<(), LinkServiceError> {
        users::ActiveModel {
            email: Set(email.to_owned()),
            discord_id: Set(None),
            otp: Set(None),
            created_at: Set(Utc::now()),
        }
        .insert(&self.db)
        .await
        .context("create user")?;
        Ok(())
    }

    async fn set_otp(&self, email: &str, otp: &str) -> Result<(), LinkServiceError> {
        users::ActiveModel {
            email: Set(email.to_owned()),
            otp: Set(Some(otp.to_owned())),
            ..Default::default()
        }
        .update(&self.db)
        .await
        .context("set otp")?;
        Ok(())
    }

    async fn clear_otp(&self, email: &str) -> Result<(), LinkServiceError> {
        users::ActiveModel {
            email: Set(email.to_owned()),
            otp: Set(None),
            ..Default::default()
        }
        .update(&self.db)
        .await
        .context("clear otp")?;
        Ok(())
    }

    async fn link_discord(
        &self,
        email: &str,
        discord_id: &str,
    ) -> Result<(), LinkServiceError> {
        users::ActiveModel {
            email: Set(email.to_owned()),
            discord_id: Set(Some(discord_id.to_owned())),
            otp: Set(None),
            ..Default::default()
        }
        .update(&self.db)
        .await
        .context("link discord id")?;
        Ok(())
    }
}

fn record_from_model(model: users::Model) -> UserRecord {
    UserRecord {
        email: model.email,
        discord_id: model.discord_id,
        otp: model.otp,
        created_at: model.created_at,
    }
}
