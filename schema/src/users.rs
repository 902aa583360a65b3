use sea_orm::entity::prelude::*;

/// Email-keyed user record for Discord linking.
/// `otp` is transient: present only between issuance and the next
/// verification attempt. A non-null `discord_id` is a terminal state.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "users")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub email: String,
    pub discord_id: Option<String>,
    pub otp: Option<String>,
    pub created_at: chrono::DateTime<chrono::Utc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
