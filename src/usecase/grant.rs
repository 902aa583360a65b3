use crate::domain::repository::{RoleGranter, UserRepository};
use crate::error::LinkServiceError;

/// Guild-join reaction: grant the member role when the joining Discord ID
/// belongs to a linked record. Returns whether a grant was requested.
pub struct GrantRoleUseCase<R, G>
where
    R: UserRepository,
    G: RoleGranter,
{
    pub repo: R,
    pub granter: G,
}

impl<R, G> GrantRoleUseCase<R, G>
where
    R: UserRepository,
    G: RoleGranter,
{
    pub async fn execute(&self, discord_id: &str) -> Result<bool, LinkServiceError> {
        if self.repo.find_by_discord_id(discord_id).await?.is_none() {
            return Ok(false);
        }
        self.granter.grant_member_role(discord_id).await?;
        Ok(true)
    }
}
