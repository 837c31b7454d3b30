use contracts::domain::a003_member::{CreateMemberDto, Member, RechargeApply};
use contracts::shared::envelope::{ApiEnvelope, ListQuery, Paged};

use crate::shared::gateway::{self, expect_data, unwrap_envelope, ApiError};

const BASE: &str = "/api/admin/members";

pub async fn list(query: &ListQuery) -> Result<Paged<Member>, ApiError> {
    let env: ApiEnvelope<Paged<Member>> = gateway::get_json(BASE, Some(query)).await?;
    expect_data(env)
}

pub async fn detail(id: &str) -> Result<Option<Member>, ApiError> {
    let path = format!("{}/{}", BASE, urlencoding::encode(id));
    let env: ApiEnvelope<Member> = gateway::get_json::<_, ()>(&path, None).await?;
    unwrap_envelope(env)
}

pub async fn create(dto: &CreateMemberDto) -> Result<Member, ApiError> {
    let env: ApiEnvelope<Member> = gateway::post_json(BASE, dto).await?;
    expect_data(env)
}

pub async fn update(id: &str, patch: &serde_json::Value) -> Result<Member, ApiError> {
    let path = format!("{}/{}", BASE, urlencoding::encode(id));
    let env: ApiEnvelope<Member> = gateway::put_json(&path, patch).await?;
    expect_data(env)
}

pub async fn remove(id: &str) -> Result<(), ApiError> {
    let path = format!("{}/{}", BASE, urlencoding::encode(id));
    let env: ApiEnvelope<serde_json::Value> = gateway::delete_json(&path).await?;
    unwrap_envelope(env)?;
    Ok(())
}

/// Top up a member. The server appends the ledger entry, recomputes the
/// card tier from the new cumulative total and returns the updated member.
pub async fn recharge(id: &str, apply: &RechargeApply) -> Result<Member, ApiError> {
    let path = format!("{}/{}/recharge", BASE, urlencoding::encode(id));
    let env: ApiEnvelope<Member> = gateway::post_json(&path, apply).await?;
    expect_data(env)
}
