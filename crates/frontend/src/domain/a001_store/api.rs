use contracts::domain::a001_store::{Store, StoreDto};
use contracts::shared::envelope::{ApiEnvelope, ListQuery, Paged};

use crate::shared::gateway::{self, expect_data, unwrap_envelope, ApiError};

const BASE: &str = "/api/admin/stores";

pub async fn list(query: &ListQuery) -> Result<Paged<Store>, ApiError> {
    let env: ApiEnvelope<Paged<Store>> = gateway::get_json(BASE, Some(query)).await?;
    expect_data(env)
}

pub async fn detail(id: &str) -> Result<Option<Store>, ApiError> {
    let path = format!("{}/{}", BASE, urlencoding::encode(id));
    let env: ApiEnvelope<Store> = gateway::get_json::<_, ()>(&path, None).await?;
    unwrap_envelope(env)
}

pub async fn create(dto: &StoreDto) -> Result<Store, ApiError> {
    let env: ApiEnvelope<Store> = gateway::post_json(BASE, dto).await?;
    expect_data(env)
}

pub async fn update(id: &str, patch: &serde_json::Value) -> Result<Store, ApiError> {
    let path = format!("{}/{}", BASE, urlencoding::encode(id));
    let env: ApiEnvelope<Store> = gateway::put_json(&path, patch).await?;
    expect_data(env)
}

pub async fn remove(id: &str) -> Result<(), ApiError> {
    let path = format!("{}/{}", BASE, urlencoding::encode(id));
    let env: ApiEnvelope<serde_json::Value> = gateway::delete_json(&path).await?;
    unwrap_envelope(env)?;
    Ok(())
}
