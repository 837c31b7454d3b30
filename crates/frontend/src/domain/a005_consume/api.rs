use contracts::domain::a005_consume::ConsumeRecord;
use contracts::shared::envelope::{ApiEnvelope, ListQuery, Paged};

use crate::shared::gateway::{self, expect_data, unwrap_envelope, ApiError};

const BASE: &str = "/api/admin/consumes";

pub async fn list(query: &ListQuery) -> Result<Paged<ConsumeRecord>, ApiError> {
    let env: ApiEnvelope<Paged<ConsumeRecord>> = gateway::get_json(BASE, Some(query)).await?;
    expect_data(env)
}

pub async fn detail(id: &str) -> Result<Option<ConsumeRecord>, ApiError> {
    let path = format!("{}/{}", BASE, urlencoding::encode(id));
    let env: ApiEnvelope<ConsumeRecord> = gateway::get_json::<_, ()>(&path, None).await?;
    unwrap_envelope(env)
}
