//! Facades over the two staff collections. Leaders and salespersons share
//! one record shape but live under separate REST resources.

use contracts::domain::a002_staff::{CreateStaffDto, Staff};
use contracts::shared::envelope::{ApiEnvelope, ListQuery, Paged};

use crate::shared::gateway::{self, expect_data, unwrap_envelope, ApiError};

async fn list_at(base: &str, query: &ListQuery) -> Result<Paged<Staff>, ApiError> {
    let env: ApiEnvelope<Paged<Staff>> = gateway::get_json(base, Some(query)).await?;
    expect_data(env)
}

async fn detail_at(base: &str, id: &str) -> Result<Option<Staff>, ApiError> {
    let path = format!("{}/{}", base, urlencoding::encode(id));
    let env: ApiEnvelope<Staff> = gateway::get_json::<_, ()>(&path, None).await?;
    unwrap_envelope(env)
}

async fn create_at(base: &str, dto: &CreateStaffDto) -> Result<Staff, ApiError> {
    let env: ApiEnvelope<Staff> = gateway::post_json(base, dto).await?;
    expect_data(env)
}

async fn update_at(base: &str, id: &str, patch: &serde_json::Value) -> Result<Staff, ApiError> {
    let path = format!("{}/{}", base, urlencoding::encode(id));
    let env: ApiEnvelope<Staff> = gateway::put_json(&path, patch).await?;
    expect_data(env)
}

async fn remove_at(base: &str, id: &str) -> Result<(), ApiError> {
    let path = format!("{}/{}", base, urlencoding::encode(id));
    let env: ApiEnvelope<serde_json::Value> = gateway::delete_json(&path).await?;
    unwrap_envelope(env)?;
    Ok(())
}

pub mod team_leaders {
    use super::*;

    const BASE: &str = "/api/admin/team-leaders";

    pub async fn list(query: &ListQuery) -> Result<Paged<Staff>, ApiError> {
        list_at(BASE, query).await
    }

    pub async fn detail(id: &str) -> Result<Option<Staff>, ApiError> {
        detail_at(BASE, id).await
    }

    pub async fn create(dto: &CreateStaffDto) -> Result<Staff, ApiError> {
        create_at(BASE, dto).await
    }

    pub async fn update(id: &str, patch: &serde_json::Value) -> Result<Staff, ApiError> {
        update_at(BASE, id, patch).await
    }

    pub async fn remove(id: &str) -> Result<(), ApiError> {
        remove_at(BASE, id).await
    }
}

pub mod salespersons {
    use super::*;

    const BASE: &str = "/api/admin/salespersons";

    pub async fn list(query: &ListQuery) -> Result<Paged<Staff>, ApiError> {
        list_at(BASE, query).await
    }

    pub async fn detail(id: &str) -> Result<Option<Staff>, ApiError> {
        detail_at(BASE, id).await
    }

    pub async fn create(dto: &CreateStaffDto) -> Result<Staff, ApiError> {
        create_at(BASE, dto).await
    }

    pub async fn update(id: &str, patch: &serde_json::Value) -> Result<Staff, ApiError> {
        update_at(BASE, id, patch).await
    }

    pub async fn remove(id: &str) -> Result<(), ApiError> {
        remove_at(BASE, id).await
    }
}
