use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::jobs::repo::JobStatus;

#[derive(Debug, Deserialize)]
pub struct CreateJobRequest {
    pub company: String,
    pub position: String,
    #[serde(default)]
    pub status: JobStatus,
}

/// Partial update; only supplied fields change. Owner and id are immutable,
/// so there are no fields for them to arrive through.
#[derive(Debug, Default, Deserialize)]
pub struct UpdateJobRequest {
    pub company: Option<String>,
    pub position: Option<String>,
    pub status: Option<JobStatus>,
}

#[derive(Debug, Serialize)]
pub struct DeletedJob {
    pub id: Uuid,
}
