//! Saved Jobs List - Model Layer
//!
//! Paths and API functions for the applicant's saved jobs

use contracts::domain::saved_job::SavedJob;
use contracts::shared::ids::{ApplicantId, JobId};
use gloo_net::http::Request;

use crate::shared::api_utils::join_url;
use crate::shared::error::ApiError;
use crate::system::auth::ApplicantSession;

pub fn saved_jobs_path(applicant: &ApplicantId) -> String {
    format!(
        "/savedjob/getSavedJobs/{}",
        urlencoding::encode(applicant.as_str())
    )
}

pub fn delete_saved_job_path(applicant: &ApplicantId, job: &JobId) -> String {
    format!(
        "/savedjob/applicants/deletejob/{}/{}",
        urlencoding::encode(applicant.as_str()),
        urlencoding::encode(job.as_str())
    )
}

/// Fetch the applicant's saved jobs
pub async fn fetch_saved_jobs(
    api_base: &str,
    session: &ApplicantSession,
) -> Result<Vec<SavedJob>, ApiError> {
    let auth_header = session.bearer_header().ok_or(ApiError::NotAuthenticated)?;
    let url = join_url(api_base, &saved_jobs_path(session.applicant_id()));

    let response = Request::get(&url)
        .header("Authorization", &auth_header)
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;

    if !response.ok() {
        return Err(ApiError::Status(response.status()));
    }

    let records = response
        .json::<Vec<serde_json::Value>>()
        .await
        .map_err(|e| ApiError::Decode(e.to_string()))?;

    Ok(decode_saved_jobs(records))
}

/// Decode each record on its own; a record that cannot be read is skipped
/// so the rest of the list still shows.
pub fn decode_saved_jobs(records: Vec<serde_json::Value>) -> Vec<SavedJob> {
    records
        .into_iter()
        .enumerate()
        .filter_map(|(index, record)| match serde_json::from_value::<SavedJob>(record) {
            Ok(job) => Some(job),
            Err(e) => {
                log::warn!("Skipping unreadable saved job at position {}: {}", index, e);
                None
            }
        })
        .collect()
}

/// Remove a job from the applicant's saved set
pub async fn delete_saved_job(
    api_base: &str,
    session: &ApplicantSession,
    job_id: &JobId,
) -> Result<(), ApiError> {
    let auth_header = session.bearer_header().ok_or(ApiError::NotAuthenticated)?;
    let url = join_url(
        api_base,
        &delete_saved_job_path(session.applicant_id(), job_id),
    );

    let response = Request::delete(&url)
        .header("Authorization", &auth_header)
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;

    if !response.ok() {
        return Err(ApiError::Status(response.status()));
    }

    Ok(())
}
