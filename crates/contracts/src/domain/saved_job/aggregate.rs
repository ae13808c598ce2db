use serde::{Deserialize, Serialize};

use crate::shared::ids::JobId;

/// A job listing the applicant has bookmarked, as returned by
/// `GET /savedjob/getSavedJobs/{applicantId}`.
///
/// Field names follow the server's JSON. Display values are read leniently:
/// `null`, a missing field, or a value of an unexpected shape yields the
/// field's empty value instead of failing the record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SavedJob {
    pub id: JobId,
    #[serde(rename = "companyname", default, deserialize_with = "lenient_string")]
    pub company_name: Option<String>,
    #[serde(rename = "jobTitle", default, deserialize_with = "lenient_string")]
    pub job_title: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub location: Option<String>,
    #[serde(rename = "employeeType", default, deserialize_with = "lenient_string")]
    pub employee_type: Option<String>,
    #[serde(default, deserialize_with = "lenient_bool")]
    pub remote: bool,
    #[serde(rename = "minimumExperience", default, deserialize_with = "lenient_f64")]
    pub minimum_experience: Option<f64>,
    #[serde(rename = "maximumExperience", default, deserialize_with = "lenient_f64")]
    pub maximum_experience: Option<f64>,
    #[serde(rename = "minSalary", default, deserialize_with = "lenient_f64")]
    pub min_salary: Option<f64>,
    #[serde(rename = "maxSalary", default, deserialize_with = "lenient_f64")]
    pub max_salary: Option<f64>,
    #[serde(rename = "starRating", default, deserialize_with = "lenient_rating")]
    pub star_rating: u32,
    /// Raw server timestamp, formatted on the client. Epoch milliseconds are
    /// kept as their decimal string; `[y, m, d, ...]` arrays become `YYYY-MM-DD`.
    #[serde(rename = "creationDate", default, deserialize_with = "lenient_timestamp")]
    pub creation_date: Option<String>,
}

impl SavedJob {
    /// Minimal record with only an id, used when building fixtures.
    pub fn with_id(id: impl Into<JobId>) -> Self {
        Self {
            id: id.into(),
            company_name: None,
            job_title: None,
            location: None,
            employee_type: None,
            remote: false,
            minimum_experience: None,
            maximum_experience: None,
            min_salary: None,
            max_salary: None,
            star_rating: 0,
            creation_date: None,
        }
    }
}

/// Any JSON value a display field might arrive as.
#[derive(Deserialize)]
#[serde(untagged)]
enum Loose {
    Bool(bool),
    Signed(i64),
    Unsigned(u64),
    Float(f64),
    Text(String),
    Parts(Vec<i64>),
    #[allow(dead_code)]
    Other(serde::de::IgnoredAny),
}

impl Loose {
    fn as_f64(&self) -> Option<f64> {
        match self {
            Loose::Signed(n) => Some(*n as f64),
            Loose::Unsigned(n) => Some(*n as f64),
            Loose::Float(f) if f.is_finite() => Some(*f),
            Loose::Text(s) => s.trim().parse::<f64>().ok().filter(|f| f.is_finite()),
            _ => None,
        }
    }
}

fn read_loose<'de, D>(deserializer: D) -> Result<Option<Loose>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    Option::<Loose>::deserialize(deserializer)
}

fn lenient_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    Ok(match read_loose(deserializer)? {
        Some(Loose::Text(s)) => Some(s),
        Some(Loose::Bool(b)) => Some(b.to_string()),
        Some(Loose::Signed(n)) => Some(n.to_string()),
        Some(Loose::Unsigned(n)) => Some(n.to_string()),
        Some(Loose::Float(f)) => Some(f.to_string()),
        _ => None,
    })
}

fn lenient_bool<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: serde::Deserializer<'de>,
{
    Ok(match read_loose(deserializer)? {
        Some(Loose::Bool(b)) => b,
        Some(Loose::Text(s)) => s.trim().eq_ignore_ascii_case("true"),
        Some(other) => other.as_f64().is_some_and(|f| f != 0.0),
        None => false,
    })
}

fn lenient_f64<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    Ok(read_loose(deserializer)?.and_then(|v| v.as_f64()))
}

/// Negative or non-numeric ratings show no stars; fractions are truncated.
fn lenient_rating<'de, D>(deserializer: D) -> Result<u32, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let rating = read_loose(deserializer)?
        .and_then(|v| v.as_f64())
        .unwrap_or(0.0);
    Ok(rating.clamp(0.0, u32::MAX as f64) as u32)
}

fn lenient_timestamp<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    Ok(match read_loose(deserializer)? {
        Some(Loose::Text(s)) => Some(s),
        Some(Loose::Signed(n)) => Some(n.to_string()),
        Some(Loose::Unsigned(n)) => Some(n.to_string()),
        Some(Loose::Float(f)) if f.is_finite() => Some((f as i64).to_string()),
        Some(Loose::Parts(parts)) if parts.len() >= 3 => Some(format!(
            "{:04}-{:02}-{:02}",
            parts[0], parts[1], parts[2]
        )),
        _ => None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_full_record() {
        let json = r#"{
            "id": 101,
            "companyname": "Acme Corp",
            "jobTitle": "Backend Engineer",
            "location": "Hyderabad",
            "employeeType": "Full time",
            "remote": true,
            "minimumExperience": 2,
            "maximumExperience": 5,
            "minSalary": 850000,
            "maxSalary": 1200000.5,
            "starRating": 3,
            "creationDate": "2024-01-05",
            "skillsRequired": [{"skillName": "Rust"}]
        }"#;

        let job: SavedJob = serde_json::from_str(json).unwrap();
        assert_eq!(job.id, JobId::new("101"));
        assert_eq!(job.company_name.as_deref(), Some("Acme Corp"));
        assert_eq!(job.job_title.as_deref(), Some("Backend Engineer"));
        assert!(job.remote);
        assert_eq!(job.minimum_experience, Some(2.0));
        assert_eq!(job.max_salary, Some(1_200_000.5));
        assert_eq!(job.star_rating, 3);
        assert_eq!(job.creation_date.as_deref(), Some("2024-01-05"));
    }

    #[test]
    fn test_decode_sparse_record_with_nulls() {
        let json = r#"{"id": "j-9", "companyname": null, "remote": null, "starRating": null}"#;
        let job: SavedJob = serde_json::from_str(json).unwrap();
        assert_eq!(job, SavedJob::with_id("j-9"));
    }

    #[test]
    fn test_decode_list() {
        let json = r#"[{"id": 1}, {"id": 2}, {"id": 3}]"#;
        let jobs: Vec<SavedJob> = serde_json::from_str(json).unwrap();
        assert_eq!(jobs.len(), 3);
        assert_eq!(jobs[2].id.as_str(), "3");
    }

    #[test]
    fn test_odd_field_shapes_keep_every_record() {
        let json = r#"[
            {"id": 1, "jobTitle": "ok"},
            {"id": 2, "starRating": 4.0},
            {"id": 3, "creationDate": 1704412800000},
            {"id": 4, "minSalary": "850000", "maxSalary": " 900000.5 "},
            {"id": 5, "creationDate": [2024, 1, 5], "remote": "true", "location": {"city": "Pune"}}
        ]"#;

        let jobs: Vec<SavedJob> = serde_json::from_str(json).unwrap();
        assert_eq!(jobs.len(), 5);
        assert_eq!(jobs[0].job_title.as_deref(), Some("ok"));
        assert_eq!(jobs[1].star_rating, 4);
        assert_eq!(jobs[2].creation_date.as_deref(), Some("1704412800000"));
        assert_eq!(jobs[3].min_salary, Some(850000.0));
        assert_eq!(jobs[3].max_salary, Some(900000.5));
        assert_eq!(jobs[4].creation_date.as_deref(), Some("2024-01-05"));
        assert!(jobs[4].remote);
        assert_eq!(jobs[4].location, None);
    }

    #[test]
    fn test_unusable_numbers_fall_back_to_empty() {
        let json = r#"{"id": 6, "starRating": -2, "minSalary": "n/a", "minimumExperience": true, "companyname": 42}"#;
        let job: SavedJob = serde_json::from_str(json).unwrap();
        assert_eq!(job.star_rating, 0);
        assert_eq!(job.min_salary, None);
        assert_eq!(job.minimum_experience, None);
        assert_eq!(job.company_name.as_deref(), Some("42"));
    }

    #[test]
    fn test_missing_id_is_rejected() {
        assert!(serde_json::from_str::<SavedJob>(r#"{"jobTitle": "x"}"#).is_err());
    }
}
