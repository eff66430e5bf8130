// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Job sequence generation: an arbitrary finite sequence of job records
//! followed by a single terminator.

use tp_core::JobRequest;

/// The fixed 12-job illustrative sequence, used as the default sequence
/// when no synthetic count is requested.
pub const DEFAULT_JOBS: &[(i32, i32)] = &[
    (1, 40),
    (2, 41),
    (3, 42),
    (4, 43),
    (5, 44),
    (6, 45),
    (7, 45),
    (8, 41),
    (9, 42),
    (10, 43),
    (11, 44),
    (12, 45),
];

/// Build the default job sequence as [`JobRequest`]s.
pub fn default_jobs() -> Vec<JobRequest> {
    DEFAULT_JOBS
        .iter()
        .map(|&(job_id, data)| JobRequest::new(job_id, data))
        .collect()
}

/// Generate `count` synthetic jobs with varying payloads, `job_id`
/// running `1..=count`.
pub fn synthetic_jobs(count: usize) -> Vec<JobRequest> {
    (1..=count as i32)
        .map(|job_id| JobRequest::new(job_id, 30 + (job_id % 10)))
        .collect()
}

/// Duplicate the first job in `jobs`: the job cache must still admit it
/// only once.
pub fn with_leading_duplicate(mut jobs: Vec<JobRequest>) -> Vec<JobRequest> {
    if let Some(first) = jobs.first().copied() {
        jobs.insert(1, first);
    }
    jobs
}

/// Parse a `job_id:data,job_id:data,...` list, letting integration tests
/// pin an exact job sequence instead of only the default list or synthetic
/// counts.
pub fn parse_job_list(spec: &str) -> Result<Vec<JobRequest>, String> {
    spec.split(',')
        .map(|pair| {
            let (job_id, data) = pair
                .split_once(':')
                .ok_or_else(|| format!("expected `job_id:data`, got `{pair}`"))?;
            let job_id: i32 = job_id.trim().parse().map_err(|_| format!("invalid job_id in `{pair}`"))?;
            let data: i32 = data.trim().parse().map_err(|_| format!("invalid data in `{pair}`"))?;
            Ok(JobRequest::new(job_id, data))
        })
        .collect()
}

#[cfg(test)]
#[path = "jobs_tests.rs"]
mod tests;
