// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use super::*;

#[test]
fn first_offer_is_admitted() {
    let mut cache = JobCache::new();
    let admission = cache.offer(JobRequest::new(1, 40));
    assert!(admission.is_admitted());
    assert_eq!(admission.payload(), JobRequest::new(1, 40));
}

#[test]
fn duplicate_offer_is_not_admitted_and_keeps_original_payload() {
    let mut cache = JobCache::new();
    cache.offer(JobRequest::new(4, 38));

    // A duplicate producer record with a different payload must still
    // resolve to the originally cached payload: the cache is the
    // authority, not whatever bytes arrived second.
    let admission = cache.offer(JobRequest::new(4, 999));
    assert!(!admission.is_admitted());
    assert_eq!(admission.payload(), JobRequest::new(4, 38));
}

#[test]
fn admission_count_matches_unique_job_ids() {
    let mut cache = JobCache::new();
    let mut admitted = 0u32;
    for req in [
        JobRequest::new(4, 38),
        JobRequest::new(4, 38),
        JobRequest::new(5, 1),
    ] {
        if cache.offer(req).is_admitted() {
            admitted += 1;
        }
    }
    assert_eq!(admitted, 2);
    assert_eq!(cache.len(), 2);
}

#[test]
fn get_reflects_cached_payload() {
    let mut cache = JobCache::new();
    cache.offer(JobRequest::new(9, 20));
    assert_eq!(cache.get(9), Some(JobRequest::new(9, 20)));
    assert_eq!(cache.get(10), None);
}

#[test]
fn contains_tracks_admitted_ids() {
    let mut cache = JobCache::new();
    assert!(!cache.contains(1));
    cache.offer(JobRequest::new(1, 0));
    assert!(cache.contains(1));
}
