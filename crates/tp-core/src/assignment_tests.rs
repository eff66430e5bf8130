// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use super::*;

#[test]
fn reconcile_folds_staged_acks_into_the_table() {
    let mut staging = StagingBuffer::new();
    staging.push(WorkerAck::new(100, 7));
    staging.push(WorkerAck::new(101, 9));

    let mut table = AssignmentTable::new();
    table.reconcile(&mut staging);

    assert_eq!(table.owner_of(100), Some(7));
    assert_eq!(table.owner_of(101), Some(9));
    assert!(staging.is_empty());
}

#[test]
fn reconcile_is_idempotent_on_an_empty_buffer() {
    let mut table = AssignmentTable::new();
    table.reconcile(&mut StagingBuffer::new());
    assert!(table.is_empty());
}

#[test]
fn later_ack_for_same_worker_overwrites_earlier_one() {
    let mut staging = StagingBuffer::new();
    staging.push(WorkerAck::new(100, 7));
    staging.push(WorkerAck::new(100, 8));

    let mut table = AssignmentTable::new();
    table.reconcile(&mut staging);

    assert_eq!(table.owner_of(100), Some(8));
}

#[test]
fn missing_entry_means_worker_was_idle() {
    let table = AssignmentTable::new();
    assert_eq!(table.owner_of(999), None);
}

#[test]
fn clear_removes_an_assignment() {
    let mut staging = StagingBuffer::new();
    staging.push(WorkerAck::new(100, 7));
    let mut table = AssignmentTable::new();
    table.reconcile(&mut staging);

    table.clear(100);
    assert_eq!(table.owner_of(100), None);
}
