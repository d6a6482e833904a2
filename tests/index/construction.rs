//! Integration tests for building Instances
//!
//! Tests ordering, deduplication, slot validation, and configuration.

use std::rc::Rc;

use heapdex::foundation::{ErrorContext, ErrorKind, Identified};
use heapdex::index::{BuildStats, IndexConfig, Instances};

use crate::support::{HeapObj, obj};

fn addrs(instances: &Instances<HeapObj>) -> Vec<u64> {
    instances.iter().map(|o| o.addr).collect()
}

// =============================================================================
// Ordering and Deduplication
// =============================================================================

#[test]
fn construction_sorts_ascending() {
    let instances = Instances::new(vec![obj(0x30, "c"), obj(0x10, "a"), obj(0x20, "b")]);
    assert_eq!(addrs(&instances), vec![0x10, 0x20, 0x30]);
}

#[test]
fn duplicate_ids_keep_first() {
    let instances = Instances::new(vec![obj(5, "A"), obj(5, "B"), obj(3, "C")]);

    assert_eq!(instances.len(), 2);
    assert_eq!(addrs(&instances), vec![3, 5]);
    let kept = instances.get(5u64).expect("id 5 is present");
    assert_eq!(kept.tag, "A");
    assert_eq!(instances.iter().filter(|o| o.addr == 5).count(), 1);
}

#[test]
fn high_bit_ids_sort_after_small_ids() {
    let instances = Instances::new(vec![obj(u64::MAX, "max"), obj(0, "zero"), obj(1 << 63, "high")]);
    let tags: Vec<&str> = instances.iter().map(|o| o.tag).collect();
    assert_eq!(tags, vec!["zero", "high", "max"]);
    assert_eq!(instances.position(1u64 << 63), Some(1));
    assert_eq!(instances.first().map(|o| o.tag), Some("zero"));
}

#[test]
fn stats_describe_construction() {
    let instances = Instances::new(vec![obj(1, "a"), obj(1, "b"), obj(1, "c"), obj(2, "d")]);
    assert_eq!(
        *instances.stats(),
        BuildStats {
            input_len: 4,
            duplicates_dropped: 2,
            removed: 0,
        }
    );
}

#[test]
fn empty_input() {
    let instances: Instances<HeapObj> = Instances::new(Vec::new());
    assert_eq!(instances.len(), 0);
    assert!(instances.iter().next().is_none());
    assert!(instances.get(0u64).is_none());
    assert!(instances.get(u64::MAX).is_none());
}

#[test]
fn collect_from_iterator() {
    let instances: Instances<HeapObj> = [9u64, 4, 7, 4]
        .into_iter()
        .map(|addr| obj(addr, "x"))
        .collect();
    assert_eq!(addrs(&instances), vec![4, 7, 9]);
}

#[test]
fn shared_instances_index_through_rc() {
    let a = Rc::new(obj(2, "a"));
    let b = Rc::new(obj(1, "b"));
    let instances = Instances::new(vec![Rc::clone(&a), Rc::clone(&b)]);

    assert!(Rc::ptr_eq(instances.get(2u64).expect("present"), &a));
    assert_eq!(instances.first().map(|o| o.id()), Some(b.id()));
}

#[test]
fn into_vec_returns_sorted_storage() {
    let instances = Instances::new(vec![obj(3, "c"), obj(1, "a")]);
    let items = instances.into_vec();
    assert_eq!(items, vec![obj(1, "a"), obj(3, "c")]);
}

// =============================================================================
// Slot Validation
// =============================================================================

#[test]
fn slots_without_gaps_build() {
    let slots = vec![Some(obj(2, "b")), Some(obj(1, "a"))];
    let instances = Instances::try_from_slots(slots).expect("no empty slots");
    assert_eq!(addrs(&instances), vec![1, 2]);
}

#[test]
fn first_empty_slot_fails_construction() {
    let slots = vec![Some(obj(2, "b")), Some(obj(1, "a")), None, None];
    let err = Instances::try_from_slots(slots).unwrap_err();
    assert!(matches!(err.kind, ErrorKind::MissingInstance { position: 2 }));
}

#[test]
fn slot_errors_accept_context() {
    let slots: Vec<Option<HeapObj>> = vec![None];
    let err = Instances::try_from_slots(slots)
        .map_err(|e| e.with_context(ErrorContext::new().with_source("dump.hprof")))
        .unwrap_err();
    assert_eq!(
        err.context.and_then(|ctx| ctx.source).as_deref(),
        Some("dump.hprof")
    );
}

// =============================================================================
// Configuration
// =============================================================================

#[test]
fn config_is_retained() {
    let instances = Instances::with_config(
        vec![obj(1, "a"), obj(1, "b")],
        IndexConfig::quiet().with_shrink_after_removal(true),
    );
    assert!(!instances.config().trace_duplicates);
    assert!(instances.config().shrink_after_removal);
    assert_eq!(instances.stats().duplicates_dropped, 1);
}
