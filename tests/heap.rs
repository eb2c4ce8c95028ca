use std::collections::HashSet;

use helpers::streams::{integer_stream, reference_smallest, seeded_rng};
use limited_queue::{
    heap::ops::is_heap, BoundedTopKHeap, ByKey, Compare, FnCompare, NaturalOrder, ReverseOrder,
};
use log::info;
use ntest::timeout;
use rstest::rstest;

/// Initialize the logger
fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Pops everything, worst first
fn drain<T, C: Compare<T>>(heap: &mut BoundedTopKHeap<T, C>) -> Vec<T> {
    let mut out = Vec::with_capacity(heap.len());
    while let Some(value) = heap.pop() {
        out.push(value);
    }
    out
}

fn sorted<T: Ord + Clone>(values: &[T]) -> Vec<T> {
    let mut values = values.to_vec();
    values.sort();
    values
}

#[test]
fn test_scenarios() {
    init_logger();

    let mut heap = BoundedTopKHeap::new(3);
    heap.extend([5, 1, 9, 2, 7, 0]);
    assert_eq!(drain(&mut heap), vec![2, 1, 0]);

    let mut heap = BoundedTopKHeap::new(1);
    heap.push(5);
    heap.push(3);
    assert_eq!(heap.as_slice(), &[3]);

    let mut heap = BoundedTopKHeap::new(3);
    heap.extend([5, 4, 3]);
    assert!(!heap.push(6));
    assert_eq!(sorted(heap.as_slice()), vec![3, 4, 5]);

    heap.set_max_size(1);
    assert_eq!(heap.as_slice(), &[3]);

    let mut heap: BoundedTopKHeap<i32> = BoundedTopKHeap::new(3);
    heap.clear();
    assert!(heap.is_empty());
    assert_eq!(heap.len(), 0);
}

#[rstest]
#[case(1, 100, 10, Some(1))]
#[case(3, 1000, 1000, Some(2))]
#[case(10, 1000, 20, Some(3))]
#[case(64, 10_000, 1_000_000, None)]
#[case(500, 100, 50, Some(4))]
fn test_retains_smallest(
    #[case] max_size: usize,
    #[case] count: usize,
    #[case] max_value: i64,
    #[case] seed: Option<u64>,
) {
    init_logger();
    let mut rng = seeded_rng(seed);
    let values = integer_stream(count, max_value, &mut rng);

    let mut heap = BoundedTopKHeap::new(max_size);
    for &value in values.iter() {
        heap.push(value);
        assert!(heap.len() <= heap.max_size());
        assert!(is_heap(heap.as_slice(), heap.compare()));
    }

    // The root is never better than the other elements
    let top = *heap.top().expect("heap should not be empty");
    assert!(heap.iter().all(|v| *v <= top));

    let expected = reference_smallest(&values, max_size, |a, b| a < b);
    info!("Retained {} out of {} values", heap.len(), values.len());
    assert_eq!(sorted(heap.as_slice()), expected);

    // Draining yields the worst first
    let mut drained = drain(&mut heap);
    drained.reverse();
    assert_eq!(drained, expected);
}

#[rstest]
#[case(5, 3)]
#[case(5, 1)]
#[case(100, 90)]
#[case(100, 2)]
#[case(100, 0)]
fn test_shrink_keeps_best(#[case] max_size: usize, #[case] new_max_size: usize) {
    init_logger();
    let mut rng = seeded_rng(Some(42));
    let values = integer_stream(max_size * 3, 1000, &mut rng);

    let mut heap = BoundedTopKHeap::with_compare(max_size, ReverseOrder);
    heap.extend(values.iter().copied());
    let retained = heap.as_slice().to_vec();

    heap.set_max_size(new_max_size);
    let new_max_size = new_max_size.max(1);
    assert_eq!(heap.max_size(), new_max_size);
    assert!(is_heap(heap.as_slice(), heap.compare()));

    let expected = reference_smallest(&retained, new_max_size, |a, b| a > b);
    assert_eq!(heap.into_sorted_vec(), expected);
}

#[rstest]
#[case(3, 3)]
#[case(3, 10)]
fn test_grow_is_non_destructive(#[case] max_size: usize, #[case] new_max_size: usize) {
    let mut heap = BoundedTopKHeap::new(max_size);
    heap.extend([8, 3, 6, 1, 9]);
    let before = heap.as_slice().to_vec();

    heap.set_max_size(new_max_size);
    assert_eq!(heap.as_slice(), before.as_slice());
    assert_eq!(heap.max_size(), new_max_size);
}

#[test]
fn test_redundant_push_is_ignored() {
    let mut heap = BoundedTopKHeap::new(4);
    heap.extend([10, 20, 30, 40]);
    let before = heap.as_slice().to_vec();

    for value in [40, 41, 100, 1000] {
        assert!(!heap.admits(&value));
        assert!(!heap.push(value));
        assert_eq!(heap.as_slice(), before.as_slice());
    }
}

#[test]
fn test_swap_exchanges_state() {
    let mut a = BoundedTopKHeap::new(2);
    a.extend([4, 2, 8]);
    let mut b = BoundedTopKHeap::new(6);
    b.extend([1, 5, 3]);

    let (a_before, b_before) = (a.as_slice().to_vec(), b.as_slice().to_vec());
    a.swap(&mut b);

    assert_eq!(a.as_slice(), b_before.as_slice());
    assert_eq!(a.max_size(), 6);
    assert_eq!(b.as_slice(), a_before.as_slice());
    assert_eq!(b.max_size(), 2);

    // Both are still usable
    assert!(b.push(1));
    assert_eq!(sorted(b.as_slice()), vec![1, 2]);
    assert!(a.push(0));
    assert_eq!(a.len(), 4);
}

#[test]
#[timeout(10000)]
fn test_merge_workers() {
    let mut rng = seeded_rng(Some(7));
    let values = integer_stream(3000, 100_000, &mut rng);

    let mut merged = BoundedTopKHeap::new(25);
    for chunk in values.chunks(1000) {
        let mut worker = BoundedTopKHeap::new(25);
        worker.extend(chunk.iter().copied());
        merged.extend(worker);
    }

    assert_eq!(
        merged.into_sorted_vec(),
        reference_smallest(&values, 25, |a, b| a < b)
    );
}

#[test]
fn test_custom_comparators() {
    let words = ["pear", "fig", "banana", "kiwi", "apple", "plum"];

    let mut shortest = BoundedTopKHeap::with_compare(2, ByKey(|w: &&str| w.len()));
    shortest.extend(words.iter().copied());
    let lengths: HashSet<usize> = shortest.iter().map(|w| w.len()).collect();
    assert_eq!(lengths.len(), 2);
    assert!(lengths.contains(&3));
    assert!(lengths.contains(&4));

    let mut latest = BoundedTopKHeap::with_compare(3, FnCompare(|a: &&str, b: &&str| a > b));
    latest.extend(words.iter().copied());
    assert_eq!(latest.top(), Some(&"kiwi"));
    assert_eq!(latest.into_sorted_vec(), vec!["plum", "pear", "kiwi"]);

    let natural: BoundedTopKHeap<f64, NaturalOrder> = BoundedTopKHeap::new(2);
    assert!(natural.admits(&f64::INFINITY));
}

#[test]
fn test_reuse_after_clear() {
    let mut heap = BoundedTopKHeap::new(2);
    heap.extend([3, 1, 2]);
    heap.clear();
    assert!(heap.is_empty());
    assert_eq!(heap.max_size(), 2);

    heap.extend([9, 7]);
    assert_eq!(heap.top(), Some(&9));
    assert_eq!((&heap).into_iter().count(), 2);
}
