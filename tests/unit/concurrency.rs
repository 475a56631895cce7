//! One matcher, many threads.

use nearmatch::{Matcher, Pipeline};
use rayon::prelude::*;
use std::sync::Arc;

fn pairs() -> Vec<(String, String)> {
    (0..2_000)
        .map(|i| (format!("identifier-{i:05}"), format!("IDENTIFIER-{:05}", i ^ 1)))
        .collect()
}

#[test]
fn test_parallel_results_match_sequential() {
    let matcher = Matcher::builder()
        .normalize_candidate(Pipeline::new().then(|s: &str| s.trim().to_string()))
        .build()
        .unwrap();
    let pairs = pairs();

    let sequential: Vec<bool> = pairs.iter().map(|(r, c)| matcher.match_str(r, c)).collect();
    let parallel: Vec<bool> = pairs.par_iter().map(|(r, c)| matcher.match_str(r, c)).collect();

    assert_eq!(sequential, parallel);
    assert!(sequential.iter().all(|&m| m));
}

#[test]
fn test_shared_across_std_threads() {
    let matcher = Arc::new(Matcher::default());
    let handles: Vec<_> = (0..8)
        .map(|t| {
            let matcher = Arc::clone(&matcher);
            std::thread::spawn(move || {
                (0..500).all(|i| {
                    let reference = format!("thread{t}-item{i}");
                    matcher.match_str(&reference, &reference.to_uppercase())
                })
            })
        })
        .collect();

    for handle in handles {
        assert!(handle.join().unwrap());
    }
}
