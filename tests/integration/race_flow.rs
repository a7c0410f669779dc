//! Integration tests for the record-then-replay flow
//!
//! Driver -> cloned input -> algorithm -> recorder -> scheduler -> render callback

use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

use parking_lot::Mutex;
use sortrace::{
    Playback, PlaybackScheduler, RaceDriver, RaceSize, SortAlgorithm, SwapRecorder,
};
use tokio_util::sync::CancellationToken;

type Frames = Arc<Mutex<HashMap<SortAlgorithm, Vec<Vec<f64>>>>>;

fn driver_for(algorithms: &[SortAlgorithm], seed: u64) -> (RaceDriver, Frames) {
    let frames: Frames = Arc::default();
    let sink = frames.clone();
    let driver = RaceDriver::new(
        algorithms,
        move |alg| {
            let sink = sink.clone();
            Box::new(move |snapshot: Vec<f64>| {
                sink.lock().entry(alg).or_default().push(snapshot);
            })
        },
        Some(seed),
    )
    .expect("driver");
    (driver, frames)
}

/// The three-element walkthrough for the quadratic sorts
#[test]
fn test_three_element_scenario() {
    let expected: [(SortAlgorithm, Vec<Vec<f64>>); 3] = [
        (
            SortAlgorithm::Bubble,
            vec![vec![1.0, 3.0, 2.0], vec![1.0, 2.0, 3.0]],
        ),
        (
            SortAlgorithm::Selection,
            vec![vec![2.0, 1.0, 3.0], vec![1.0, 2.0, 3.0]],
        ),
        (
            SortAlgorithm::Insertion,
            vec![vec![1.0, 3.0, 2.0], vec![1.0, 2.0, 3.0]],
        ),
    ];

    for (alg, frames) in expected {
        let mut a = vec![3.0, 1.0, 2.0];
        let mut rec = SwapRecorder::new(|_| {});
        alg.run(&mut a, &mut rec);

        assert_eq!(a, vec![1.0, 2.0, 3.0], "{alg}");
        assert_eq!(rec.counter(), 2, "{alg}");
        assert_eq!(rec.snapshots().cloned().collect::<Vec<_>>(), frames, "{alg}");
    }
}

#[test]
fn test_every_algorithm_agrees_on_random_input() {
    let (mut driver, frames) = driver_for(&SortAlgorithm::ALL, 1234);
    let input = driver.generate(RaceSize::new(64).unwrap());
    let summary = driver.run_race_with(&input);
    assert!(summary.results.iter().all(|r| r.sorted));

    while !driver.is_idle() {
        driver.tick();
    }

    let frames = frames.lock();
    let finals: Vec<&Vec<f64>> = SortAlgorithm::ALL
        .iter()
        .map(|alg| frames[alg].last().expect("at least the initial frame"))
        .collect();
    assert!(finals.windows(2).all(|w| w[0] == w[1]));

    // Initial frame plus one per swap
    for result in &summary.results {
        assert_eq!(frames[&result.algorithm].len(), result.swaps + 1);
    }
}

#[test]
fn test_lanes_do_not_share_input_storage() {
    let (mut driver, frames) = driver_for(&[SortAlgorithm::Bubble, SortAlgorithm::Quick], 5);
    let input = vec![0.9, 0.1, 0.5, 0.3];
    driver.run_race_with(&input);

    // Each lane's first frame is the untouched input
    let frames = frames.lock();
    assert_eq!(frames[&SortAlgorithm::Bubble][0], input);
    assert_eq!(frames[&SortAlgorithm::Quick][0], input);
}

#[test]
fn test_restart_mid_playback_discards_old_frames() {
    let (mut driver, frames) = driver_for(&[SortAlgorithm::Insertion], 9);
    driver.run_race_with(&[4.0, 3.0, 2.0, 1.0]);
    driver.tick();
    assert_eq!(driver.remaining(), 5);

    driver.run_race_with(&[2.0, 1.0]);
    assert_eq!(driver.remaining(), 1);
    while !driver.is_idle() {
        driver.tick();
    }

    let frames = frames.lock();
    let lane = &frames[&SortAlgorithm::Insertion];
    assert_eq!(
        lane,
        &vec![
            vec![4.0, 3.0, 2.0, 1.0],
            vec![3.0, 4.0, 2.0, 1.0],
            vec![2.0, 1.0],
            vec![1.0, 2.0],
        ]
    );
}

#[tokio::test]
async fn test_scheduler_drives_whole_race() {
    let (mut driver, frames) = driver_for(&SortAlgorithm::ALL, 77);
    let summary = driver.run_race(RaceSize::new(16).unwrap());

    let report = PlaybackScheduler::new(Duration::from_millis(1))
        .run(&mut driver, &CancellationToken::new())
        .await;

    assert!(!report.cancelled);
    assert_eq!(report.frames, summary.total_swaps());
    // Lanes advance in lockstep, so the longest lane sets the tick count
    let longest = summary.results.iter().map(|r| r.swaps).max().unwrap();
    assert!(report.ticks >= longest);
    assert_eq!(driver.remaining(), 0);

    let frames = frames.lock();
    for alg in SortAlgorithm::ALL {
        let last = frames[&alg].last().unwrap();
        assert!(sortrace::sort::is_sorted(last), "{alg}");
    }
}
