//! Driver loop integration tests.
//!
//! Drives `Driver::run` with network-free engines: full a-z iteration,
//! rendering order across iterations, cancellation between and during
//! pipeline runs, and custom strategies registered at runtime.

use std::sync::Arc;
use std::time::Duration;

use dash_search::testing::{FailingEngine, FakeEngine};
use dash_search::{SearchConfig, SearchEngineTrait};
use searchdash::{
    DashError, Driver, DriverConfig, LetterCycler, StrategyRegistry, SubstitutionProcessor,
};
use tokio::time::Instant;
use tokio_util::sync::CancellationToken;

fn search_config(cap: usize) -> SearchConfig {
    SearchConfig {
        max_results_per_engine: cap,
        user_agent: Some("TestBot/1.0".into()),
        ..Default::default()
    }
}

fn engines(list: &[Arc<FakeEngine>]) -> Vec<Arc<dyn SearchEngineTrait>> {
    list.iter()
        .map(|e| Arc::clone(e) as Arc<dyn SearchEngineTrait>)
        .collect()
}

#[tokio::test]
async fn three_placeholders_cycle_through_the_alphabet() {
    let ddg = Arc::new(FakeEngine::new("DuckDuckGo", 1));
    let driver = Driver::new(
        Box::new(LetterCycler::new()),
        engines(&[ddg.clone()]),
        search_config(20),
    );

    let summary = driver
        .run("---", &CancellationToken::new(), &mut Vec::new())
        .await
        .expect("run should succeed");

    assert_eq!(summary.iterations(), 26);
    assert_eq!(&summary.queries[..3], &["aaa", "bbb", "ccc"]);
    assert_eq!(summary.queries[25], "zzz");
    assert_eq!(ddg.queries(), summary.queries);
}

#[tokio::test(start_paused = true)]
async fn every_iteration_renders_engines_in_list_order() {
    // StartPage answers first every time; DuckDuckGo must still print first.
    let ddg = Arc::new(FakeEngine::new("DuckDuckGo", 25).with_delay(Duration::from_millis(5)));
    let sp = Arc::new(FakeEngine::new("StartPage", 3));
    let driver = Driver::new(
        Box::new(LetterCycler::new()),
        engines(&[ddg, sp]),
        search_config(20),
    );

    let mut out = Vec::new();
    driver
        .run("ab-", &CancellationToken::new(), &mut out)
        .await
        .expect("run should succeed");
    let out = String::from_utf8(out).expect("utf8");

    let blocks: Vec<&str> = out.split("Searching for: ").skip(1).collect();
    assert_eq!(blocks.len(), 26);
    for (block, letter) in blocks.iter().zip('a'..='z') {
        assert!(block.starts_with(&format!("ab{letter}\n")));
        let ddg_pos = block
            .find("[DuckDuckGo] Found 20 results:")
            .expect("DuckDuckGo capped at 20");
        let sp_pos = block
            .find("[StartPage] Found 3 results:")
            .expect("StartPage with 3 results");
        assert!(ddg_pos < sp_pos);
    }
}

#[tokio::test]
async fn failing_engine_does_not_stop_iteration() {
    let good = Arc::new(FakeEngine::new("StartPage", 2));
    let list: Vec<Arc<dyn SearchEngineTrait>> = vec![
        Arc::new(FailingEngine::default()),
        Arc::clone(&good) as Arc<dyn SearchEngineTrait>,
    ];
    let driver = Driver::new(Box::new(LetterCycler::new()), list, search_config(20));

    let mut out = Vec::new();
    let summary = driver
        .run("q-", &CancellationToken::new(), &mut out)
        .await
        .expect("run should succeed");
    let out = String::from_utf8(out).expect("utf8");

    assert_eq!(summary.iterations(), 26);
    assert_eq!(good.queries().len(), 26);
    assert_eq!(out.matches("[FailEngine] No results found.").count(), 26);
    assert_eq!(out.matches("[StartPage] Found 2 results:").count(), 26);
}

#[tokio::test]
async fn cancel_between_iterations_keeps_completed_output() {
    let cancel = CancellationToken::new();
    let trigger = cancel.clone();
    let ddg = Arc::new(FakeEngine::new("DuckDuckGo", 1).on_search(move |call| {
        if call == 3 {
            trigger.cancel();
        }
    }));
    let driver = Driver::new(
        Box::new(LetterCycler::new()),
        engines(&[ddg.clone()]),
        search_config(20),
    );

    let mut out = Vec::new();
    let err = driver.run("x-", &cancel, &mut out).await.unwrap_err();
    assert!(matches!(err, DashError::Interrupted));

    assert_eq!(ddg.queries(), vec!["xa", "xb", "xc"]);
    let out = String::from_utf8(out).expect("utf8");
    assert_eq!(out.matches("Searching for: ").count(), 3);
    assert_eq!(out.matches("[DuckDuckGo] Found 1 result:").count(), 3);
    assert!(!out.contains("Searching for: xd"));
}

#[tokio::test(start_paused = true)]
async fn cancel_during_pipeline_aborts_in_flight_search() {
    let slow = Arc::new(FakeEngine::new("DuckDuckGo", 1).with_delay(Duration::from_secs(30)));
    let driver = Driver::new(
        Box::new(LetterCycler::new()),
        engines(&[slow.clone()]),
        search_config(20),
    );

    let cancel = CancellationToken::new();
    let trigger = cancel.clone();
    tokio::spawn(async move {
        tokio::time::sleep(Duration::from_millis(50)).await;
        trigger.cancel();
    });

    let started = Instant::now();
    let mut out = Vec::new();
    let err = driver.run("x-", &cancel, &mut out).await.unwrap_err();

    assert!(matches!(err, DashError::Interrupted));
    assert!(started.elapsed() < Duration::from_secs(1));
    assert!(slow.queries().is_empty(), "in-flight search should be dropped");
    let out = String::from_utf8(out).expect("utf8");
    assert_eq!(out, "Searching for: xa\n");
}

/// Replaces `#` with the digits 0-9.
struct DigitCycler {
    next: u8,
}

impl SubstitutionProcessor for DigitCycler {
    fn name(&self) -> &'static str {
        "digits"
    }

    fn process(&mut self, input: &str) -> searchdash::Result<String> {
        if self.is_done() {
            return Err(DashError::Exhausted("all digits used".into()));
        }
        let digit = char::from(b'0' + self.next);
        self.next += 1;
        Ok(input.replace('#', &digit.to_string()))
    }

    fn is_done(&self) -> bool {
        self.next >= 10
    }

    fn current_symbol(&self) -> &str {
        const DIGITS: &str = "0123456789";
        let i = usize::from(self.next);
        DIGITS.get(i..=i).unwrap_or("")
    }

    fn placeholder(&self) -> Option<char> {
        Some('#')
    }
}

#[tokio::test]
async fn custom_strategy_registered_at_startup() {
    let mut registry = StrategyRegistry::with_builtins();
    registry.register("digits", || Box::new(DigitCycler { next: 0 }));

    let config = DriverConfig {
        strategy: "digits".into(),
        ..Default::default()
    };
    let driver = Driver::from_config(&config, &registry).expect("digits is registered");
    assert_eq!(
        driver.entry_state("room #"),
        searchdash::DriverState::Iterating
    );
    assert_eq!(
        driver.entry_state("room-a"),
        searchdash::DriverState::SingleShot
    );
}
