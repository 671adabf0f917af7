//! Scoreboard flow: publisher, fixed feed, and both displays together.

use std::cell::RefCell;
use std::rc::Rc;

use dispatch_patterns::scoreboard::displays::{AverageScoreDisplay, CurrentScoreDisplay};
use dispatch_patterns::scoreboard::source::FixedScoreSource;
use dispatch_patterns::scoreboard::{ScorePublisher, ScoreSource, ScoreSubscriber};
use dispatch_patterns::types::{DemoError, ScoreSnapshot};

/// A feed that replays a fixed list of scores, then repeats the last one.
struct ReplaySource {
    scores: Vec<(u32, u8, f64)>,
    cursor: RefCell<usize>,
}

impl ReplaySource {
    fn new(scores: Vec<(u32, u8, f64)>) -> Self {
        Self { scores, cursor: RefCell::new(0) }
    }
}

impl ScoreSource for ReplaySource {
    fn latest(&self) -> Result<ScoreSnapshot, DemoError> {
        let mut cursor = self.cursor.borrow_mut();
        let (runs, wickets, overs) = self.scores[(*cursor).min(self.scores.len() - 1)];
        *cursor += 1;
        ScoreSnapshot::new(runs, wickets, overs)
    }
}

/// Counts how many snapshots it saw.
#[derive(Default)]
struct Tally {
    seen: usize,
}

impl ScoreSubscriber for Tally {
    fn receive(&mut self, _snapshot: &ScoreSnapshot) -> Result<(), DemoError> {
        self.seen += 1;
        Ok(())
    }

    fn name(&self) -> &str {
        "tally"
    }
}

#[test]
fn test_reference_round() {
    let average = Rc::new(RefCell::new(AverageScoreDisplay::new()));
    let current = Rc::new(RefCell::new(CurrentScoreDisplay::new()));

    let mut publisher = ScorePublisher::new(Box::new(FixedScoreSource::default()));
    publisher.register(&average);
    publisher.register(&current);

    assert_eq!(publisher.refresh_and_notify().unwrap(), 2);

    let projection = average.borrow().projection().unwrap();
    assert!((projection.run_rate - 90.0 / 10.2).abs() < 1e-9);
    assert_eq!(projection.predicted_score, 441);
    assert!(average.borrow().to_string().contains("Run Rate: 8.8235"));
    assert_eq!(
        current.borrow().to_string(),
        "Current Score:\nRuns: 90, Wickets: 2, Overs: 10.2"
    );

    publisher.unregister(&average);
    assert_eq!(publisher.refresh_and_notify().unwrap(), 1);
}

#[test]
fn test_repeated_refresh_renders_identically() {
    let average = Rc::new(RefCell::new(AverageScoreDisplay::new()));
    let current = Rc::new(RefCell::new(CurrentScoreDisplay::new()));

    let mut publisher = ScorePublisher::new(Box::new(FixedScoreSource::default()));
    publisher.register(&average);
    publisher.register(&current);

    publisher.refresh_and_notify().unwrap();
    let first = (average.borrow().to_string(), current.borrow().to_string());

    publisher.refresh_and_notify().unwrap();
    let second = (average.borrow().to_string(), current.borrow().to_string());

    assert_eq!(first, second);
}

#[test]
fn test_unregistered_display_keeps_stale_view() {
    let average = Rc::new(RefCell::new(AverageScoreDisplay::new()));
    let current = Rc::new(RefCell::new(CurrentScoreDisplay::new()));

    let source = ReplaySource::new(vec![(90, 2, 10.2), (120, 3, 15.0)]);
    let mut publisher = ScorePublisher::new(Box::new(source));
    publisher.register(&average);
    publisher.register(&current);

    publisher.refresh_and_notify().unwrap();
    publisher.unregister(&average);
    publisher.refresh_and_notify().unwrap();

    // Average display missed the second score.
    assert_eq!(average.borrow().projection().unwrap().predicted_score, 441);
    assert_eq!(current.borrow().last_snapshot().unwrap().runs(), 120);
    assert_eq!(publisher.snapshot().unwrap().overs(), 15.0);
}

#[test]
fn test_register_unregister_sequence() {
    let a = Rc::new(RefCell::new(Tally::default()));
    let b = Rc::new(RefCell::new(Tally::default()));
    let c = Rc::new(RefCell::new(Tally::default()));

    let mut publisher = ScorePublisher::new(Box::new(FixedScoreSource::default()));
    publisher.register(&a);
    publisher.register(&b);
    publisher.refresh_and_notify().unwrap();

    publisher.unregister(&a);
    publisher.register(&c);
    publisher.refresh_and_notify().unwrap();

    publisher.unregister(&b);
    publisher.unregister(&b);
    publisher.refresh_and_notify().unwrap();

    assert_eq!(a.borrow().seen, 1);
    assert_eq!(b.borrow().seen, 2);
    assert_eq!(c.borrow().seen, 2);
}

#[test]
fn test_zero_overs_stops_later_displays() {
    let average = Rc::new(RefCell::new(AverageScoreDisplay::new()));
    let current = Rc::new(RefCell::new(CurrentScoreDisplay::new()));

    let mut publisher = ScorePublisher::new(Box::new(ReplaySource::new(vec![(0, 0, 0.0)])));
    publisher.register(&average);
    publisher.register(&current);

    let err = publisher.refresh_and_notify().unwrap_err();
    assert_eq!(err, DemoError::DivisionUndefined { runs: 0, wickets: 0 });
    assert!(current.borrow().last_snapshot().is_none());
}
