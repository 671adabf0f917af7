//! Live cricket scoreboard.
//!
//! A `ScorePublisher` pulls the latest score from a `ScoreSource` and pushes
//! each snapshot to every registered `ScoreSubscriber`:
//! - `AverageScoreDisplay`: run rate and projected 50-over total
//! - `CurrentScoreDisplay`: the raw score as received

pub mod displays;
pub mod source;

use std::cell::RefCell;
use std::rc::{Rc, Weak};

use tracing::{debug, info};

use crate::types::{DemoError, ScoreSnapshot};

/// Anything that wants to be told about a new score.
///
/// Implementors render their own view inside `receive`. An error aborts the
/// notification round: subscribers registered later are not told.
pub trait ScoreSubscriber {
    /// Consume a fresh snapshot and render the derived view.
    fn receive(&mut self, snapshot: &ScoreSnapshot) -> Result<(), DemoError>;

    /// Display name for logging.
    fn name(&self) -> &str;
}

/// Where the publisher gets its numbers from.
///
/// The demo uses a fixed feed; tests inject mocks.
#[cfg_attr(test, mockall::automock)]
pub trait ScoreSource {
    /// Read the latest score from the stadium.
    fn latest(&self) -> Result<ScoreSnapshot, DemoError>;
}

// ---------------------------------------------------------------------------
// Publisher
// ---------------------------------------------------------------------------

/// Holds the current score and the ordered list of subscribers.
///
/// Subscribers are held weakly: the publisher never keeps one alive, and
/// dropped subscribers are pruned on the next refresh.
pub struct ScorePublisher {
    source: Box<dyn ScoreSource>,
    current: Option<ScoreSnapshot>,
    subscribers: Vec<Weak<RefCell<dyn ScoreSubscriber>>>,
}

impl ScorePublisher {
    pub fn new(source: Box<dyn ScoreSource>) -> Self {
        Self {
            source,
            current: None,
            subscribers: Vec::new(),
        }
    }

    /// Append a subscriber to the notification list.
    ///
    /// Returns `false` (and changes nothing) if it is already registered, so a
    /// subscriber is never told twice about the same snapshot. Identity is the
    /// `Rc` allocation, not the subscriber's name.
    pub fn register<S>(&mut self, subscriber: &Rc<RefCell<S>>) -> bool
    where
        S: ScoreSubscriber + 'static,
    {
        let weak: Weak<RefCell<S>> = Rc::downgrade(subscriber);
        let weak: Weak<RefCell<dyn ScoreSubscriber>> = weak;
        if self.position_of(&weak).is_some() {
            debug!(subscriber = %subscriber.borrow().name(), "Already registered, ignoring");
            return false;
        }

        self.subscribers.push(weak);
        info!(
            subscriber = %subscriber.borrow().name(),
            total = self.subscribers.len(),
            "Subscriber registered"
        );
        true
    }

    /// Remove a subscriber. Returns `false` if it was not registered.
    pub fn unregister<S>(&mut self, subscriber: &Rc<RefCell<S>>) -> bool
    where
        S: ScoreSubscriber + 'static,
    {
        let weak: Weak<RefCell<S>> = Rc::downgrade(subscriber);
        let weak: Weak<RefCell<dyn ScoreSubscriber>> = weak;
        match self.position_of(&weak) {
            Some(idx) => {
                self.subscribers.remove(idx);
                info!(
                    subscriber = %subscriber.borrow().name(),
                    total = self.subscribers.len(),
                    "Subscriber unregistered"
                );
                true
            }
            None => false,
        }
    }

    /// Pull the latest score, store it, and push it to every subscriber in
    /// registration order. Returns how many subscribers were notified.
    pub fn refresh_and_notify(&mut self) -> Result<usize, DemoError> {
        let snapshot = self.source.latest()?;
        self.current = Some(snapshot);
        debug!(%snapshot, "Score refreshed");

        self.notify(&snapshot)
    }

    /// The most recent snapshot, if any refresh has happened yet.
    pub fn snapshot(&self) -> Option<ScoreSnapshot> {
        self.current
    }

    /// Number of registered subscribers that are still alive.
    pub fn subscriber_count(&self) -> usize {
        self.subscribers.iter().filter(|w| w.strong_count() > 0).count()
    }

    fn notify(&mut self, snapshot: &ScoreSnapshot) -> Result<usize, DemoError> {
        let before = self.subscribers.len();
        self.subscribers.retain(|w| w.strong_count() > 0);
        if self.subscribers.len() < before {
            debug!(pruned = before - self.subscribers.len(), "Dropped subscribers pruned");
        }

        let live: Vec<Rc<RefCell<dyn ScoreSubscriber>>> =
            self.subscribers.iter().filter_map(Weak::upgrade).collect();

        for subscriber in &live {
            let mut subscriber = subscriber.borrow_mut();
            debug!(subscriber = %subscriber.name(), "Notifying");
            subscriber.receive(snapshot)?;
        }

        info!(notified = live.len(), %snapshot, "Subscribers notified");
        Ok(live.len())
    }

    fn position_of(&self, weak: &Weak<RefCell<dyn ScoreSubscriber>>) -> Option<usize> {
        self.subscribers.iter().position(|w| Weak::ptr_eq(w, weak))
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
