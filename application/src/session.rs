//! Bounded tracker for in-progress suggestion exchanges.
//!
//! Keyed by the opaque identifier of the request that opened the
//! exchange; follow-up requests must present that originating identifier.
//! Unlike the unbounded map it replaces, the tracker expires idle entries
//! and caps its size, evicting the longest-idle session when full.

use noitu_domain::{Exchange, Word};
use std::collections::HashMap;
use std::sync::Mutex;
use std::time::{Duration, Instant};

struct Tracked {
    exchange: Exchange,
    last_active: Instant,
}

/// Concurrent map from session identifier to exchange state.
pub struct SessionTracker {
    sessions: Mutex<HashMap<String, Tracked>>,
    ttl: Duration,
    capacity: usize,
}

impl SessionTracker {
    pub fn new(ttl: Duration, capacity: usize) -> Self {
        Self {
            sessions: Mutex::new(HashMap::new()),
            ttl,
            capacity: capacity.max(1),
        }
    }

    /// Track a new exchange under `id`, evicting expired entries first
    /// and the longest-idle entry if the cap would be exceeded.
    pub fn start(&self, id: impl Into<String>, exchange: Exchange) {
        let mut sessions = self.sessions.lock().unwrap();
        let now = Instant::now();
        sessions.retain(|_, t| now.duration_since(t.last_active) < self.ttl);
        while sessions.len() >= self.capacity {
            let oldest = sessions
                .iter()
                .min_by_key(|(_, t)| t.last_active)
                .map(|(id, _)| id.clone());
            match oldest {
                Some(id) => sessions.remove(&id),
                None => break,
            };
        }
        sessions.insert(
            id.into(),
            Tracked {
                exchange,
                last_active: now,
            },
        );
    }

    /// The exchange tracked under `id`, if present and not expired.
    /// Refreshes the idle clock.
    pub fn get(&self, id: &str) -> Option<Exchange> {
        let mut sessions = self.sessions.lock().unwrap();
        let now = Instant::now();
        let tracked = sessions.get_mut(id)?;
        if now.duration_since(tracked.last_active) >= self.ttl {
            sessions.remove(id);
            return None;
        }
        tracked.last_active = now;
        Some(tracked.exchange.clone())
    }

    /// Append a word to the exchange tracked under `id`. Returns `false`
    /// when the session is gone.
    pub fn append(&self, id: &str, word: Word) -> bool {
        let mut sessions = self.sessions.lock().unwrap();
        match sessions.get_mut(id) {
            Some(tracked) => {
                tracked.exchange.record(word);
                tracked.last_active = Instant::now();
                true
            }
            None => false,
        }
    }

    pub fn len(&self) -> usize {
        self.sessions.lock().unwrap().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn word(s: &str) -> Word {
        Word::parse(s).unwrap()
    }

    fn tracker() -> SessionTracker {
        SessionTracker::new(Duration::from_secs(60), 8)
    }

    #[test]
    fn start_then_get_round_trips() {
        let tracker = tracker();
        let mut exchange = Exchange::new("con");
        exchange.record(word("con meo"));
        tracker.start("id-1", exchange.clone());

        assert_eq!(tracker.get("id-1"), Some(exchange));
        assert_eq!(tracker.get("id-2"), None);
    }

    #[test]
    fn append_extends_the_history() {
        let tracker = tracker();
        tracker.start("id-1", Exchange::new("con"));

        assert!(tracker.append("id-1", word("con meo")));
        assert!(tracker.append("id-1", word("con cho")));
        assert!(!tracker.append("missing", word("con ga")));

        let exchange = tracker.get("id-1").unwrap();
        assert_eq!(exchange.offered().len(), 2);
    }

    #[test]
    fn expired_sessions_are_gone() {
        let tracker = SessionTracker::new(Duration::ZERO, 8);
        tracker.start("id-1", Exchange::new("con"));
        assert_eq!(tracker.get("id-1"), None);
    }

    #[test]
    fn capacity_evicts_the_longest_idle_session() {
        let tracker = SessionTracker::new(Duration::from_secs(60), 2);
        tracker.start("a", Exchange::new("an"));
        std::thread::sleep(Duration::from_millis(5));
        tracker.start("b", Exchange::new("bo"));
        std::thread::sleep(Duration::from_millis(5));
        // Touch "a" so "b" is the longest idle.
        tracker.get("a");
        tracker.start("c", Exchange::new("ca"));

        assert_eq!(tracker.len(), 2);
        assert!(tracker.get("a").is_some());
        assert!(tracker.get("b").is_none());
        assert!(tracker.get("c").is_some());
    }
}
