use std::sync::mpsc::{self, Receiver, TryRecvError};

use crate::api::{FetchError, FetchOutcome};

/// Runs the country fetch at most once per window and hands back its single outcome.
#[derive(Default)]
pub struct FetchCoordinator {
    has_fetched: bool,
    load_rx: Option<Receiver<FetchOutcome>>,
}

impl FetchCoordinator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Spawns `fetch` on a worker thread unless a fetch was already started.
    pub fn start_once<F>(&mut self, fetch: F) -> bool
    where
        F: FnOnce() -> FetchOutcome + Send + 'static,
    {
        if self.has_fetched {
            tracing::debug!("fetch already issued for this window, skipping");
            return false;
        }
        self.has_fetched = true;

        let (tx, rx) = mpsc::channel::<FetchOutcome>();

        std::thread::spawn(move || {
            let result = fetch();
            let _ = tx.send(result);
        });

        self.load_rx = Some(rx);
        tracing::info!("country fetch started");
        true
    }

    /// Returns the terminal outcome once it arrives. Never blocks.
    pub fn poll(&mut self) -> Option<FetchOutcome> {
        let recv_result = match self.load_rx.as_ref() {
            Some(rx) => rx.try_recv(),
            None => return None,
        };

        match recv_result {
            Ok(outcome) => {
                self.load_rx = None;
                Some(outcome)
            }
            Err(TryRecvError::Empty) => None,
            Err(TryRecvError::Disconnected) => {
                self.load_rx = None;
                Some(Err(FetchError::Network(
                    "background fetch stopped unexpectedly".to_string(),
                )))
            }
        }
    }

    pub fn in_flight(&self) -> bool {
        self.load_rx.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;
    use std::time::{Duration, Instant};

    fn wait_for(coordinator: &mut FetchCoordinator) -> FetchOutcome {
        let deadline = Instant::now() + Duration::from_secs(5);
        loop {
            if let Some(outcome) = coordinator.poll() {
                return outcome;
            }
            assert!(Instant::now() < deadline, "fetch never completed");
            std::thread::sleep(Duration::from_millis(5));
        }
    }

    #[test]
    fn starts_only_once() {
        let calls = Arc::new(AtomicUsize::new(0));
        let mut coordinator = FetchCoordinator::new();

        for _ in 0..3 {
            let calls = Arc::clone(&calls);
            coordinator.start_once(move || {
                calls.fetch_add(1, Ordering::SeqCst);
                Ok(vec!["Chile".to_string()])
            });
        }

        assert_eq!(wait_for(&mut coordinator).unwrap(), ["Chile"]);
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn outcome_is_delivered_exactly_once() {
        let mut coordinator = FetchCoordinator::new();
        assert!(coordinator.start_once(|| Ok(Vec::new())));
        assert!(coordinator.in_flight());

        assert!(wait_for(&mut coordinator).unwrap().is_empty());
        assert!(!coordinator.in_flight());
        assert!(coordinator.poll().is_none());
        assert!(!coordinator.start_once(|| Ok(Vec::new())));
        assert!(coordinator.poll().is_none());
    }

    #[test]
    fn errors_pass_through() {
        let mut coordinator = FetchCoordinator::new();
        coordinator.start_once(|| Err(FetchError::Network("timed out".to_string())));

        let err = wait_for(&mut coordinator).unwrap_err();
        assert_eq!(err.to_string(), "Network error: timed out");
    }

    #[test]
    fn worker_panic_becomes_network_error() {
        let mut coordinator = FetchCoordinator::new();
        coordinator.start_once(|| panic!("worker blew up"));

        let err = wait_for(&mut coordinator).unwrap_err();
        assert!(matches!(err, FetchError::Network(_)));
        assert!(coordinator.poll().is_none());
    }

    #[test]
    fn idle_coordinator_has_nothing_to_report() {
        let mut coordinator = FetchCoordinator::new();
        assert!(coordinator.poll().is_none());
        assert!(!coordinator.in_flight());
    }
}
