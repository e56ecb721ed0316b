use std::pin::Pin;
use std::sync::Arc;
use std::task::{Context, Poll};
use std::time::Duration;

use rand::Rng;
use roomsense_api::history::DEFAULT_CAPACITY;
use roomsense_api::models::{ClassifiedReading, SensorKind, ViewSnapshot};
use roomsense_api::{History, SensorDescriptor, classify, history_band, normalized_ratio};
use roomsense_mock::Simulator;
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tokio::time::{self, Instant};
use tokio_stream::Stream;
use tokio_stream::wrappers::WatchStream;
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ViewTiming {
    pub tick_interval: Duration,
    pub loading_delay: Duration,
    pub history_capacity: usize,
}

impl Default for ViewTiming {
    fn default() -> Self {
        Self {
            tick_interval: Duration::from_secs(4),
            loading_delay: Duration::from_secs(1),
            history_capacity: DEFAULT_CAPACITY,
        }
    }
}

/// Owned state of one open sensor view.
#[derive(Debug, Clone)]
pub struct ViewState {
    descriptor: Arc<SensorDescriptor>,
    ready: bool,
    history: History<ClassifiedReading>,
}

impl ViewState {
    pub fn new(descriptor: Arc<SensorDescriptor>, capacity: usize) -> Self {
        Self {
            descriptor,
            ready: false,
            history: History::new(capacity),
        }
    }

    pub fn mark_ready(self) -> Self {
        Self { ready: true, ..self }
    }

    /// Generates one reading, classifies it and appends it to the history.
    pub fn tick<R: Rng>(self, simulator: &mut Simulator<R>) -> Self {
        let reading = simulator.reading(self.descriptor.kind);
        let threshold = classify(reading.value, &self.descriptor.thresholds);
        let classified = ClassifiedReading {
            label: threshold.label.clone(),
            band: threshold.band,
            history_band: history_band(reading.value, &self.descriptor.thresholds),
            reading,
        };

        Self {
            history: self.history.push(classified),
            ..self
        }
    }

    pub fn current(&self) -> Option<&ClassifiedReading> {
        self.history.latest()
    }

    pub fn snapshot(&self) -> ViewSnapshot {
        let current = self.current().cloned();
        let ratio = current
            .as_ref()
            .map(|c| normalized_ratio(c.reading.value, &self.descriptor.thresholds))
            .unwrap_or(0.0);

        ViewSnapshot {
            kind: self.descriptor.kind,
            ready: self.ready,
            current,
            ratio,
            history: self.history.iter().cloned().collect(),
        }
    }
}

/// A running sensor view. The timer task is aborted when the session is dropped.
pub struct ViewSession {
    id: Uuid,
    kind: SensorKind,
    receiver: watch::Receiver<ViewSnapshot>,
    task: JoinHandle<()>,
}

impl ViewSession {
    pub fn open<R>(descriptor: Arc<SensorDescriptor>, timing: ViewTiming, rng: R) -> Self
    where
        R: Rng + Send + 'static,
    {
        let id = Uuid::new_v4();
        let kind = descriptor.kind;
        let state = ViewState::new(descriptor, timing.history_capacity);
        let (sender, receiver) = watch::channel(state.snapshot());

        let task = tokio::spawn(run_view(id, state, timing, Simulator::new(rng), sender));

        tracing::debug!(session_id = %id, "Opened {kind} view");

        Self {
            id,
            kind,
            receiver,
            task,
        }
    }

    pub fn subscribe(&self) -> watch::Receiver<ViewSnapshot> {
        self.receiver.clone()
    }

    pub fn snapshot(&self) -> ViewSnapshot {
        self.receiver.borrow().clone()
    }

    /// Stream of snapshots, starting with the current one, that keeps the
    /// session open for as long as it is alive.
    pub fn into_stream(self) -> SnapshotStream {
        SnapshotStream {
            inner: WatchStream::new(self.receiver.clone()),
            _session: self,
        }
    }
}

impl Drop for ViewSession {
    fn drop(&mut self) {
        self.task.abort();
        tracing::debug!(session_id = %self.id, "Closed {} view", self.kind);
    }
}

pub struct SnapshotStream {
    inner: WatchStream<ViewSnapshot>,
    _session: ViewSession,
}

impl Stream for SnapshotStream {
    type Item = ViewSnapshot;

    fn poll_next(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<Self::Item>> {
        Pin::new(&mut self.inner).poll_next(cx)
    }
}

async fn run_view<R: Rng>(
    id: Uuid,
    mut state: ViewState,
    timing: ViewTiming,
    mut simulator: Simulator<R>,
    sender: watch::Sender<ViewSnapshot>,
) {
    let start = Instant::now();
    let loading = time::sleep_until(start + timing.loading_delay);
    tokio::pin!(loading);
    let mut ticker = time::interval_at(start + timing.tick_interval, timing.tick_interval);

    loop {
        tokio::select! {
            _ = &mut loading, if !state.ready => {
                state = state.mark_ready();
            }
            _ = ticker.tick() => {
                state = state.tick(&mut simulator);
                tracing::trace!(session_id = %id, "Tick: {:?}", state.current().map(|c| c.reading.value));
            }
        }

        if sender.send(state.snapshot()).is_err() {
            break;
        }
    }
}

#[cfg(test)]
mod tests {
    use roomsense_api::SensorCatalog;
    use roomsense_api::models::ColorBand;

    use super::*;

    fn temperature() -> Arc<SensorDescriptor> {
        SensorCatalog::builtin().get(SensorKind::Temperature).clone()
    }

    #[test]
    fn test_new_state_is_empty_and_loading() {
        let snapshot = ViewState::new(temperature(), 10).snapshot();

        assert!(!snapshot.ready);
        assert!(snapshot.current.is_none());
        assert!(snapshot.history.is_empty());
        assert_eq!(snapshot.ratio, 0.0);
    }

    #[test]
    fn test_tick_classifies_and_records() {
        let mut simulator = Simulator::seeded(11);
        let state = ViewState::new(temperature(), 10).tick(&mut simulator);
        let snapshot = state.snapshot();

        let current = snapshot.current.unwrap();
        let expected = classify(current.reading.value, &temperature().thresholds).clone();
        assert_eq!(current.label, expected.label);
        assert_eq!(current.band, expected.band);
        assert_eq!(snapshot.history, vec![current.clone()]);
        assert!(snapshot.ratio > 0.0 && snapshot.ratio <= 1.0);
    }

    #[test]
    fn test_history_keeps_last_ten_ticks() {
        let mut simulator = Simulator::seeded(99);
        let mut reference = Simulator::seeded(99);
        let expected: Vec<u32> = (0..15)
            .map(|_| reference.generate(SensorKind::Temperature))
            .skip(5)
            .collect();

        let state = (0..15).fold(ViewState::new(temperature(), 10), |state, _| {
            state.tick(&mut simulator)
        });
        let values: Vec<u32> = state
            .snapshot()
            .history
            .iter()
            .map(|c| c.reading.value)
            .collect();

        assert_eq!(values, expected);
        assert_eq!(state.current().map(|c| c.reading.value), expected.last().copied());
    }

    #[test]
    fn test_tick_sets_history_band() {
        let light = SensorCatalog::builtin().get(SensorKind::Light).clone();
        let mut simulator = Simulator::seeded(21);
        let state = (0..50).fold(ViewState::new(light.clone(), 50), |state, _| {
            state.tick(&mut simulator)
        });

        for entry in state.snapshot().history {
            let expected = history_band(entry.reading.value, &light.thresholds);
            assert_eq!(entry.history_band, expected);
            if (50..200).contains(&entry.reading.value) {
                assert_eq!(entry.band, ColorBand::Gray);
                assert_eq!(entry.history_band, ColorBand::Blue);
            }
        }
    }

    #[test]
    fn test_mark_ready_keeps_history() {
        let mut simulator = Simulator::seeded(5);
        let state = ViewState::new(temperature(), 10)
            .tick(&mut simulator)
            .mark_ready();
        let snapshot = state.snapshot();

        assert!(snapshot.ready);
        assert_eq!(snapshot.history.len(), 1);
    }
}
