//! Periodic refetching of dashboard feeds.
//!
//! Each feed owns a `QuerySlot` in a signal plus an interval timer. The timer
//! belongs to the component that called `use_refresh` and is dropped with it.

use std::future::Future;
use std::rc::Rc;

use chrono::{DateTime, Utc};
use gloo_timers::callback::Interval;
use leptos::*;
use shared::{FetchError, QueryKind, QuerySlot, QueryState};

/// Reactive view of one refreshed feed.
#[derive(Clone)]
pub struct RefreshHandle<T: 'static> {
    slot: RwSignal<QuerySlot<T>>,
    run: Rc<dyn Fn(bool)>,
}

impl<T: Clone + 'static> RefreshHandle<T> {
    pub fn state(&self) -> QueryState<T> {
        self.slot.with(|s| s.state().clone())
    }

    pub fn is_fetching(&self) -> bool {
        self.slot.with(|s| s.is_fetching())
    }

    pub fn updated_at(&self) -> Option<DateTime<Utc>> {
        self.slot.with(|s| s.updated_at())
    }

    /// Fetches now, superseding a request still in flight.
    pub fn refetch(&self) {
        (self.run)(false);
    }
}

/// Starts fetching `kind` immediately and again on its refetch interval.
pub fn use_refresh<T, F, Fut>(kind: QueryKind, fetcher: F) -> RefreshHandle<T>
where
    T: Clone + 'static,
    F: Fn() -> Fut + 'static,
    Fut: Future<Output = Result<T, FetchError>> + 'static,
{
    let period_ms = u32::try_from(kind.refetch_interval().as_millis()).unwrap_or(u32::MAX);
    use_refresh_every(kind, period_ms, fetcher)
}

/// Like [`use_refresh`], with an explicit tick period in milliseconds.
pub fn use_refresh_every<T, F, Fut>(
    kind: QueryKind,
    period_ms: u32,
    fetcher: F,
) -> RefreshHandle<T>
where
    T: Clone + 'static,
    F: Fn() -> Fut + 'static,
    Fut: Future<Output = Result<T, FetchError>> + 'static,
{
    let slot = create_rw_signal(QuerySlot::<T>::new());

    let run: Rc<dyn Fn(bool)> = Rc::new(move |scheduled: bool| {
        let mut ticket = None;
        slot.update(|s| {
            ticket = if scheduled {
                s.begin_scheduled()
            } else {
                Some(s.begin())
            };
        });

        let Some(ticket) = ticket else {
            logging::log!("[{}] previous request still running, skipping tick", kind.key());
            return;
        };

        let request = fetcher();
        wasm_bindgen_futures::spawn_local(async move {
            let result = request.await;
            if let Err(ref e) = result {
                logging::warn!("[{}] fetch failed: {}", kind.key(), e);
            }

            // The owner may be gone by now; then the result has nowhere to go.
            let applied = slot
                .try_update(|s| s.resolve(ticket, result, Utc::now()))
                .unwrap_or(false);
            if !applied {
                logging::log!("[{}] dropped stale response", kind.key());
            }
        });
    });

    run(false);

    let tick = Rc::clone(&run);
    let interval = Interval::new(period_ms, move || tick(true));
    on_cleanup(move || drop(interval));

    RefreshHandle { slot, run }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gloo_timers::future::TimeoutFuture;
    use std::cell::Cell;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    async fn test_initial_fetch_and_manual_refetch() {
        let runtime = create_runtime();
        let calls = Rc::new(Cell::new(0_u32));
        let counter = Rc::clone(&calls);

        let handle = use_refresh(QueryKind::Traffic, move || {
            counter.set(counter.get() + 1);
            let n = counter.get();
            async move { Ok::<u32, FetchError>(n) }
        });
        assert!(handle.state().is_loading());
        assert!(handle.is_fetching());

        TimeoutFuture::new(0).await;
        assert_eq!(handle.state().data(), Some(&1));
        assert!(handle.updated_at().is_some());

        handle.refetch();
        assert_eq!(handle.state().data(), Some(&1));
        TimeoutFuture::new(0).await;
        assert_eq!(handle.state().data(), Some(&2));
        assert_eq!(calls.get(), 2);

        runtime.dispose();
    }

    #[wasm_bindgen_test]
    async fn test_failures_stay_in_their_own_slot() {
        let runtime = create_runtime();

        let weather = use_refresh(QueryKind::Weather, || async {
            Err::<u32, FetchError>(FetchError::Status(401))
        });
        let traffic = use_refresh(QueryKind::Traffic, || async { Ok::<u32, FetchError>(55) });

        TimeoutFuture::new(0).await;
        assert_eq!(weather.state().error(), Some("Upstream returned HTTP 401"));
        assert_eq!(traffic.state().data(), Some(&55));

        runtime.dispose();
    }

    #[wasm_bindgen_test]
    async fn test_ticks_wait_for_slow_request_and_stop_on_dispose() {
        let runtime = create_runtime();
        let calls = Rc::new(Cell::new(0_u32));
        let counter = Rc::clone(&calls);

        // Ticks every 50ms; each request takes 120ms.
        let handle = use_refresh_every(QueryKind::Weather, 50, move || {
            counter.set(counter.get() + 1);
            let n = counter.get();
            async move {
                TimeoutFuture::new(120).await;
                Ok::<u32, FetchError>(n)
            }
        });

        // Ticks at 50ms and 100ms find the first request in flight.
        TimeoutFuture::new(105).await;
        assert_eq!(calls.get(), 1);
        assert!(handle.is_fetching());
        assert!(handle.state().is_loading());

        // First result lands at 120ms, the 150ms tick starts the second request
        // and the 200ms tick is skipped again.
        TimeoutFuture::new(120).await;
        assert_eq!(handle.state().data(), Some(&1));
        assert_eq!(calls.get(), 2);
        assert!(handle.is_fetching());

        runtime.dispose();
        TimeoutFuture::new(300).await;
        assert_eq!(calls.get(), 2);
    }
}
