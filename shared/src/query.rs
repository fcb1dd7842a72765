//! Per-kind cache slots for periodically refreshed data.
//!
//! A slot hands out monotonically increasing tickets when a request starts and
//! only accepts the result carrying the latest ticket, so a slow response can
//! never overwrite a newer one.

use std::time::Duration;

use chrono::{DateTime, Utc};

use crate::environment::FetchError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum QueryKind {
    Weather,
    AirQuality,
    Traffic,
}

impl QueryKind {
    pub fn key(&self) -> &'static str {
        match self {
            QueryKind::Weather => "weather",
            QueryKind::AirQuality => "airQuality",
            QueryKind::Traffic => "traffic",
        }
    }

    pub fn refetch_interval(&self) -> Duration {
        match self {
            QueryKind::Weather | QueryKind::AirQuality => Duration::from_secs(300),
            QueryKind::Traffic => Duration::from_secs(60),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum QueryState<T> {
    Idle,
    Loading,
    Success(T),
    Error(String),
}

impl<T> QueryState<T> {
    pub fn is_loading(&self) -> bool {
        matches!(self, QueryState::Loading)
    }

    pub fn data(&self) -> Option<&T> {
        match self {
            QueryState::Success(data) => Some(data),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            QueryState::Error(reason) => Some(reason),
            _ => None,
        }
    }
}

/// Identifies one issued request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Ticket(u64);

#[derive(Debug, Clone)]
pub struct QuerySlot<T> {
    state: QueryState<T>,
    latest: u64,
    in_flight: Option<Ticket>,
    updated_at: Option<DateTime<Utc>>,
}

impl<T> Default for QuerySlot<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> QuerySlot<T> {
    pub fn new() -> Self {
        Self {
            state: QueryState::Idle,
            latest: 0,
            in_flight: None,
            updated_at: None,
        }
    }

    pub fn state(&self) -> &QueryState<T> {
        &self.state
    }

    pub fn is_fetching(&self) -> bool {
        self.in_flight.is_some()
    }

    pub fn updated_at(&self) -> Option<DateTime<Utc>> {
        self.updated_at
    }

    /// Starts a request, superseding any request still in flight.
    ///
    /// Previously loaded data stays visible until the new result arrives.
    pub fn begin(&mut self) -> Ticket {
        self.latest += 1;
        let ticket = Ticket(self.latest);
        self.in_flight = Some(ticket);
        if !matches!(self.state, QueryState::Success(_)) {
            self.state = QueryState::Loading;
        }
        ticket
    }

    /// Starts a timer-driven request unless one is already outstanding.
    pub fn begin_scheduled(&mut self) -> Option<Ticket> {
        if self.in_flight.is_some() {
            return None;
        }
        Some(self.begin())
    }

    /// Applies a finished request. Returns `false` when the result was stale
    /// and has been dropped.
    pub fn resolve(
        &mut self,
        ticket: Ticket,
        result: Result<T, FetchError>,
        now: DateTime<Utc>,
    ) -> bool {
        if ticket.0 != self.latest {
            return false;
        }

        self.in_flight = None;
        self.updated_at = Some(now);
        self.state = match result {
            Ok(data) => QueryState::Success(data),
            Err(e) => QueryState::Error(e.to_string()),
        };
        true
    }
}
