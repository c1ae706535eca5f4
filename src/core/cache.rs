//! Read-through cache with a fixed time-to-live.
//!
//! Used for the slowly changing lookups of a rota session (user
//! active-states, utilisation targets). The value is loaded on first access
//! and reloaded once it is older than the TTL or after an explicit
//! `refresh()`.

use crate::errors::{AppError, AppResult};
use log::debug;
use std::time::{Duration, Instant};

pub trait Loader<T> {
    fn load(&mut self) -> AppResult<T>;
}

impl<T, F> Loader<T> for F
where
    F: FnMut() -> AppResult<T>,
{
    fn load(&mut self) -> AppResult<T> {
        self()
    }
}

pub struct RefreshCache<T, L> {
    loader: L,
    ttl: Duration,
    value: Option<T>,
    loaded_at: Option<Instant>,
    loads: usize,
}

impl<T, L: Loader<T>> RefreshCache<T, L> {
    pub fn new(loader: L, ttl: Duration) -> Self {
        Self {
            loader,
            ttl,
            value: None,
            loaded_at: None,
            loads: 0,
        }
    }

    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    /// Number of times the loader ran.
    pub fn load_count(&self) -> usize {
        self.loads
    }

    pub fn get(&mut self) -> AppResult<&T> {
        self.get_at(Instant::now())
    }

    /// Same as [`get`](Self::get) with an explicit clock reading.
    pub fn get_at(&mut self, now: Instant) -> AppResult<&T> {
        if self.is_stale_at(now) {
            self.refresh_at(now)?;
        }

        self.value
            .as_ref()
            .ok_or_else(|| AppError::Other("cache has no value after refresh".into()))
    }

    pub fn refresh(&mut self) -> AppResult<()> {
        self.refresh_at(Instant::now())
    }

    /// Reload the value. On failure the previous value is kept and stays
    /// stale.
    pub fn refresh_at(&mut self, now: Instant) -> AppResult<()> {
        let value = self.loader.load()?;
        self.value = Some(value);
        self.loaded_at = Some(now);
        self.loads += 1;
        debug!("cache refreshed (load #{})", self.loads);
        Ok(())
    }

    pub fn invalidate(&mut self) {
        self.loaded_at = None;
    }

    pub fn is_stale_at(&self, now: Instant) -> bool {
        match (self.value.as_ref(), self.loaded_at) {
            (Some(_), Some(at)) => now.saturating_duration_since(at) >= self.ttl,
            _ => true,
        }
    }
}
