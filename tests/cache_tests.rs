use rotaview::core::cache::RefreshCache;
use rotaview::errors::{AppError, AppResult};
use std::cell::Cell;
use std::rc::Rc;
use std::time::{Duration, Instant};

fn counting_loader(calls: Rc<Cell<u32>>) -> impl FnMut() -> AppResult<u32> {
    move || {
        calls.set(calls.get() + 1);
        Ok(calls.get() * 10)
    }
}

#[test]
fn loads_lazily_and_serves_until_ttl() {
    let calls = Rc::new(Cell::new(0));
    let mut cache = RefreshCache::new(counting_loader(calls.clone()), Duration::from_secs(60));
    assert_eq!(calls.get(), 0);

    let t0 = Instant::now();
    assert_eq!(*cache.get_at(t0).unwrap(), 10);
    assert_eq!(*cache.get_at(t0 + Duration::from_secs(59)).unwrap(), 10);
    assert_eq!(cache.load_count(), 1);

    // TTL reached
    assert_eq!(*cache.get_at(t0 + Duration::from_secs(60)).unwrap(), 20);
    assert_eq!(cache.load_count(), 2);
    assert_eq!(calls.get(), 2);
}

#[test]
fn explicit_refresh_reloads_immediately() {
    let calls = Rc::new(Cell::new(0));
    let mut cache = RefreshCache::new(counting_loader(calls), Duration::from_secs(3600));

    let t0 = Instant::now();
    assert_eq!(*cache.get_at(t0).unwrap(), 10);

    cache.refresh_at(t0).unwrap();
    assert_eq!(*cache.get_at(t0).unwrap(), 20);
    assert!(!cache.is_stale_at(t0 + Duration::from_secs(10)));
}

#[test]
fn invalidate_marks_value_stale() {
    let calls = Rc::new(Cell::new(0));
    let mut cache = RefreshCache::new(counting_loader(calls), Duration::from_secs(3600));

    let t0 = Instant::now();
    cache.get_at(t0).unwrap();
    cache.invalidate();
    assert!(cache.is_stale_at(t0));
    assert_eq!(*cache.get_at(t0).unwrap(), 20);
}

#[test]
fn failed_reload_keeps_previous_value() {
    let calls = Rc::new(Cell::new(0u32));
    let loader_calls = calls.clone();
    let mut cache = RefreshCache::new(
        move || -> AppResult<&'static str> {
            loader_calls.set(loader_calls.get() + 1);
            match loader_calls.get() {
                2 => Err(AppError::Snapshot("endpoint unavailable".into())),
                _ => Ok("fresh"),
            }
        },
        Duration::from_secs(1),
    );

    let t0 = Instant::now();
    assert_eq!(*cache.get_at(t0).unwrap(), "fresh");

    let later = t0 + Duration::from_secs(5);
    assert!(cache.get_at(later).is_err());
    assert!(cache.is_stale_at(later));
    assert_eq!(cache.load_count(), 1);

    // next access retries
    assert_eq!(*cache.get_at(later).unwrap(), "fresh");
    assert_eq!(calls.get(), 3);
}

#[test]
fn empty_cache_is_stale() {
    let cache = RefreshCache::new(|| -> AppResult<u32> { Ok(1) }, Duration::from_secs(60));
    assert!(cache.is_stale_at(Instant::now()));
    assert_eq!(cache.ttl(), Duration::from_secs(60));
}
