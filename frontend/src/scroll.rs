use std::cell::Cell;
use std::rc::Rc;

use log::{debug, warn};
use thiserror::Error;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::Window;
use yew::prelude::*;

pub fn is_past_threshold(offset: f64, threshold: f64) -> bool {
    offset > threshold
}

/// Tracks whether the page has scrolled past a fixed offset.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScrollVisibility {
    threshold: f64,
    past: bool,
}

impl ScrollVisibility {
    pub fn new(threshold: f64) -> Self {
        Self { threshold, past: false }
    }

    pub fn is_past_threshold(&self) -> bool {
        self.past
    }

    /// Recomputes the flag for `offset`. Returns the new value only when it changed.
    pub fn observe(&mut self, offset: f64) -> Option<bool> {
        let past = is_past_threshold(offset, self.threshold);
        if past == self.past {
            return None;
        }
        self.past = past;
        Some(past)
    }
}

#[derive(Debug, Error)]
pub enum ScrollError {
    #[error("no window to observe")]
    NoWindow,
    #[error("scroll listener rejected: {0}")]
    Listen(String),
}

/// Something that reports a vertical scroll offset and notifies listeners when it moves.
pub trait ScrollSource {
    type Listener;

    fn offset(&self) -> f64;
    fn subscribe(&self, on_scroll: Box<dyn FnMut(f64)>) -> Result<Self::Listener, ScrollError>;
    fn unsubscribe(&self, listener: Self::Listener);
}

pub struct WindowScroll {
    window: Window,
}

impl WindowScroll {
    pub fn new() -> Result<Self, ScrollError> {
        web_sys::window()
            .map(|window| Self { window })
            .ok_or(ScrollError::NoWindow)
    }
}

impl ScrollSource for WindowScroll {
    type Listener = Closure<dyn FnMut()>;

    fn offset(&self) -> f64 {
        self.window.scroll_y().unwrap_or(0.0)
    }

    fn subscribe(&self, mut on_scroll: Box<dyn FnMut(f64)>) -> Result<Self::Listener, ScrollError> {
        let window = self.window.clone();
        let scroll_callback = Closure::wrap(Box::new(move || {
            on_scroll(window.scroll_y().unwrap_or(0.0));
        }) as Box<dyn FnMut()>);

        self.window
            .add_event_listener_with_callback("scroll", scroll_callback.as_ref().unchecked_ref())
            .map_err(|err| ScrollError::Listen(format!("{:?}", err)))?;

        Ok(scroll_callback)
    }

    fn unsubscribe(&self, listener: Self::Listener) {
        if let Err(err) = self
            .window
            .remove_event_listener_with_callback("scroll", listener.as_ref().unchecked_ref())
        {
            warn!("Failed to remove scroll listener: {:?}", err);
        }
    }
}

/// A live scroll listener. Dropping it deregisters the listener; so does `release`,
/// which may be called any number of times.
pub struct ScrollSubscription<S: ScrollSource> {
    source: S,
    listener: Option<S::Listener>,
}

impl<S: ScrollSource> ScrollSubscription<S> {
    /// Starts watching `source`, calling `on_change` whenever the offset crosses `threshold`.
    /// The current offset is checked once right after subscribing.
    pub fn watch<F>(source: S, threshold: f64, on_change: F) -> Result<Self, ScrollError>
    where
        F: Fn(bool) + 'static,
    {
        let visibility = Rc::new(Cell::new(ScrollVisibility::new(threshold)));
        let on_change = Rc::new(on_change);

        let listener = {
            let visibility = visibility.clone();
            let on_change = on_change.clone();
            source.subscribe(Box::new(move |offset| notify(&visibility, offset, &*on_change)))?
        };
        notify(&visibility, source.offset(), &*on_change);

        Ok(Self {
            source,
            listener: Some(listener),
        })
    }

    pub fn is_active(&self) -> bool {
        self.listener.is_some()
    }

    pub fn release(&mut self) {
        if let Some(listener) = self.listener.take() {
            self.source.unsubscribe(listener);
            debug!("Scroll listener released");
        }
    }
}

impl<S: ScrollSource> Drop for ScrollSubscription<S> {
    fn drop(&mut self) {
        self.release();
    }
}

fn notify(visibility: &Cell<ScrollVisibility>, offset: f64, on_change: &dyn Fn(bool)) {
    let mut current = visibility.get();
    if let Some(past) = current.observe(offset) {
        visibility.set(current);
        on_change(past);
    }
}

/// True while the window is scrolled further than `threshold`.
#[hook]
pub fn use_scroll_threshold(threshold: f64) -> bool {
    let past = use_state_eq(|| false);

    {
        let past = past.clone();
        use_effect_with_deps(
            move |threshold| {
                let threshold = *threshold;
                let subscription = WindowScroll::new().and_then(|source| {
                    ScrollSubscription::watch(source, threshold, move |visible| past.set(visible))
                });

                match &subscription {
                    Ok(_) => debug!("Watching scroll offset against {}", threshold),
                    Err(err) => warn!("Sticky call-to-action stays hidden: {}", err),
                }

                move || drop(subscription)
            },
            threshold,
        );
    }

    *past
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    const THRESHOLD: f64 = 800.0;

    type Listeners = Rc<RefCell<Vec<(usize, Box<dyn FnMut(f64)>)>>>;

    #[derive(Clone, Default)]
    struct FakeScroll {
        offset: Rc<Cell<f64>>,
        listeners: Listeners,
        next_id: Rc<Cell<usize>>,
        reject: bool,
    }

    impl FakeScroll {
        fn rejecting() -> Self {
            Self {
                reject: true,
                ..Self::default()
            }
        }

        fn scroll_to(&self, offset: f64) {
            self.offset.set(offset);
            for (_, listener) in self.listeners.borrow_mut().iter_mut() {
                listener(offset);
            }
        }

        fn listener_count(&self) -> usize {
            self.listeners.borrow().len()
        }
    }

    impl ScrollSource for FakeScroll {
        type Listener = usize;

        fn offset(&self) -> f64 {
            self.offset.get()
        }

        fn subscribe(&self, on_scroll: Box<dyn FnMut(f64)>) -> Result<usize, ScrollError> {
            if self.reject {
                return Err(ScrollError::Listen("blocked".to_string()));
            }
            let id = self.next_id.get();
            self.next_id.set(id + 1);
            self.listeners.borrow_mut().push((id, on_scroll));
            Ok(id)
        }

        fn unsubscribe(&self, listener: usize) {
            self.listeners.borrow_mut().retain(|(id, _)| *id != listener);
        }
    }

    fn recorder() -> (Rc<RefCell<Vec<bool>>>, impl Fn(bool) + 'static) {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = seen.clone();
        (seen, move |visible| sink.borrow_mut().push(visible))
    }

    #[test]
    fn threshold_is_strictly_greater_than() {
        for (offset, expected) in [
            (0.0, false),
            (799.0, false),
            (800.0, false),
            (800.5, true),
            (801.0, true),
            (12_000.0, true),
        ] {
            assert_eq!(is_past_threshold(offset, THRESHOLD), expected, "offset {}", offset);
        }
    }

    #[test]
    fn visibility_reports_only_crossings() {
        let mut visibility = ScrollVisibility::new(THRESHOLD);
        assert!(!visibility.is_past_threshold());

        assert_eq!(visibility.observe(300.0), None);
        assert_eq!(visibility.observe(900.0), Some(true));
        assert_eq!(visibility.observe(1500.0), None);
        assert_eq!(visibility.observe(900.0), None);
        assert_eq!(visibility.observe(100.0), Some(false));
        assert!(!visibility.is_past_threshold());
    }

    #[test]
    fn visibility_does_not_depend_on_path() {
        let mut climbed = ScrollVisibility::new(THRESHOLD);
        for offset in [100.0, 500.0, 1000.0, 2000.0, 850.0] {
            climbed.observe(offset);
        }

        let mut jumped = ScrollVisibility::new(THRESHOLD);
        jumped.observe(850.0);

        assert_eq!(climbed, jumped);
        assert!(jumped.is_past_threshold());
    }

    #[test]
    fn crossing_and_returning_toggles_sticky_bar() {
        let source = FakeScroll::default();
        let (seen, on_change) = recorder();
        let subscription = ScrollSubscription::watch(source.clone(), THRESHOLD, on_change).unwrap();

        assert!(subscription.is_active());
        assert!(seen.borrow().is_empty());

        source.scroll_to(801.0);
        assert_eq!(*seen.borrow(), vec![true]);

        source.scroll_to(799.0);
        assert_eq!(*seen.borrow(), vec![true, false]);
    }

    #[test]
    fn restored_offset_is_checked_on_subscribe() {
        let source = FakeScroll::default();
        source.offset.set(1200.0);
        let (seen, on_change) = recorder();

        let _subscription = ScrollSubscription::watch(source.clone(), THRESHOLD, on_change).unwrap();

        assert_eq!(*seen.borrow(), vec![true]);
    }

    #[test]
    fn teardown_stops_further_updates() {
        let source = FakeScroll::default();
        let (seen, on_change) = recorder();
        let subscription = ScrollSubscription::watch(source.clone(), THRESHOLD, on_change).unwrap();
        assert_eq!(source.listener_count(), 1);

        drop(subscription);
        assert_eq!(source.listener_count(), 0);

        source.scroll_to(900.0);
        assert!(seen.borrow().is_empty());
    }

    #[test]
    fn release_is_idempotent() {
        let source = FakeScroll::default();
        let (seen, on_change) = recorder();
        let mut subscription = ScrollSubscription::watch(source.clone(), THRESHOLD, on_change).unwrap();

        subscription.release();
        subscription.release();
        assert!(!subscription.is_active());
        assert_eq!(source.listener_count(), 0);

        drop(subscription);
        source.scroll_to(900.0);
        assert!(seen.borrow().is_empty());
    }

    #[test]
    fn rejected_listener_is_an_error_without_updates() {
        let source = FakeScroll::rejecting();
        source.offset.set(2000.0);
        let (seen, on_change) = recorder();

        let result = ScrollSubscription::watch(source.clone(), THRESHOLD, on_change);

        assert!(matches!(result, Err(ScrollError::Listen(_))));
        assert!(seen.borrow().is_empty());
    }
}
