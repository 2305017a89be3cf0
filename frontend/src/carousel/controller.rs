use std::cell::RefCell;
use std::rc::Rc;

use super::gesture::{DragInterpreter, NavCommand, PointerPosition};
use super::store::{CarouselError, CarouselState};
use super::timer::{AutoplayPhase, AutoplayTimer, BrowserScheduler, Scheduler};
use crate::config::CarouselConfig;

type Listener = Rc<dyn Fn()>;

struct Inner<T, S: Scheduler> {
    state: CarouselState<T>,
    autoplay: AutoplayTimer<S>,
    drag: DragInterpreter,
    mounted: bool,
    listeners: Vec<(u64, Listener)>,
    next_listener: u64,
}

/// Shared handle to one carousel: its store, autoplay timer and drag state.
///
/// Cloning the handle shares the same carousel. Every navigation, whether
/// from a button, a drag or the autoplay timer, changes the index first and
/// then restarts the timer, so the next automatic advance is always a full
/// interval away. Listeners run after the internal borrow is released and
/// are free to read the carousel back.
pub struct Carousel<T, S: Scheduler = BrowserScheduler> {
    inner: Rc<RefCell<Inner<T, S>>>,
}

/// Everything a view needs to render one frame of the carousel.
#[derive(Debug, Clone, PartialEq)]
pub struct CarouselSnapshot<T> {
    pub items: Vec<T>,
    pub current: T,
    pub current_index: usize,
    pub previous_index: usize,
    pub next_index: usize,
    pub autoplay: bool,
    pub autoplay_interval_ms: u32,
    pub dragging: bool,
    pub drag_offset: f64,
}

/// Keeps a listener registered until dropped.
#[must_use = "dropping a Subscription unsubscribes immediately"]
pub struct Subscription {
    unsubscribe: Option<Box<dyn FnOnce()>>,
}

impl Drop for Subscription {
    fn drop(&mut self) {
        if let Some(unsubscribe) = self.unsubscribe.take() {
            unsubscribe();
        }
    }
}

impl<T, S: Scheduler> Clone for Carousel<T, S> {
    fn clone(&self) -> Self {
        Self {
            inner: Rc::clone(&self.inner),
        }
    }
}

impl<T, S: Scheduler> PartialEq for Carousel<T, S> {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.inner, &other.inner)
    }
}

impl<T: 'static, S: Scheduler + 'static> Carousel<T, S> {
    pub fn new(items: Vec<T>, config: &CarouselConfig, scheduler: S) -> Result<Self, CarouselError> {
        let state = CarouselState::new(items)?;
        Ok(Self {
            inner: Rc::new(RefCell::new(Inner {
                state,
                autoplay: AutoplayTimer::new(scheduler, config.autoplay_interval_ms),
                drag: DragInterpreter::new(config.drag_threshold),
                mounted: false,
                listeners: Vec::new(),
                next_listener: 0,
            })),
        })
    }

    /// Marks the view as ready; autoplay starts here if it is enabled.
    pub fn mount(&self) {
        {
            let mut inner = self.inner.borrow_mut();
            if inner.autoplay.is_torn_down() {
                log::warn!("ignoring mount of a carousel that was already unmounted");
                return;
            }
            inner.mounted = true;
        }
        self.restart_autoplay();
    }

    /// Cancels autoplay for good and drops any gesture in progress.
    pub fn unmount(&self) {
        let mut inner = self.inner.borrow_mut();
        inner.mounted = false;
        inner.autoplay.teardown();
        let threshold = inner.drag.threshold();
        inner.drag = DragInterpreter::new(threshold);
    }

    pub fn go_to(&self, index: i64) {
        self.navigate(|state| {
            state.go_to(index);
        });
    }

    pub fn next(&self) {
        self.navigate(|state| {
            state.next();
        });
    }

    pub fn previous(&self) {
        self.navigate(|state| {
            state.previous();
        });
    }

    pub fn toggle_autoplay(&self) -> bool {
        let enabled = self.inner.borrow_mut().state.toggle_autoplay();
        log::debug!("carousel autoplay {}", if enabled { "on" } else { "off" });
        self.restart_autoplay();
        self.notify();
        enabled
    }

    pub fn drag_start(&self, position: PointerPosition) {
        self.inner.borrow_mut().drag.on_drag_start(position);
        self.notify();
    }

    /// Returns `true` when the caller should prevent the default scroll.
    pub fn drag_move(&self, position: PointerPosition) -> bool {
        let moved = self.inner.borrow_mut().drag.on_drag_move(position);
        if moved {
            self.notify();
        }
        moved
    }

    pub fn drag_end(&self) -> Option<NavCommand> {
        let command = self.inner.borrow_mut().drag.on_drag_end();
        match command {
            Some(NavCommand::Previous) => self.previous(),
            Some(NavCommand::Next) => self.next(),
            None => self.notify(),
        }
        command
    }

    pub fn current_index(&self) -> usize {
        self.inner.borrow().state.current_index()
    }

    pub fn previous_index(&self) -> usize {
        self.inner.borrow().state.previous_index()
    }

    pub fn next_index(&self) -> usize {
        self.inner.borrow().state.next_index()
    }

    pub fn len(&self) -> usize {
        self.inner.borrow().state.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.borrow().state.is_empty()
    }

    pub fn is_autoplay(&self) -> bool {
        self.inner.borrow().state.is_autoplay()
    }

    pub fn autoplay_phase(&self) -> AutoplayPhase {
        self.inner.borrow().autoplay.phase()
    }

    pub fn is_dragging(&self) -> bool {
        self.inner.borrow().drag.is_active()
    }

    pub fn drag_offset(&self) -> f64 {
        self.inner.borrow().drag.offset()
    }

    pub fn subscribe(&self, listener: impl Fn() + 'static) -> Subscription {
        let id = {
            let mut inner = self.inner.borrow_mut();
            let id = inner.next_listener;
            inner.next_listener += 1;
            inner.listeners.push((id, Rc::new(listener)));
            id
        };
        let weak = Rc::downgrade(&self.inner);
        Subscription {
            unsubscribe: Some(Box::new(move || {
                if let Some(inner) = weak.upgrade() {
                    inner.borrow_mut().listeners.retain(|(lid, _)| *lid != id);
                }
            })),
        }
    }

    fn navigate(&self, apply: impl FnOnce(&mut CarouselState<T>)) {
        apply(&mut self.inner.borrow_mut().state);
        self.restart_autoplay();
        self.notify();
    }

    fn restart_autoplay(&self) {
        let weak = Rc::downgrade(&self.inner);
        let mut inner = self.inner.borrow_mut();
        let enabled = inner.mounted && inner.state.is_autoplay();
        inner.autoplay.reset(enabled, move || {
            if let Some(inner) = weak.upgrade() {
                log::debug!("autoplay advancing carousel");
                Carousel { inner }.next();
            }
        });
    }

    fn notify(&self) {
        let listeners: Vec<Listener> = self
            .inner
            .borrow()
            .listeners
            .iter()
            .map(|(_, listener)| Rc::clone(listener))
            .collect();
        for listener in listeners {
            listener();
        }
    }
}

impl<T: Clone + 'static, S: Scheduler + 'static> Carousel<T, S> {
    pub fn snapshot(&self) -> CarouselSnapshot<T> {
        let inner = self.inner.borrow();
        CarouselSnapshot {
            items: inner.state.items().to_vec(),
            current: inner.state.current_item().clone(),
            current_index: inner.state.current_index(),
            previous_index: inner.state.previous_index(),
            next_index: inner.state.next_index(),
            autoplay: inner.state.is_autoplay(),
            autoplay_interval_ms: inner.autoplay.interval_ms(),
            dragging: inner.drag.is_active(),
            drag_offset: inner.drag.offset(),
        }
    }
}
