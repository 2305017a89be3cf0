use std::cell::{Cell, RefCell};
use std::rc::Rc;

use moneo_web::carousel::{
    AutoplayPhase, Carousel, NavCommand, PointerPosition, Scheduler, TimerHandle,
};
use moneo_web::config::CarouselConfig;
use moneo_web::content::SCREENSHOTS;

/// Records every scheduled callback. Nothing fires until the test says so.
#[derive(Clone, Default)]
struct StepScheduler {
    slots: Rc<RefCell<Vec<Slot>>>,
}

struct Slot {
    delay_ms: u32,
    live: Rc<Cell<bool>>,
    callback: Option<Box<dyn FnOnce()>>,
}

struct StepHandle {
    live: Rc<Cell<bool>>,
}

impl TimerHandle for StepHandle {
    fn cancel(self) {
        self.live.set(false);
    }
}

impl Scheduler for StepScheduler {
    type Handle = StepHandle;

    fn schedule(&self, delay_ms: u32, callback: Box<dyn FnOnce()>) -> StepHandle {
        let live = Rc::new(Cell::new(true));
        self.slots.borrow_mut().push(Slot {
            delay_ms,
            live: Rc::clone(&live),
            callback: Some(callback),
        });
        StepHandle { live }
    }
}

impl StepScheduler {
    fn live_count(&self) -> usize {
        self.slots.borrow().iter().filter(|s| s.live.get()).count()
    }

    fn last_delay(&self) -> Option<u32> {
        self.slots.borrow().last().map(|s| s.delay_ms)
    }

    /// Fires the one live timer, as if its interval had elapsed.
    fn elapse(&self) {
        let callback = {
            let mut slots = self.slots.borrow_mut();
            let mut live = slots.iter_mut().filter(|s| s.live.get());
            let slot = live.next().expect("no live timer");
            assert!(live.next().is_none(), "more than one live timer");
            slot.live.set(false);
            slot.callback.take()
        };
        if let Some(callback) = callback {
            callback();
        }
    }
}

fn screenshots(scheduler: &StepScheduler) -> Carousel<moneo_web::content::Screenshot, StepScheduler> {
    let carousel = Carousel::new(
        SCREENSHOTS.to_vec(),
        &CarouselConfig::default(),
        scheduler.clone(),
    )
    .unwrap();
    carousel.mount();
    carousel
}

#[test]
fn autoplay_walks_the_shipped_screenshots_and_wraps() {
    let scheduler = StepScheduler::default();
    let carousel = screenshots(&scheduler);
    assert_eq!(carousel.len(), 6);
    assert_eq!(scheduler.last_delay(), Some(4000));

    for expected in [1, 2, 3, 4, 5, 0] {
        scheduler.elapse();
        assert_eq!(carousel.current_index(), expected);
        assert_eq!(scheduler.live_count(), 1);
    }
}

#[test]
fn clicking_next_mid_interval_restarts_the_countdown() {
    let scheduler = StepScheduler::default();
    let carousel = screenshots(&scheduler);

    carousel.next();
    carousel.next();
    carousel.next();
    assert_eq!(carousel.current_index(), 3);
    assert_eq!(scheduler.live_count(), 1);

    scheduler.elapse();
    assert_eq!(carousel.current_index(), 4);
}

#[test]
fn long_swipe_right_goes_back_and_short_one_does_nothing() {
    let scheduler = StepScheduler::default();
    let carousel = screenshots(&scheduler);

    carousel.drag_start(PointerPosition::new(0.0));
    assert!(carousel.drag_move(PointerPosition::new(150.0)));
    assert_eq!(carousel.drag_end(), Some(NavCommand::Previous));
    assert_eq!(carousel.current_index(), 5);

    carousel.drag_start(PointerPosition::new(0.0));
    carousel.drag_move(PointerPosition::new(50.0));
    assert_eq!(carousel.drag_end(), None);
    assert_eq!(carousel.current_index(), 5);

    carousel.drag_start(PointerPosition::new(300.0));
    carousel.drag_move(PointerPosition::new(120.0));
    assert_eq!(carousel.drag_end(), Some(NavCommand::Next));
    assert_eq!(carousel.current_index(), 0);
}

#[test]
fn pausing_stops_advances_until_resumed() {
    let scheduler = StepScheduler::default();
    let carousel = screenshots(&scheduler);

    assert!(!carousel.toggle_autoplay());
    assert_eq!(carousel.autoplay_phase(), AutoplayPhase::Idle);
    assert_eq!(scheduler.live_count(), 0);

    carousel.go_to(-1);
    assert_eq!(carousel.current_index(), 5);
    assert_eq!(scheduler.live_count(), 0);

    assert!(carousel.toggle_autoplay());
    scheduler.elapse();
    assert_eq!(carousel.current_index(), 0);
}

#[test]
fn testimonials_advance_on_a_slower_cadence() {
    let scheduler = StepScheduler::default();
    let carousel = Carousel::new(
        moneo_web::content::TESTIMONIALS.to_vec(),
        &CarouselConfig::testimonials(),
        scheduler.clone(),
    )
    .unwrap();
    carousel.mount();
    assert_eq!(scheduler.last_delay(), Some(8000));
    assert_eq!(carousel.snapshot().autoplay_interval_ms, 8000);
    scheduler.elapse();
    assert_eq!(carousel.snapshot().current, moneo_web::content::TESTIMONIALS[1]);
}

#[test]
fn unmount_leaves_no_timer_behind() {
    let scheduler = StepScheduler::default();
    let carousel = screenshots(&scheduler);
    carousel.drag_start(PointerPosition::new(10.0));

    carousel.unmount();
    assert_eq!(scheduler.live_count(), 0);
    assert!(!carousel.is_dragging());

    carousel.next();
    carousel.toggle_autoplay();
    carousel.toggle_autoplay();
    assert_eq!(scheduler.live_count(), 0);
}
