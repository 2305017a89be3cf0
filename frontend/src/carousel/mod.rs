//! Carousel coordination: the index store, the autoplay timer and the drag
//! interpreter, tied together by [`Carousel`].

pub mod controller;
pub mod gesture;
pub mod store;
pub mod timer;

pub use controller::{Carousel, CarouselSnapshot, Subscription};
pub use gesture::{DragInterpreter, DragState, NavCommand, PointerPosition};
pub use store::{CarouselError, CarouselState};
pub use timer::{AutoplayPhase, AutoplayTimer, BrowserScheduler, Scheduler, TimerHandle};
