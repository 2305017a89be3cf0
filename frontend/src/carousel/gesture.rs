/// Horizontal pointer coordinate, in CSS pixels.
///
/// Mouse and touch events are both reduced to this at the input boundary, so
/// the interpreter never cares where a position came from.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default)]
pub struct PointerPosition(f64);

impl PointerPosition {
    pub fn new(x: f64) -> Self {
        Self(x)
    }

    pub fn x(self) -> f64 {
        self.0
    }

    pub fn from_mouse(event: &web_sys::MouseEvent) -> Self {
        Self(f64::from(event.client_x()))
    }

    /// First touch point, if any are still down.
    pub fn from_touch(event: &web_sys::TouchEvent) -> Option<Self> {
        event
            .touches()
            .get(0)
            .map(|touch| Self(f64::from(touch.client_x())))
    }
}

impl From<f64> for PointerPosition {
    fn from(x: f64) -> Self {
        Self(x)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavCommand {
    Previous,
    Next,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DragState {
    pub active: bool,
    pub start_position: f64,
    pub current_offset: f64,
}

/// Turns one pointer-down to pointer-up cycle into at most one command.
#[derive(Debug, Clone, PartialEq)]
pub struct DragInterpreter {
    threshold: f64,
    state: Option<DragState>,
}

impl DragInterpreter {
    pub fn new(threshold: f64) -> Self {
        Self {
            threshold,
            state: None,
        }
    }

    /// Starts a gesture, discarding any unfinished one.
    pub fn on_drag_start(&mut self, position: PointerPosition) {
        self.state = Some(DragState {
            active: true,
            start_position: position.x(),
            current_offset: 0.0,
        });
    }

    /// Returns `true` while a drag is in progress, meaning the caller should
    /// suppress the platform's default scrolling.
    pub fn on_drag_move(&mut self, position: PointerPosition) -> bool {
        match self.state.as_mut() {
            Some(state) if state.active => {
                state.current_offset = position.x() - state.start_position;
                true
            }
            _ => false,
        }
    }

    pub fn on_drag_end(&mut self) -> Option<NavCommand> {
        let state = self.state.take()?;
        let offset = state.current_offset;
        if offset.abs() > self.threshold {
            // Dragging rightward reveals the previous item.
            Some(if offset > 0.0 {
                NavCommand::Previous
            } else {
                NavCommand::Next
            })
        } else {
            None
        }
    }

    pub fn is_active(&self) -> bool {
        self.state.map_or(false, |s| s.active)
    }

    pub fn offset(&self) -> f64 {
        self.state.map_or(0.0, |s| s.current_offset)
    }

    pub fn threshold(&self) -> f64 {
        self.threshold
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn drag(interp: &mut DragInterpreter, from: f64, to: f64) -> Option<NavCommand> {
        interp.on_drag_start(from.into());
        interp.on_drag_move(to.into());
        interp.on_drag_end()
    }

    #[test]
    fn rightward_past_threshold_goes_previous() {
        let mut interp = DragInterpreter::new(100.0);
        assert_eq!(drag(&mut interp, 0.0, 150.0), Some(NavCommand::Previous));
    }

    #[test]
    fn leftward_past_threshold_goes_next() {
        let mut interp = DragInterpreter::new(100.0);
        assert_eq!(drag(&mut interp, 300.0, 120.0), Some(NavCommand::Next));
    }

    #[test]
    fn short_drag_is_a_no_op() {
        let mut interp = DragInterpreter::new(100.0);
        assert_eq!(drag(&mut interp, 0.0, 50.0), None);
        assert_eq!(drag(&mut interp, 0.0, -100.0), None);
    }

    #[test]
    fn end_resets_offset_and_activity() {
        let mut interp = DragInterpreter::new(100.0);
        interp.on_drag_start(PointerPosition::new(10.0));
        interp.on_drag_move(PointerPosition::new(80.0));
        assert!(interp.is_active());
        assert_eq!(interp.offset(), 70.0);
        interp.on_drag_end();
        assert!(!interp.is_active());
        assert_eq!(interp.offset(), 0.0);
    }

    #[test]
    fn move_without_start_is_ignored() {
        let mut interp = DragInterpreter::new(100.0);
        assert!(!interp.on_drag_move(PointerPosition::new(500.0)));
        assert_eq!(interp.on_drag_end(), None);
    }

    #[test]
    fn new_start_discards_unfinished_gesture() {
        let mut interp = DragInterpreter::new(100.0);
        interp.on_drag_start(PointerPosition::new(0.0));
        interp.on_drag_move(PointerPosition::new(400.0));
        interp.on_drag_start(PointerPosition::new(400.0));
        assert_eq!(interp.offset(), 0.0);
        interp.on_drag_move(PointerPosition::new(420.0));
        assert_eq!(interp.on_drag_end(), None);
    }

    #[test]
    fn second_end_emits_nothing() {
        let mut interp = DragInterpreter::new(100.0);
        assert_eq!(drag(&mut interp, 0.0, -200.0), Some(NavCommand::Next));
        assert_eq!(interp.on_drag_end(), None);
    }

    #[test]
    fn threshold_is_configurable() {
        let mut interp = DragInterpreter::new(20.0);
        assert_eq!(drag(&mut interp, 0.0, 30.0), Some(NavCommand::Previous));
    }
}
