use pulse_paint::Point;

use crate::buffer::RollingBuffer;
use crate::widget::PointerEvent;

/// Pointer position plus the press-to-inspect snapshot.
///
/// While frozen, renderers read the snapshot instead of the live buffer, so
/// pushes keep rolling underneath without moving what the user inspects.
#[derive(Clone, Debug)]
pub struct InteractionState<T> {
    pointer: Option<Point>,
    snapshot: Option<RollingBuffer<T>>,
}

impl<T> Default for InteractionState<T> {
    fn default() -> Self {
        Self {
            pointer: None,
            snapshot: None,
        }
    }
}

impl<T: Clone + Default> InteractionState<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply a pointer event. Returns `true` when the widget should redraw.
    pub fn handle(&mut self, event: PointerEvent, live: &RollingBuffer<T>) -> bool {
        match event {
            PointerEvent::Enter(p) | PointerEvent::Move(p) | PointerEvent::Drag(p) => {
                self.pointer = Some(p);
                true
            }
            PointerEvent::Exit => {
                self.pointer = None;
                true
            }
            PointerEvent::Press(p) => {
                self.pointer = Some(p);
                self.snapshot = Some(live.clone());
                true
            }
            PointerEvent::Release => self.snapshot.take().is_some(),
        }
    }

    /// Buffer to render: the snapshot while frozen, else `live`.
    pub fn active<'a>(&'a self, live: &'a RollingBuffer<T>) -> &'a RollingBuffer<T> {
        self.snapshot.as_ref().unwrap_or(live)
    }

    pub fn pointer(&self) -> Option<Point> {
        self.pointer
    }

    pub fn is_frozen(&self) -> bool {
        self.snapshot.is_some()
    }

    /// Keep a frozen snapshot in step with a capacity change.
    pub fn resize(&mut self, capacity: usize) {
        if let Some(snapshot) = self.snapshot.as_mut() {
            snapshot.resize(capacity);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn press_freezes_until_release() {
        let mut live: RollingBuffer<u32> = RollingBuffer::from_vec(vec![1, 2, 3]);
        let mut state = InteractionState::new();

        assert!(state.handle(PointerEvent::Press(Point::new(5.0, 5.0)), &live));
        assert!(state.is_frozen());
        live.push(4);
        assert_eq!(state.active(&live).to_vec(), vec![1, 2, 3]);

        assert!(state.handle(PointerEvent::Release, &live));
        assert!(!state.is_frozen());
        assert_eq!(state.active(&live).to_vec(), vec![2, 3, 4]);
        assert!(!state.handle(PointerEvent::Release, &live));
    }

    #[test]
    fn move_and_exit_track_pointer() {
        let live: RollingBuffer<u32> = RollingBuffer::new(2);
        let mut state = InteractionState::new();
        state.handle(PointerEvent::Enter(Point::new(1.0, 2.0)), &live);
        state.handle(PointerEvent::Move(Point::new(3.0, 4.0)), &live);
        assert_eq!(state.pointer(), Some(Point::new(3.0, 4.0)));
        state.handle(PointerEvent::Exit, &live);
        assert_eq!(state.pointer(), None);
    }
}
