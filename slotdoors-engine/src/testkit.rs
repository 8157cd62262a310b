//! Recording fakes for the render and scheduler seams, shared by unit
//! tests across the crate.

use crate::data::Symbol;
use crate::machine::{SpinEvent, SpinScheduler};
use crate::render::{DoorId, Motion, RenderTarget};
use std::cell::RefCell;
use std::rc::Rc;

/// Everything a fake door remembers about the commands it received.
#[derive(Debug, Clone, Default)]
pub struct RecordedDoor {
    pub boxes: Vec<Symbol>,
    pub offset: f64,
    pub animated: bool,
    pub last_duration_ms: Option<f64>,
    pub blurred: bool,
    pub box_writes: usize,
}

/// Render target that records every command. Clones share the same
/// recording, so a test can keep a handle while the machine owns another.
#[derive(Debug, Clone, Default)]
pub struct FakeTarget {
    pub doors: Rc<RefCell<Vec<RecordedDoor>>>,
}

impl RenderTarget for FakeTarget {
    fn create_door(&mut self, index: usize) -> DoorId {
        let mut doors = self.doors.borrow_mut();
        assert_eq!(index, doors.len(), "doors must be created in order");
        doors.push(RecordedDoor::default());
        DoorId(index)
    }

    fn set_boxes(&mut self, door: DoorId, symbols: &[Symbol]) {
        let mut doors = self.doors.borrow_mut();
        let door = &mut doors[door.0];
        door.boxes = symbols.to_vec();
        door.box_writes += 1;
    }

    fn set_offset(&mut self, door: DoorId, y_px: f64, motion: Motion) {
        let mut doors = self.doors.borrow_mut();
        let door = &mut doors[door.0];
        door.offset = y_px;
        match motion {
            Motion::Instant => {
                door.animated = false;
            }
            Motion::Animate { duration_ms } => {
                door.animated = true;
                door.last_duration_ms = Some(duration_ms);
            }
        }
    }

    fn set_blur(&mut self, door: DoorId, blurred: bool) {
        self.doors.borrow_mut()[door.0].blurred = blurred;
    }
}

/// Scheduler that queues requests instead of timing them. Clones share the
/// same queue.
#[derive(Debug, Clone, Default)]
pub struct FakeScheduler {
    pub queue: Rc<RefCell<Vec<(f64, SpinEvent)>>>,
}

impl FakeScheduler {
    /// Take everything scheduled so far, ordered by due time (stable, so
    /// ties keep their scheduling order).
    pub fn drain_in_order(&self) -> Vec<(f64, SpinEvent)> {
        let mut queue = std::mem::take(&mut *self.queue.borrow_mut());
        queue.sort_by(|a, b| a.0.total_cmp(&b.0));
        queue
    }
}

impl SpinScheduler for FakeScheduler {
    fn schedule(&mut self, delay_ms: f64, event: SpinEvent) {
        self.queue.borrow_mut().push((delay_ms, event));
    }
}
