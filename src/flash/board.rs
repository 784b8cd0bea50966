//! The set of watched fields, each with its cell and at most one timer.

use super::cell::{DisplayedValue, FlashCell, Observed};
use super::timer::FlashTimer;
use crate::app::event::AppEvent;
use crate::ledger::{FieldId, FinancialState};
use std::collections::BTreeMap;
use std::time::Duration;
use tokio::sync::mpsc;
use tokio::time::Instant;

#[derive(Debug)]
struct Slot {
    cell: FlashCell,
    timer: Option<FlashTimer>,
}

/// Tracks change highlights for every field currently on screen.
///
/// A field is watched while its panel is shown. Unwatching drops the slot
/// and with it any pending timer; dropping the board cancels the rest.
#[derive(Debug)]
pub struct FlashBoard {
    dwell: Duration,
    event_tx: mpsc::UnboundedSender<AppEvent>,
    slots: BTreeMap<FieldId, Slot>,
    next_generation: u64,
}

impl FlashBoard {
    pub fn new(dwell: Duration, event_tx: mpsc::UnboundedSender<AppEvent>) -> Self {
        Self {
            dwell,
            event_tx,
            slots: BTreeMap::new(),
            next_generation: 0,
        }
    }

    /// Start showing a field. Its current value becomes the baseline.
    pub fn watch(&mut self, field: FieldId, state: &FinancialState) {
        self.slots.entry(field).or_insert_with(|| Slot {
            cell: FlashCell::new(field.read(state)),
            timer: None,
        });
    }

    pub fn unwatch(&mut self, field: FieldId) {
        if let Some(slot) = self.slots.remove(&field) {
            if slot.timer.is_some() {
                tracing::trace!(field = field.path(), "flash timer torn down");
            }
        }
    }

    pub fn is_watched(&self, field: FieldId) -> bool {
        self.slots.contains_key(&field)
    }

    /// Diff every watched field against `state` in one pass. Returns how many
    /// fields started or restarted a flash.
    pub fn observe(&mut self, state: &FinancialState) -> usize {
        self.observe_at(state, Instant::now())
    }

    pub fn observe_at(&mut self, state: &FinancialState, now: Instant) -> usize {
        let mut flashing = 0;
        for (&field, slot) in self.slots.iter_mut() {
            match slot.cell.observe(field.read(state), now, self.dwell) {
                Observed::Flashing(deadline) => {
                    let generation = self.next_generation;
                    self.next_generation += 1;
                    // Replacing the old handle aborts the superseded timer.
                    slot.timer = Some(FlashTimer::spawn(
                        field,
                        generation,
                        deadline,
                        self.event_tx.clone(),
                    ));
                    flashing += 1;
                }
                Observed::Settled => slot.timer = None,
                Observed::Unchanged => {
                    if !slot.cell.is_flashing(now) {
                        slot.timer = None;
                    }
                }
            }
        }
        flashing
    }

    /// Handle a timer firing. Stale generations and unwatched fields are
    /// ignored. Returns true if a flash was settled.
    pub fn expire(&mut self, field: FieldId, generation: u64) -> bool {
        let Some(slot) = self.slots.get_mut(&field) else {
            return false;
        };
        if slot.timer.as_ref().map(FlashTimer::generation) != Some(generation) {
            return false;
        }
        slot.timer = None;
        slot.cell.settle();
        tracing::trace!(field = field.path(), "flash settled");
        true
    }

    pub fn delta(&self, field: FieldId, now: Instant) -> Option<f64> {
        self.slots.get(&field).and_then(|s| s.cell.delta(now))
    }

    pub fn displayed(&self, field: FieldId, now: Instant) -> Option<DisplayedValue> {
        self.slots.get(&field).map(|s| s.cell.displayed(now))
    }

    pub fn active_timers(&self) -> usize {
        self.slots.values().filter(|s| s.timer.is_some()).count()
    }
}
