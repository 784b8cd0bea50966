use crate::ledger::FieldId;
use crossterm::event::Event as CrosstermEvent;

#[derive(Debug)]
pub enum AppEvent {
    /// Terminal input event
    Terminal(CrosstermEvent),
    /// The terminal input stream failed or ended
    InputClosed(String),

    /// A field's dwell timer ran out
    FlashExpired { field: FieldId, generation: u64 },
}
