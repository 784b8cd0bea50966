use crate::app::event::AppEvent;
use crate::config::AppConfig;
use crate::flash::FlashBoard;
use crate::format::CurrencyFormat;
use crate::ledger::{ActionKind, Selection, Session, Statement};
use std::collections::BTreeSet;
use tokio::sync::mpsc;

/// Single-line text field used for the amount.
#[derive(Debug)]
pub struct InputState {
    pub text: String,
    pub cursor: usize,
}

impl InputState {
    pub fn new() -> Self {
        Self {
            text: String::new(),
            cursor: 0,
        }
    }

    pub fn insert_char(&mut self, c: char) {
        self.text.insert(self.cursor, c);
        self.cursor += c.len_utf8();
    }

    pub fn delete_back(&mut self) {
        if self.cursor > 0 {
            let prev = self.text[..self.cursor]
                .char_indices()
                .next_back()
                .map(|(i, _)| i)
                .unwrap_or(0);
            self.text.drain(prev..self.cursor);
            self.cursor = prev;
        }
    }

    pub fn delete_forward(&mut self) {
        if self.cursor < self.text.len() {
            let next = self.text[self.cursor..]
                .char_indices()
                .nth(1)
                .map(|(i, _)| self.cursor + i)
                .unwrap_or(self.text.len());
            self.text.drain(self.cursor..next);
        }
    }

    pub fn move_left(&mut self) {
        if self.cursor > 0 {
            self.cursor = self.text[..self.cursor]
                .char_indices()
                .next_back()
                .map(|(i, _)| i)
                .unwrap_or(0);
        }
    }

    pub fn move_right(&mut self) {
        if self.cursor < self.text.len() {
            self.cursor = self.text[self.cursor..]
                .char_indices()
                .nth(1)
                .map(|(i, _)| self.cursor + i)
                .unwrap_or(self.text.len());
        }
    }

    pub fn move_home(&mut self) {
        self.cursor = 0;
    }

    pub fn move_end(&mut self) {
        self.cursor = self.text.len();
    }

    pub fn clear(&mut self) {
        self.text.clear();
        self.cursor = 0;
    }
}

/// Characters the amount field accepts. Anything that survives still has to
/// parse as a finite number before execute is enabled.
pub fn is_amount_char(c: char) -> bool {
    c.is_ascii_digit() || matches!(c, '.' | '-' | '+' | 'e' | 'E')
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FocusPanel {
    Action,
    Amount,
    Execute,
}

pub struct AppState {
    pub config: AppConfig,
    pub session: Session,
    pub flash: FlashBoard,
    pub currency: CurrencyFormat,
    pub input: InputState,
    pub focus: FocusPanel,
    pub hidden: BTreeSet<Statement>,
    pub last_applied: Option<String>,
    pub should_quit: bool,
    pub dirty: bool,
}

impl AppState {
    pub fn new(config: AppConfig, event_tx: mpsc::UnboundedSender<AppEvent>) -> Self {
        let session = Session::new(config.opening);
        let mut flash = FlashBoard::new(config.display.flash_dwell(), event_tx);
        for statement in Statement::ALL {
            for field in statement.fields() {
                flash.watch(field, session.snapshot());
            }
        }
        let currency = CurrencyFormat::from_config(&config.display);
        Self {
            config,
            session,
            flash,
            currency,
            input: InputState::new(),
            focus: FocusPanel::Action,
            hidden: BTreeSet::new(),
            last_applied: None,
            should_quit: false,
            dirty: true,
        }
    }

    pub fn cycle_focus(&mut self) {
        self.focus = match self.focus {
            FocusPanel::Action => FocusPanel::Amount,
            FocusPanel::Amount => FocusPanel::Execute,
            FocusPanel::Execute => FocusPanel::Action,
        };
        self.dirty = true;
    }

    pub fn cycle_focus_back(&mut self) {
        self.focus = match self.focus {
            FocusPanel::Action => FocusPanel::Execute,
            FocusPanel::Amount => FocusPanel::Action,
            FocusPanel::Execute => FocusPanel::Amount,
        };
        self.dirty = true;
    }

    /// Step through `[none, catalogue...]`, wrapping at both ends.
    pub fn cycle_action(&mut self, forward: bool) {
        let options: Vec<Option<ActionKind>> = std::iter::once(None)
            .chain(ActionKind::ALL.into_iter().map(Some))
            .collect();
        let current = match self.session.selection() {
            Some(Selection::Known(kind)) => Some(*kind),
            _ => None,
        };
        let idx = options.iter().position(|o| *o == current).unwrap_or(0);
        let next = if forward {
            (idx + 1) % options.len()
        } else if idx == 0 {
            options.len() - 1
        } else {
            idx - 1
        };
        self.session
            .select_action(options[next].map(Selection::Known));
        self.dirty = true;
    }

    /// Push the edited amount text into the session.
    pub fn sync_amount(&mut self) {
        self.session.set_amount(&self.input.text);
        self.dirty = true;
    }

    pub fn can_execute(&self) -> bool {
        self.session.can_execute()
    }

    /// Run the pending action. The new snapshot is published before any
    /// field is diffed, so all fields see the same state.
    pub fn execute(&mut self) -> bool {
        let Some(done) = self.session.execute() else {
            return false;
        };
        self.flash.observe(self.session.snapshot());
        self.input.clear();
        self.focus = FocusPanel::Action;
        self.last_applied = Some(match &done.selection {
            Selection::Known(kind) if done.changed => {
                format!("{} {}", kind.label(), self.currency.amount(done.amount))
            }
            _ => "No change".to_string(),
        });
        self.dirty = true;
        true
    }

    pub fn is_visible(&self, statement: Statement) -> bool {
        !self.hidden.contains(&statement)
    }

    /// Show or hide a statement card. Hiding tears down the card's flash
    /// timers; showing it again starts from the current values.
    pub fn toggle_statement(&mut self, statement: Statement) {
        if self.hidden.remove(&statement) {
            for field in statement.fields() {
                self.flash.watch(field, self.session.snapshot());
            }
        } else {
            self.hidden.insert(statement);
            for field in statement.fields() {
                self.flash.unwatch(field);
            }
        }
        self.dirty = true;
    }

    pub fn status_line(&self) -> String {
        match self.last_applied {
            Some(ref msg) => format!("Last: {}", msg),
            None => "Ready".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ledger::FieldId;
    use tokio::time::Instant;

    fn state() -> (AppState, mpsc::UnboundedReceiver<AppEvent>) {
        let (tx, rx) = mpsc::unbounded_channel();
        (AppState::new(AppConfig::default(), tx), rx)
    }

    #[test]
    fn test_input_editing() {
        let mut input = InputState::new();
        for c in "1200".chars() {
            input.insert_char(c);
        }
        input.move_left();
        input.delete_back();
        assert_eq!(input.text, "120");
        input.move_home();
        input.delete_forward();
        assert_eq!(input.text, "20");
        input.move_end();
        input.insert_char('5');
        assert_eq!(input.text, "205");
        input.clear();
        assert_eq!((input.text.as_str(), input.cursor), ("", 0));
    }

    #[test]
    fn test_amount_chars() {
        assert!("-12.5e3".chars().all(is_amount_char));
        assert!(!is_amount_char('x'));
        assert!(!is_amount_char(' '));
    }

    #[tokio::test]
    async fn test_cycle_action_wraps() {
        let (mut state, _rx) = state();
        assert_eq!(state.session.selection(), None);
        state.cycle_action(true);
        assert_eq!(
            state.session.selection(),
            Some(&Selection::Known(ActionKind::SellEquipment))
        );
        state.cycle_action(false);
        assert_eq!(state.session.selection(), None);
        state.cycle_action(false);
        assert_eq!(
            state.session.selection(),
            Some(&Selection::Known(ActionKind::MakeRevenue))
        );
        state.cycle_action(true);
        assert_eq!(state.session.selection(), None);
    }

    #[tokio::test(start_paused = true)]
    async fn test_execute_flashes_changed_fields() {
        let (mut state, _rx) = state();
        state.session.select_action_id("payDividend");
        state.input.text = "20000".into();
        state.sync_amount();
        assert!(state.can_execute());

        assert!(state.execute());
        let now = Instant::now();
        assert_eq!(state.flash.delta(FieldId::Cash, now), Some(-20_000.0));
        assert_eq!(state.flash.delta(FieldId::RetainedEarnings, now), Some(-20_000.0));
        assert_eq!(state.flash.delta(FieldId::Financing, now), Some(-20_000.0));
        assert_eq!(state.flash.delta(FieldId::Revenue, now), None);
        assert_eq!(state.input.text, "");
        assert_eq!(state.status_line(), "Last: Pay Dividend $20,000");
        assert!(!state.can_execute());
        assert!(!state.execute());
    }

    #[tokio::test(start_paused = true)]
    async fn test_zero_amount_reports_no_change() {
        let (mut state, _rx) = state();
        state.session.select_action_id("payDividend");
        state.input.text = "0".into();
        state.sync_amount();

        assert!(state.execute());
        assert_eq!(state.flash.active_timers(), 0);
        assert_eq!(state.status_line(), "Last: No change");
    }

    #[tokio::test(start_paused = true)]
    async fn test_hidden_statement_does_not_flash() {
        let (mut state, _rx) = state();
        state.toggle_statement(Statement::CashFlow);
        assert!(!state.is_visible(Statement::CashFlow));
        assert!(!state.flash.is_watched(FieldId::Investing));

        state.session.select_action_id("sellAsset");
        state.input.text = "100".into();
        state.sync_amount();
        state.execute();
        assert_eq!(state.flash.active_timers(), 2);

        state.toggle_statement(Statement::CashFlow);
        let shown = state
            .flash
            .displayed(FieldId::Investing, Instant::now())
            .unwrap();
        assert_eq!(shown.value, 100.0);
        assert_eq!(shown.delta, None);
    }
}
