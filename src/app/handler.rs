use crate::app::event::AppEvent;
use crate::app::state::*;
use crate::ledger::Statement;
use crossterm::event::{Event as CEvent, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

pub fn handle_event(state: &mut AppState, event: AppEvent) {
    match event {
        AppEvent::Terminal(cevent) => handle_terminal(state, cevent),
        AppEvent::InputClosed(reason) => {
            // Without input there is no way to quit, so leave now.
            tracing::warn!(%reason, "terminal input closed");
            state.should_quit = true;
        }
        AppEvent::FlashExpired { field, generation } => {
            if state.flash.expire(field, generation) {
                state.dirty = true;
            }
        }
    }
}

fn handle_terminal(state: &mut AppState, event: CEvent) {
    match event {
        CEvent::Key(key) if key.kind != KeyEventKind::Release => handle_key(state, key),
        CEvent::Resize(_, _) => state.dirty = true,
        _ => {}
    }
}

fn handle_key(state: &mut AppState, key: KeyEvent) {
    // Global keybindings
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        state.should_quit = true;
        return;
    }

    match key.code {
        KeyCode::Esc => {
            state.should_quit = true;
            return;
        }
        KeyCode::F(1) => return state.toggle_statement(Statement::BalanceSheet),
        KeyCode::F(2) => return state.toggle_statement(Statement::IncomeStatement),
        KeyCode::F(3) => return state.toggle_statement(Statement::CashFlow),
        KeyCode::Tab => return state.cycle_focus(),
        KeyCode::BackTab => return state.cycle_focus_back(),
        _ => {}
    }

    match state.focus {
        FocusPanel::Action => handle_action_key(state, key),
        FocusPanel::Amount => handle_amount_key(state, key),
        FocusPanel::Execute => handle_execute_key(state, key),
    }
}

fn handle_action_key(state: &mut AppState, key: KeyEvent) {
    match key.code {
        KeyCode::Up | KeyCode::Left | KeyCode::Char('k') => state.cycle_action(false),
        KeyCode::Down | KeyCode::Right | KeyCode::Char('j') => state.cycle_action(true),
        KeyCode::Enter => {
            state.focus = FocusPanel::Amount;
            state.dirty = true;
        }
        KeyCode::Char('q') => state.should_quit = true,
        _ => {}
    }
}

fn handle_amount_key(state: &mut AppState, key: KeyEvent) {
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        if key.code == KeyCode::Char('u') {
            state.input.clear();
            state.sync_amount();
        }
        return;
    }

    match key.code {
        KeyCode::Enter => {
            state.execute();
        }
        KeyCode::Char(c) if is_amount_char(c) => {
            state.input.insert_char(c);
            state.sync_amount();
        }
        KeyCode::Backspace => {
            state.input.delete_back();
            state.sync_amount();
        }
        KeyCode::Delete => {
            state.input.delete_forward();
            state.sync_amount();
        }
        KeyCode::Left => state.input.move_left(),
        KeyCode::Right => state.input.move_right(),
        KeyCode::Home => state.input.move_home(),
        KeyCode::End => state.input.move_end(),
        _ => {}
    }
}

fn handle_execute_key(state: &mut AppState, key: KeyEvent) {
    match key.code {
        KeyCode::Enter | KeyCode::Char(' ') => {
            state.execute();
        }
        KeyCode::Char('q') => state.should_quit = true,
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AppConfig;
    use crate::ledger::{ActionKind, FieldId, Selection};
    use tokio::sync::mpsc;
    use tokio::time::Instant;

    fn press(state: &mut AppState, code: KeyCode) {
        let key = KeyEvent::new(code, KeyModifiers::NONE);
        handle_event(state, AppEvent::Terminal(CEvent::Key(key)));
    }

    fn type_text(state: &mut AppState, text: &str) {
        for c in text.chars() {
            press(state, KeyCode::Char(c));
        }
    }

    fn new_state() -> (AppState, mpsc::UnboundedReceiver<AppEvent>) {
        let (tx, rx) = mpsc::unbounded_channel();
        (AppState::new(AppConfig::default(), tx), rx)
    }

    #[tokio::test(start_paused = true)]
    async fn test_keyboard_flow_executes_action() {
        let (mut state, mut rx) = new_state();

        press(&mut state, KeyCode::Down);
        press(&mut state, KeyCode::Down);
        assert_eq!(
            state.session.selection(),
            Some(&Selection::Known(ActionKind::TakeLoan))
        );
        press(&mut state, KeyCode::Enter);
        assert_eq!(state.focus, FocusPanel::Amount);

        type_text(&mut state, "25x000");
        assert_eq!(state.input.text, "25000");
        assert!(state.can_execute());
        press(&mut state, KeyCode::Enter);

        let snap = *state.session.snapshot();
        assert_eq!(snap.balance_sheet.assets.cash, 1_025_000.0);
        assert_eq!(snap.balance_sheet.liabilities.long_term_debt, 425_000.0);
        assert_eq!(state.focus, FocusPanel::Action);
        assert_eq!(state.session.selection(), None);

        let t = Instant::now();
        assert_eq!(state.flash.delta(FieldId::LongTermDebt, t), Some(25_000.0));

        // Feed the timer events back through the handler.
        while state.flash.active_timers() > 0 {
            let event = rx.recv().await.unwrap();
            handle_event(&mut state, event);
        }
        assert_eq!(state.flash.delta(FieldId::LongTermDebt, Instant::now()), None);
    }

    #[tokio::test]
    async fn test_execute_disabled_without_valid_amount() {
        let (mut state, _rx) = new_state();
        press(&mut state, KeyCode::Down);
        press(&mut state, KeyCode::Tab);
        type_text(&mut state, "-");
        press(&mut state, KeyCode::Tab);
        assert_eq!(state.focus, FocusPanel::Execute);
        press(&mut state, KeyCode::Enter);
        assert_eq!(
            *state.session.snapshot(),
            state.config.opening,
            "incomplete amount must not execute"
        );
        assert!(state.last_applied.is_none());
    }

    #[tokio::test]
    async fn test_ctrl_u_clears_amount() {
        let (mut state, _rx) = new_state();
        state.focus = FocusPanel::Amount;
        type_text(&mut state, "900");
        let key = KeyEvent::new(KeyCode::Char('u'), KeyModifiers::CONTROL);
        handle_event(&mut state, AppEvent::Terminal(CEvent::Key(key)));
        assert_eq!(state.input.text, "");
        assert_eq!(state.session.amount_text(), "");
    }

    #[tokio::test]
    async fn test_quit_keys() {
        let (mut state, _rx) = new_state();
        state.focus = FocusPanel::Amount;
        press(&mut state, KeyCode::Char('q'));
        assert!(!state.should_quit);
        press(&mut state, KeyCode::Esc);
        assert!(state.should_quit);

        let (mut state, _rx) = new_state();
        press(&mut state, KeyCode::Char('q'));
        assert!(state.should_quit);
    }

    #[tokio::test]
    async fn test_input_closed_quits() {
        let (mut state, _rx) = new_state();
        handle_event(&mut state, AppEvent::InputClosed("read error".into()));
        assert!(state.should_quit);
    }

    #[tokio::test]
    async fn test_function_keys_toggle_panels() {
        let (mut state, _rx) = new_state();
        press(&mut state, KeyCode::F(2));
        assert!(!state.is_visible(Statement::IncomeStatement));
        assert!(!state.flash.is_watched(FieldId::NetIncome));
        press(&mut state, KeyCode::F(2));
        assert!(state.is_visible(Statement::IncomeStatement));
        assert!(state.flash.is_watched(FieldId::NetIncome));
    }
}
