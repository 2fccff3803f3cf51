use crate::app::action::Action;
use crate::app::event::AppEvent;
use crate::app::state::AppState;
use crate::quotes::{QuoteResolver, Topic};
use crossterm::event::{Event as CEvent, KeyCode, KeyEvent, KeyModifiers};

pub fn handle_event(state: &mut AppState, event: AppEvent) -> Vec<Action> {
    match event {
        AppEvent::Terminal(cevent) => {
            state.dirty = true;
            handle_terminal(state, cevent)
        }
        AppEvent::Tick => {
            state.expire_notice();
            vec![]
        }
    }
}

fn handle_terminal(state: &mut AppState, event: CEvent) -> Vec<Action> {
    match event {
        CEvent::Key(key) => handle_key(state, key),
        CEvent::Resize(_, _) => {
            state.dirty = true;
            vec![]
        }
        _ => vec![],
    }
}

fn handle_key(state: &mut AppState, key: KeyEvent) -> Vec<Action> {
    // Global keybindings
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return vec![Action::Quit];
    }

    match key.code {
        KeyCode::Char('q') => vec![Action::Quit],
        KeyCode::Char('r') | KeyCode::Enter => vec![Action::FetchQuote { topic: state.topic }],
        // Share actions need a quote on screen
        KeyCode::Char('c') if state.has_quote() => vec![Action::CopyQuote],
        KeyCode::Char('t') if state.has_quote() => vec![Action::OpenShareLink],
        KeyCode::Char('s') if state.has_quote() => vec![Action::SaveQuote],
        KeyCode::Tab | KeyCode::Right => {
            state.next_topic();
            vec![]
        }
        KeyCode::BackTab | KeyCode::Left => {
            state.prev_topic();
            vec![]
        }
        KeyCode::Char(c @ '1'..='4') => {
            if let Some(topic) = Topic::from_index(c as usize - '1' as usize) {
                state.select_topic(topic);
            }
            vec![]
        }
        KeyCode::Esc => {
            state.dismiss_notice();
            vec![]
        }
        _ => vec![],
    }
}

/// Resolves a quote for `topic` and installs it as current. On failure the
/// previous quote stays on screen and an error notice is raised instead.
/// Returns whether the fetch succeeded.
pub async fn refresh_quote(state: &mut AppState, resolver: &QuoteResolver, topic: Topic) -> bool {
    match resolver.resolve(topic).await {
        Ok(quote) => {
            state.set_quote(quote);
            true
        }
        Err(e) => {
            state.error_notice(format!("Could not fetch a quote: {}", e));
            false
        }
    }
}
