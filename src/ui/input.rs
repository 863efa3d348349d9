//! 键盘事件映射 (Input -> Action)
//!
//! 将按键事件转换为 Action

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::actions::Action;
use super::state::{App, AppMode};
use crate::store::TodoStore;

/// 根据当前模式和按键获取对应的 Action
pub fn get_action(mode: AppMode, key: KeyEvent) -> Option<Action> {
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return match key.code {
            KeyCode::Char('c') => Some(Action::Quit),
            KeyCode::Char('r') => Some(Action::AddRandom),
            KeyCode::Char('d') if mode == AppMode::Editing => Some(Action::RemoveSelected),
            _ => None,
        };
    }

    match mode {
        AppMode::Entry => match key.code {
            KeyCode::Enter => Some(Action::Submit),
            KeyCode::Tab => Some(Action::CycleIcon),
            KeyCode::Backspace => Some(Action::DeleteChar),
            KeyCode::Down | KeyCode::Esc => Some(Action::FocusList),
            KeyCode::Char(c) => Some(Action::Input(c)),
            _ => None,
        },
        AppMode::Browsing => match key.code {
            KeyCode::Char('q') => Some(Action::Quit),
            KeyCode::Char('j') | KeyCode::Down => Some(Action::MoveSelectionDown),
            KeyCode::Char('k') | KeyCode::Up => Some(Action::MoveSelectionUp),
            KeyCode::Char('e') | KeyCode::Enter => Some(Action::StartEdit),
            KeyCode::Char('d') | KeyCode::Delete => Some(Action::RemoveSelected),
            KeyCode::Char('r') => Some(Action::AddRandom),
            KeyCode::Char('a') | KeyCode::Char('i') => Some(Action::FocusEntry),
            _ => None,
        },
        AppMode::Editing => match key.code {
            KeyCode::Enter => Some(Action::Submit),
            KeyCode::Esc => Some(Action::Cancel),
            KeyCode::Tab => Some(Action::CycleIcon),
            KeyCode::Backspace => Some(Action::DeleteChar),
            KeyCode::Delete => Some(Action::RemoveSelected),
            KeyCode::Char(c) => Some(Action::Input(c)),
            _ => None,
        },
    }
}

/// 处理按键事件，返回 true 表示退出
pub fn handle_key_event(app: &mut App, store: &mut TodoStore, key: KeyEvent) -> bool {
    match get_action(app.mode(store), key) {
        Some(action) => app.dispatch(store, action),
        None => false,
    }
}
