//! 视图层模块
//!
//! 渲染是 (条目列表, 正在编辑的条目, 界面层临时状态) 的纯函数

pub mod components;

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
};

use super::state::{App, AppMode, Focus};
use crate::models::TodoItem;
use crate::store::TodoStore;
use components::{icon_row_line, render_button, render_input_widget};

/// 渲染 UI
pub fn render(frame: &mut Frame, app: &mut App, store: &TodoStore) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // 输入框
            Constraint::Length(1), // 图标
            Constraint::Min(5),    // 列表
            Constraint::Length(3), // 帮助
        ])
        .split(frame.area());

    let editing = store.currently_editing_item();
    if editing.is_some() {
        render_editing_banner(frame, chunks[0]);
    } else {
        render_entry(frame, app, chunks[0], chunks[1]);
    }
    render_list(frame, app, store, chunks[2]);
    render_help(frame, app, store, chunks[3]);
}

fn render_editing_banner(frame: &mut Frame, area: Rect) {
    let banner = Paragraph::new("正在编辑条目")
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(banner, area);
}

fn render_entry(frame: &mut Frame, app: &App, input_area: Rect, icon_area: Rect) {
    let label_width = Line::from(app.add_button_label.as_str()).width();
    let button_width = u16::try_from(label_width)
        .unwrap_or(u16::MAX)
        .saturating_add(6);
    let row = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(10), Constraint::Length(button_width)])
        .split(input_area);

    let focused = app.focus == Focus::Entry;
    render_input_widget(frame, row[0], "新条目", &app.draft.text, focused, Color::Yellow);
    render_button(frame, row[1], &app.add_button_label, app.draft.is_submittable());

    if app.draft.is_submittable() {
        frame.render_widget(Paragraph::new(icon_row_line(app.draft.icon)), icon_area);
    }
}

fn render_list(frame: &mut Frame, app: &mut App, store: &TodoStore, area: Rect) {
    let editing_id = store.currently_editing_item().map(|item| item.id);
    let list_focused = app.focus == Focus::List;

    let items: Vec<ListItem> = store
        .items()
        .iter()
        .enumerate()
        .map(|(i, todo)| {
            if editing_id == Some(todo.id) {
                inline_editor(todo)
            } else {
                let selected = list_focused && editing_id.is_none() && i == app.selected_index;
                let tint = app.tint_for(todo.id);
                todo_row(todo, tint, selected)
            }
        })
        .collect();

    let title = format!("待办 ({})", store.items().len());
    let list = List::new(items).block(Block::default().title(title).borders(Borders::ALL));

    let mut state = ListState::default();
    if list_focused && !store.items().is_empty() {
        state.select(Some(app.selected_index));
    }

    frame.render_stateful_widget(list, area, &mut state);
}

fn todo_row(todo: &TodoItem, tint: u8, selected: bool) -> ListItem<'static> {
    let style = if selected {
        Style::default()
            .fg(Color::Yellow)
            .add_modifier(Modifier::BOLD | Modifier::REVERSED)
    } else {
        Style::default()
    };

    ListItem::new(Line::from(vec![
        Span::styled(format!("{} ", todo.icon.glyph()), Style::default().fg(Color::Rgb(tint, tint, tint))),
        Span::styled(todo.task.clone(), style),
    ]))
}

/// 行内编辑器：任务文本 + 图标选择
fn inline_editor(todo: &TodoItem) -> ListItem<'static> {
    let editor = Line::from(vec![
        Span::styled("✎ ", Style::default().fg(Color::Cyan)),
        Span::styled(
            format!("{}▏", todo.task),
            Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
        ),
    ]);
    ListItem::new(vec![editor, icon_row_line(todo.icon)])
}

fn render_help(frame: &mut Frame, app: &App, store: &TodoStore, area: Rect) {
    let help_text = match app.mode(store) {
        AppMode::Entry => "[Enter] 添加  [Tab] 图标  [↓/Esc] 列表  [Ctrl-R] 随机  [Ctrl-C] 退出",
        AppMode::Browsing => {
            "[j/k] 导航  [Enter/e] 编辑  [d] 删除  [r] 随机  [a] 输入框  [q] 退出"
        }
        AppMode::Editing => "[Enter/Esc] 完成  [Tab] 图标  [Ctrl-D/Del] 删除",
    };

    let message = app.message.as_deref().unwrap_or("");
    let text = if message.is_empty() {
        help_text.to_string()
    } else {
        format!("{}  |  {}", help_text, message)
    };

    let help = Paragraph::new(text)
        .style(Style::default().fg(Color::Gray))
        .block(Block::default().borders(Borders::ALL));

    frame.render_widget(help, area);
}

#[cfg(test)]
mod tests {
    use ratatui::{Terminal, backend::TestBackend};

    use super::*;
    use crate::config::Config;
    use crate::models::TodoIcon;

    fn screen(app: &mut App, store: &TodoStore) -> String {
        let mut terminal = Terminal::new(TestBackend::new(80, 16)).unwrap();
        terminal.draw(|f| render(f, app, store)).unwrap();
        terminal
            .backend()
            .buffer()
            .content
            .iter()
            .map(|cell| cell.symbol())
            .collect::<String>()
    }

    #[test]
    fn test_renders_items_and_entry() {
        let mut app = App::new(&Config::default());
        let mut store = TodoStore::new();
        store.add_item(TodoItem::new("buy milk", TodoIcon::Default));
        store.add_item(TodoItem::new("walk dog", TodoIcon::Done));

        let text = screen(&mut app, &store);
        assert!(text.contains("buy milk"));
        assert!(text.contains("walk dog"));
        assert!(text.contains("Add"));
    }

    #[test]
    fn test_header_switches_while_editing() {
        let mut app = App::new(&Config::default());
        let mut store = TodoStore::new();
        let item = TodoItem::new("buy milk", TodoIcon::Default);
        store.add_item(item.clone());
        store.on_edit_item_selected(&item);

        let text = screen(&mut app, &store);
        assert!(!text.contains("Add"));
        assert!(text.contains("buy milk▏"));

        store.on_edit_done();
        let text = screen(&mut app, &store);
        assert!(text.contains("Add"));
        assert!(!text.contains("buy milk▏"));
    }

    #[test]
    fn test_oversized_button_label_does_not_overflow() {
        let config = Config {
            add_button_label: "x".repeat(65_533),
            ..Config::default()
        };
        let mut app = App::new(&config);
        let mut store = TodoStore::new();
        store.add_item(TodoItem::new("buy milk", TodoIcon::Default));

        let text = screen(&mut app, &store);
        assert!(text.contains("buy milk"));
    }
}
