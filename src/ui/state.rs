//! App 状态定义 (Model)
//!
//! 这里只保存界面层自己的临时状态。条目列表和编辑选择属于 `TodoStore`，
//! 界面层只读取它们。

use std::collections::HashMap;

use rand::Rng;
use uuid::Uuid;

use crate::config::Config;
use crate::models::{TodoIcon, TodoItem};
use crate::store::TodoStore;

/// 界面层状态
pub struct App {
    pub draft: EntryDraft,
    pub focus: Focus,
    pub selected_index: usize,
    pub tints: HashMap<Uuid, u8>, // id -> 亮度，按 id 记住
    pub message: Option<String>,
    pub random_tint: bool,
    pub add_button_label: String,
}

/// 尚未提交的新条目
#[derive(Debug, Clone, PartialEq, Default)]
pub struct EntryDraft {
    pub text: String,
    pub icon: TodoIcon,
    pub reset_icon: TodoIcon,
}

impl EntryDraft {
    pub fn new(reset_icon: TodoIcon) -> Self {
        Self {
            text: String::new(),
            icon: reset_icon,
            reset_icon,
        }
    }

    /// 文本非空白时才允许提交，也才显示图标选择
    pub fn is_submittable(&self) -> bool {
        !self.text.trim().is_empty()
    }

    pub fn reset(&mut self) {
        self.text.clear();
        self.icon = self.reset_icon;
    }
}

/// 焦点位置
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    Entry,
    List,
}

/// 应用模式，由焦点和 store 的编辑状态推导
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppMode {
    Entry,
    Browsing,
    Editing,
}

impl App {
    /// 创建新的应用实例
    pub fn new(config: &Config) -> Self {
        Self {
            draft: EntryDraft::new(config.default_icon),
            focus: Focus::Entry,
            selected_index: 0,
            tints: HashMap::new(),
            message: None,
            random_tint: config.random_tint,
            add_button_label: config.add_button_label.clone(),
        }
    }

    /// 当前模式。编辑状态每次都从 store 读取，不在这里缓存
    pub fn mode(&self, store: &TodoStore) -> AppMode {
        if store.currently_editing_item().is_some() {
            AppMode::Editing
        } else {
            match self.focus {
                Focus::Entry => AppMode::Entry,
                Focus::List => AppMode::Browsing,
            }
        }
    }

    /// 获取光标所在的条目
    pub fn selected_item<'a>(&self, store: &'a TodoStore) -> Option<&'a TodoItem> {
        store.items().get(self.selected_index)
    }

    /// 确保选中索引有效
    pub fn clamp_selection(&mut self, len: usize) {
        if len == 0 {
            self.selected_index = 0;
        } else if self.selected_index >= len {
            self.selected_index = len - 1;
        }
    }

    /// 条目图标的亮度，首次使用时随机生成
    pub fn tint_for(&mut self, id: Uuid) -> u8 {
        if !self.random_tint {
            return u8::MAX;
        }
        *self.tints.entry(id).or_insert_with(|| {
            let alpha = rand::rng().random::<f32>().clamp(0.3, 0.9);
            (alpha * f32::from(u8::MAX)) as u8
        })
    }

    /// 丢弃已删除条目的亮度记录
    pub fn forget_missing_tints(&mut self, store: &TodoStore) {
        self.tints
            .retain(|id, _| store.items().iter().any(|item| item.id == *id));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_draft_validation_trims() {
        let mut draft = EntryDraft::new(TodoIcon::Default);
        assert!(!draft.is_submittable());
        draft.text = "   \t".to_string();
        assert!(!draft.is_submittable());
        draft.text = "  milk ".to_string();
        assert!(draft.is_submittable());
    }

    #[test]
    fn test_draft_reset_uses_configured_icon() {
        let mut draft = EntryDraft::new(TodoIcon::Event);
        draft.text = "x".to_string();
        draft.icon = TodoIcon::Off;
        draft.reset();
        assert_eq!(draft.text, "");
        assert_eq!(draft.icon, TodoIcon::Event);
    }

    #[test]
    fn test_mode_follows_store_editing() {
        let mut store = TodoStore::new();
        let mut app = App::new(&Config::default());
        assert_eq!(app.mode(&store), AppMode::Entry);

        app.focus = Focus::List;
        assert_eq!(app.mode(&store), AppMode::Browsing);

        let item = TodoItem::new("a", TodoIcon::Default);
        store.add_item(item.clone());
        store.on_edit_item_selected(&item);
        assert_eq!(app.mode(&store), AppMode::Editing);

        store.on_edit_done();
        assert_eq!(app.mode(&store), AppMode::Browsing);
    }

    #[test]
    fn test_tint_is_remembered_per_id() {
        let mut app = App::new(&Config::default());
        let id = Uuid::new_v4();
        let first = app.tint_for(id);
        assert_eq!(app.tint_for(id), first);
        assert!((76..=230).contains(&first));
    }

    #[test]
    fn test_tint_disabled() {
        let config = Config {
            random_tint: false,
            ..Config::default()
        };
        let mut app = App::new(&config);
        assert_eq!(app.tint_for(Uuid::new_v4()), u8::MAX);
        assert!(app.tints.is_empty());
    }

    #[test]
    fn test_clamp_selection() {
        let mut app = App::new(&Config::default());
        app.selected_index = 5;
        app.clamp_selection(3);
        assert_eq!(app.selected_index, 2);
        app.clamp_selection(0);
        assert_eq!(app.selected_index, 0);
    }
}
