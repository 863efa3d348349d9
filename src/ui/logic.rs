//! 业务逻辑处理 (Update/Dispatch)
//!
//! 把 Action 转换为 `TodoEvent` 交给 store，或只更新界面层自己的状态。
//! 这里从不直接修改条目列表。

use super::actions::{Action, TodoEvent};
use super::state::{App, AppMode, Focus};
use crate::models::TodoItem;
use crate::store::TodoStore;

impl App {
    /// 核心逻辑分发，返回 true 表示退出
    pub fn dispatch(&mut self, store: &mut TodoStore, action: Action) -> bool {
        let mode = self.mode(store);
        match action {
            Action::Quit => return true,
            Action::MoveSelectionUp => self.move_up(),
            Action::MoveSelectionDown => self.move_down(store),

            Action::FocusEntry => self.focus = Focus::Entry,
            Action::FocusList => {
                self.focus = Focus::List;
                self.clamp_selection(store.items().len());
            }

            Action::StartEdit => self.start_edit(store),
            Action::RemoveSelected => self.remove_selected(store, mode),
            Action::AddRandom => {
                self.emit(store, TodoEvent::AddItem(TodoItem::random()));
                self.message = Some("已添加随机条目".to_string());
            }

            Action::Submit => match mode {
                AppMode::Entry => self.submit_draft(store),
                AppMode::Editing => self.emit(store, TodoEvent::EditDone),
                AppMode::Browsing => {}
            },
            Action::Cancel => {
                if mode == AppMode::Editing {
                    self.emit(store, TodoEvent::EditDone);
                }
            }

            Action::CycleIcon => match mode {
                AppMode::Entry => {
                    if self.draft.is_submittable() {
                        self.draft.icon = self.draft.icon.next();
                    }
                }
                AppMode::Editing => self.change_editing(store, |item| item.with_icon(item.icon.next())),
                AppMode::Browsing => {}
            },

            Action::Input(c) => match mode {
                AppMode::Entry => self.draft.text.push(c),
                AppMode::Editing => self.change_editing(store, |item| {
                    let mut task = item.task.clone();
                    task.push(c);
                    item.with_task(task)
                }),
                AppMode::Browsing => {}
            },

            Action::DeleteChar => match mode {
                AppMode::Entry => {
                    self.draft.text.pop();
                }
                AppMode::Editing => self.change_editing(store, |item| {
                    let mut task = item.task.clone();
                    task.pop();
                    item.with_task(task)
                }),
                AppMode::Browsing => {}
            },
        }
        false
    }

    fn emit(&mut self, store: &mut TodoStore, event: TodoEvent) {
        store.apply(event);
        self.clamp_selection(store.items().len());
    }

    // ============ 导航相关 ============

    /// 向上移动选择，到顶后回到输入框
    pub fn move_up(&mut self) {
        if self.selected_index > 0 {
            self.selected_index -= 1;
        } else {
            self.focus = Focus::Entry;
        }
    }

    /// 向下移动选择
    pub fn move_down(&mut self, store: &TodoStore) {
        if self.selected_index + 1 < store.items().len() {
            self.selected_index += 1;
        }
    }

    // ============ 添加条目相关 ============

    /// 提交输入框中的新条目，空白文本不提交
    pub fn submit_draft(&mut self, store: &mut TodoStore) {
        if !self.draft.is_submittable() {
            return;
        }
        let item = TodoItem::new(self.draft.text.clone(), self.draft.icon);
        self.emit(store, TodoEvent::AddItem(item));
        self.draft.reset();
        self.message = Some("条目已添加".to_string());
    }

    // ============ 编辑相关 ============

    /// 开始编辑光标所在的条目
    pub fn start_edit(&mut self, store: &mut TodoStore) {
        if let Some(item) = self.selected_item(store).cloned() {
            self.emit(store, TodoEvent::StartEdit(item));
            self.message = None;
        }
    }

    /// 基于当前正在编辑的条目生成新值并发回 store
    fn change_editing(&mut self, store: &mut TodoStore, edit: impl FnOnce(&TodoItem) -> TodoItem) {
        if let Some(current) = store.currently_editing_item() {
            let changed = edit(current);
            self.emit(store, TodoEvent::EditItemChange(changed));
        }
    }

    // ============ 删除相关 ============

    /// 删除正在编辑的条目，或者光标所在的条目
    pub fn remove_selected(&mut self, store: &mut TodoStore, mode: AppMode) {
        let target = match mode {
            AppMode::Editing => store.currently_editing_item().cloned(),
            AppMode::Browsing => self.selected_item(store).cloned(),
            AppMode::Entry => None,
        };
        if let Some(item) = target {
            self.emit(store, TodoEvent::RemoveItem(item));
            self.forget_missing_tints(store);
            self.message = Some("条目已删除".to_string());
        }
    }
}
