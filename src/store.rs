//! 状态持有者 (State Holder)
//!
//! `TodoStore` 是条目列表和编辑选择的唯一所有者，也是唯一能修改它们的地方。
//! 界面层只读取快照，并通过 [`TodoEvent`] 把事件发回这里。

use std::fmt;

use uuid::Uuid;

use crate::models::TodoItem;
use crate::ui::actions::TodoEvent;

/// 状态变化通知
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreChange {
    ItemAdded(Uuid),
    ItemRemoved(Uuid),
    ItemChanged(Uuid),
    EditSelected(Option<Uuid>), // None 表示没有找到对应条目
    EditDone,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Listener = Box<dyn FnMut(&StoreChange)>;

/// 待办列表的状态持有者
#[derive(Default)]
pub struct TodoStore {
    items: Vec<TodoItem>,
    editing: Option<usize>,
    version: u64,
    listeners: Vec<(SubscriptionId, Listener)>,
    next_subscription: u64,
}

impl TodoStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// 按插入顺序排列的条目
    pub fn items(&self) -> &[TodoItem] {
        &self.items
    }

    /// 当前正在编辑的条目，每次都由 `items` 和编辑位置重新计算
    pub fn currently_editing_item(&self) -> Option<&TodoItem> {
        self.editing.and_then(|index| self.items.get(index))
    }

    /// 每次状态变化都会递增，可用于轮询
    pub fn version(&self) -> u64 {
        self.version
    }

    // ============ 事件 ============

    /// 追加条目（不做校验）
    pub fn add_item(&mut self, item: TodoItem) {
        let id = item.id;
        self.items.push(item);
        self.notify(StoreChange::ItemAdded(id));
    }

    /// 删除第一个 id 匹配的条目，不存在则忽略。
    /// 无论删除的是哪个条目，都会结束编辑状态。
    pub fn remove_item(&mut self, item: &TodoItem) {
        if let Some(pos) = self.position_of(item.id) {
            self.items.remove(pos);
            self.notify(StoreChange::ItemRemoved(item.id));
        }
        self.on_edit_done();
    }

    /// 结束编辑，可重复调用
    pub fn on_edit_done(&mut self) {
        if self.editing.take().is_some() {
            self.notify(StoreChange::EditDone);
        }
    }

    /// 选择要编辑的条目；找不到时变为“没有正在编辑的条目”
    pub fn on_edit_item_selected(&mut self, item: &TodoItem) {
        let previous = self.editing;
        self.editing = self.position_of(item.id);
        if previous != self.editing {
            let selected = self.currently_editing_item().map(|current| current.id);
            self.notify(StoreChange::EditSelected(selected));
        }
    }

    /// 原地替换正在编辑的条目。
    ///
    /// # Panics
    ///
    /// 没有正在编辑的条目，或 `item.id` 与正在编辑的条目不一致时 panic：
    /// 这说明调用方违反了约定。
    pub fn on_edit_item_change(&mut self, item: TodoItem) {
        let current = self
            .currently_editing_item()
            .expect("on_edit_item_change called while no item is being edited");
        assert!(
            current.id == item.id,
            "You can only change an item with same id as the currently edited item"
        );

        let id = item.id;
        if let Some(index) = self.editing {
            self.items[index] = item;
        }
        self.notify(StoreChange::ItemChanged(id));
    }

    /// 把界面事件路由到对应的操作
    pub fn apply(&mut self, event: TodoEvent) {
        match event {
            TodoEvent::AddItem(item) => self.add_item(item),
            TodoEvent::RemoveItem(item) => self.remove_item(&item),
            TodoEvent::StartEdit(item) => self.on_edit_item_selected(&item),
            TodoEvent::EditItemChange(item) => self.on_edit_item_change(item),
            TodoEvent::EditDone => self.on_edit_done(),
        }
    }

    // ============ 订阅 ============

    /// 注册监听器，在每次状态变化后同步调用
    pub fn subscribe(&mut self, listener: impl FnMut(&StoreChange) + 'static) -> SubscriptionId {
        let id = SubscriptionId(self.next_subscription);
        self.next_subscription += 1;
        self.listeners.push((id, Box::new(listener)));
        id
    }

    #[allow(dead_code)]
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(sub, _)| *sub != id);
        self.listeners.len() != before
    }

    fn notify(&mut self, change: StoreChange) {
        self.version += 1;
        for (_, listener) in &mut self.listeners {
            listener(&change);
        }
    }

    fn position_of(&self, id: Uuid) -> Option<usize> {
        self.items.iter().position(|item| item.id == id)
    }
}

impl fmt::Debug for TodoStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TodoStore")
            .field("items", &self.items)
            .field("editing", &self.editing)
            .field("version", &self.version)
            .field("listeners", &self.listeners.len())
            .finish()
    }
}
