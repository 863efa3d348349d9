//! Action 枚举定义 (Intent)
//!
//! 按键先被转换为 `Action`，再由 dispatch 转换为发给状态持有者的 `TodoEvent`

use crate::models::TodoItem;

/// 用户操作枚举
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    Quit,
    MoveSelectionUp,
    MoveSelectionDown,

    // 焦点
    FocusEntry,
    FocusList,

    // 列表操作
    StartEdit,
    RemoveSelected,
    AddRandom,

    // 输入框/编辑器通用交互
    Submit,      // Enter
    Cancel,      // Esc
    CycleIcon,   // Tab
    Input(char), // 输入字符
    DeleteChar,  // Backspace
}

/// 界面层发给状态持有者的事件，与 `TodoStore` 的操作一一对应
#[derive(Debug, Clone, PartialEq)]
pub enum TodoEvent {
    AddItem(TodoItem),
    RemoveItem(TodoItem),
    StartEdit(TodoItem),
    EditItemChange(TodoItem),
    EditDone,
}
