//! UI 模块
//!
//! 采用 MVI (Model-View-Intent) 架构，状态提升到 `TodoStore`：
//! - Model (state.rs): 界面层自己的临时状态（输入草稿、光标、焦点）
//! - View (view/): 纯函数，将 store 快照和界面状态映射为 UI
//! - Intent (actions.rs): 按键转化为 Action，再转化为发给 store 的 TodoEvent

pub mod actions;
pub mod input;
pub mod logic;
pub mod state;
pub mod view;

// Re-export for convenience
pub use input::handle_key_event;
pub use state::App;
pub use view::render;
