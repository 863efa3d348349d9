use rand::seq::IndexedRandom;
use serde::Deserialize;
use uuid::Uuid;

/// 待办图标（仅用于显示）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum TodoIcon {
    #[default]
    Default,
    Event,
    Done,
    Square,
    Privacy,
    Off,
}

impl TodoIcon {
    /// 图标选择器中的顺序
    pub const ALL: [TodoIcon; 6] = [
        TodoIcon::Default,
        TodoIcon::Event,
        TodoIcon::Done,
        TodoIcon::Square,
        TodoIcon::Privacy,
        TodoIcon::Off,
    ];

    /// 终端中显示的字形
    pub fn glyph(self) -> &'static str {
        match self {
            TodoIcon::Default => "◆",
            TodoIcon::Event => "📅",
            TodoIcon::Done => "✔",
            TodoIcon::Square => "■",
            TodoIcon::Privacy => "🔒",
            TodoIcon::Off => "⏻",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            TodoIcon::Default => "默认",
            TodoIcon::Event => "事件",
            TodoIcon::Done => "完成",
            TodoIcon::Square => "展开",
            TodoIcon::Privacy => "隐私",
            TodoIcon::Off => "关闭",
        }
    }

    /// 循环切换到下一个图标
    pub fn next(self) -> Self {
        let pos = Self::ALL.iter().position(|icon| *icon == self).unwrap_or(0);
        Self::ALL[(pos + 1) % Self::ALL.len()]
    }
}

/// 待办条目
///
/// 值对象：编辑会产生一个新的值，但 `id` 保持不变，
/// 这样界面在修改之后仍能找到“同一个”条目。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TodoItem {
    pub id: Uuid,
    pub task: String,
    pub icon: TodoIcon,
}

const RANDOM_TASKS: [&str; 8] = [
    "Learn ratatui",
    "Take the codelab",
    "Apply state",
    "Build dynamic UIs",
    "Hoist the state",
    "Write a reducer",
    "Walk the dog",
    "Buy oat milk",
];

impl TodoItem {
    pub fn new(task: impl Into<String>, icon: TodoIcon) -> Self {
        Self {
            id: Uuid::new_v4(),
            task: task.into(),
            icon,
        }
    }

    /// 替换任务文本，保留 id
    pub fn with_task(&self, task: impl Into<String>) -> Self {
        Self {
            task: task.into(),
            ..self.clone()
        }
    }

    /// 替换图标，保留 id
    pub fn with_icon(&self, icon: TodoIcon) -> Self {
        Self {
            icon,
            ..self.clone()
        }
    }

    /// 随机生成一个条目，便于快速测试
    pub fn random() -> Self {
        let mut rng = rand::rng();
        let task = RANDOM_TASKS.choose(&mut rng).copied().unwrap_or("Learn ratatui");
        let icon = TodoIcon::ALL.choose(&mut rng).copied().unwrap_or_default();
        Self::new(task, icon)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_items_get_distinct_ids() {
        let a = TodoItem::new("a", TodoIcon::Default);
        let b = TodoItem::new("a", TodoIcon::Default);
        assert_ne!(a.id, b.id);
        assert_ne!(a, b);
    }

    #[test]
    fn test_with_task_keeps_identity() {
        let item = TodoItem::new("buy milk", TodoIcon::Event);
        let edited = item.with_task("buy oat milk");

        assert_eq!(edited.id, item.id);
        assert_eq!(edited.task, "buy oat milk");
        assert_eq!(edited.icon, TodoIcon::Event);
        assert_eq!(item.task, "buy milk");
    }

    #[test]
    fn test_with_icon_keeps_identity() {
        let item = TodoItem::new("walk dog", TodoIcon::Default);
        let edited = item.with_icon(TodoIcon::Privacy);

        assert_eq!(edited.id, item.id);
        assert_eq!(edited.task, "walk dog");
        assert_eq!(edited.icon, TodoIcon::Privacy);
    }

    #[test]
    fn test_icon_next_cycles() {
        let mut icon = TodoIcon::default();
        for _ in 0..TodoIcon::ALL.len() {
            icon = icon.next();
        }
        assert_eq!(icon, TodoIcon::Default);
        assert_eq!(TodoIcon::Done.next(), TodoIcon::Square);
        assert_eq!(TodoIcon::Off.next(), TodoIcon::Default);
    }

    #[test]
    fn test_random_item_uses_known_task() {
        let item = TodoItem::random();
        assert!(RANDOM_TASKS.contains(&item.task.as_str()));
        assert!(TodoIcon::ALL.contains(&item.icon));
    }
}
