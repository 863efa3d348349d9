mod config;
mod logging;
mod models;
mod store;
mod ui;

use std::io;
use std::panic;

use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use log::{error, info, warn};
use ratatui::prelude::*;

use crate::config::{Config, config_path};
use crate::store::TodoStore;
use crate::ui::{App, render};

fn main() -> io::Result<()> {
    // 加载配置
    let config = match config_path() {
        Some(path) => Config::load(&path)?,
        None => Config::default(),
    };

    // 日志失败不致命
    let _logger = logging::start_logging(&config);

    // 状态提升：store 属于最外层，界面层只借用
    let mut store = TodoStore::new();
    logging::log_store_changes(&mut store);
    let mut app = App::new(&config);

    install_panic_hook();

    // 设置终端
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // 主循环
    let result = run_app(&mut terminal, &mut app, &mut store);

    // 恢复终端
    restore_terminal()?;
    terminal.show_cursor()?;

    if let Err(err) = &result {
        error!("event=app_exit status=error err={err}");
    }
    info!(
        "event=app_exit items={} changes={}",
        store.items().len(),
        store.version()
    );

    result
}

fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
    store: &mut TodoStore,
) -> io::Result<()> {
    loop {
        terminal.draw(|f| render(f, app, store))?;

        match event::read()? {
            Event::Key(key) if key.kind == KeyEventKind::Press => {
                if ui::handle_key_event(app, store, key) {
                    break;
                }
            }
            // 尺寸变化只需重绘，输入草稿保存在 App 中不受影响
            Event::Resize(width, height) => {
                info!("event=resize width={width} height={height} draft_len={}", app.draft.text.len());
            }
            _ => {}
        }
    }
    Ok(())
}

fn restore_terminal() -> io::Result<()> {
    disable_raw_mode()?;
    execute!(io::stdout(), LeaveAlternateScreen)
}

/// panic 时先恢复终端并记录日志，再交给默认 hook 输出
fn install_panic_hook() {
    let default_hook = panic::take_hook();
    panic::set_hook(Box::new(move |info| {
        if let Err(err) = restore_terminal() {
            warn!("event=panic_restore status=error err={err}");
        }
        error!("event=panic info={info}");
        default_hook(info);
    }));
}
