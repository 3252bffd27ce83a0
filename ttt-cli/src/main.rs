use std::path::Path;

use anyhow::Result;
use tokio::io::BufReader;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use ttt_cli::{App, Settings};

#[tokio::main]
async fn main() -> Result<()> {
    // 初始化日志（写到 stderr，避免打乱棋盘输出）
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(tracing_subscriber::EnvFilter::from_default_env()
            .add_directive("ttt_cli=info".parse()?))
        .init();

    let settings = match std::env::args().nth(1) {
        Some(path) => Settings::load_from(Path::new(&path)),
        None => Settings::load(),
    };

    info!(
        "井字棋启动: 模式 {}，玩家 {}，难度 {:?}",
        settings.mode.label(),
        settings.player_mark,
        settings.difficulty
    );

    let mut app = App::new(&settings);
    app.run(BufReader::new(tokio::io::stdin()), tokio::io::stdout()).await
}
