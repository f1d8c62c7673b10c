use std::io::{self, IsTerminal};

use anyhow::Result;
use clap::Parser;
use tictactoe_client::cli::Cli;
use tictactoe_client::settings::GameSettings;
use tictactoe_client::App;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

fn main() -> Result<()> {
    let cli = Cli::parse();

    let (mut settings, load_error) = GameSettings::load_or_default(cli.config.as_deref());
    cli.apply(&mut settings);

    // 初始化日志（输出到 stderr，避免打乱棋盘）
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(settings.log_level.as_directive()))?;
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .with(filter)
        .init();

    // 加载设置时日志还没就绪，在这里补报
    if let Some(e) = &load_error {
        GameSettings::warn_fallback(e);
    }

    info!(
        "井字棋启动: 难度 {:?}，先手 {:?}，主题 {:?}",
        settings.difficulty, settings.starting_player, settings.theme
    );

    let colored = !cli.no_color && io::stdout().is_terminal();
    let stdin = io::stdin().lock();
    let stdout = io::stdout().lock();

    App::new(stdin, stdout, settings)
        .with_settings_path(cli.config)
        .with_color(colored)
        .run()
}
