use std::io;

use anyhow::Result;
use orbito_cli::{Settings, Shell};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

const USAGE: &str = "\
Usage: orbito [--write-settings | --help]

  --write-settings   write the current settings to the settings file and exit
  --help             show this message

The settings file is read from $ORBITO_SETTINGS, or orbito/settings.json
under the system config directory. RUST_LOG overrides the log level.";

fn main() -> Result<()> {
    let args: Vec<String> = std::env::args().skip(1).collect();
    if args.iter().any(|arg| arg == "--help" || arg == "-h") {
        println!("{}", USAGE);
        return Ok(());
    }

    let (settings, status) = Settings::load();

    // 初始化日志（输出到 stderr，不干扰棋盘）
    let rust_log = std::env::var("RUST_LOG").ok();
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .with(settings.log_filter(rust_log.as_deref()))
        .init();

    status.report();

    if args.iter().any(|arg| arg == "--write-settings") {
        let path = settings.save()?;
        println!("Settings written to {}", path.display());
        return Ok(());
    }

    if let Some(unknown) = args.first() {
        anyhow::bail!("unknown argument: {}\n\n{}", unknown, USAGE);
    }

    info!(rules = ?settings.rules, "Orbito 终端启动");

    let stdin = io::stdin();
    let stdout = io::stdout();
    Shell::new(settings, stdin.lock(), stdout.lock()).run()
}
