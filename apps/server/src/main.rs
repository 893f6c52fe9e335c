use anyhow::Context;
use recruit::domain::config::{ApiConfig, LogConfig};
use recruit::kernel::config::load_config;
use recruit_logger::{LevelFilter, Logger};
use recruit_server::Server;

#[recruit_runtime::main(high_performance)]
async fn main() -> anyhow::Result<()> {
    let path = std::env::args().nth(1).unwrap_or_else(|| "server".to_owned());
    let cfg: ApiConfig = load_config(Some(&path)).context("Critical: Configuration is malformed")?;

    let _log = init_logger(&cfg.log)?;

    Server::builder().config(cfg).build()?.run().await
}

fn init_logger(cfg: &LogConfig) -> anyhow::Result<Logger> {
    let level: LevelFilter =
        cfg.level.parse().with_context(|| format!("Invalid log level '{}'", cfg.level))?;
    let builder = Logger::builder().name(env!("CARGO_PKG_NAME")).level(level);

    let logger = match &cfg.dir {
        Some(dir) => builder.path(dir).json(cfg.json).init()?,
        None => builder.init()?,
    };
    Ok(logger)
}
