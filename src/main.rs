use tracing::{info, Level};
use tracing_subscriber::fmt::format::FmtSpan;

use adboard_server::{run, Config, Error};

fn main() -> Result<(), Error> {
    let config = Config::from_env();

    let level = if config.debug {
        Level::DEBUG
    } else {
        Level::INFO
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_span_events(FmtSpan::NEW)
        .compact()
        .init();

    info!("starting dashboard on {}:{}", config.host, config.port);

    run(config, true)
}
