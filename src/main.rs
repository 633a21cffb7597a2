use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use turn_queue::config::BotConfig;
use turn_queue::round::TurnRound;

/// Console stand-in for a chat connection: reads `user: message` lines from
/// stdin and prints replies to stdout. Logs go to stderr.
#[tokio::main]
async fn main() -> std::io::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "turn_queue=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let config = BotConfig::from_env();
    info!(
        prefix = %config.command_prefix,
        cycle_size = config.cycle_size.get(),
        default_priority = %config.default_priority,
        "Starting console bot"
    );
    let mut round = TurnRound::new(config);

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        let Some((user, text)) = split_console_line(&line) else {
            if !line.trim().is_empty() {
                warn!(%line, "Expected `user: message`");
            }
            continue;
        };
        if let Some(reply) = round.handle_message(user, text) {
            println!("{}", reply);
        }
    }

    info!("stdin closed, exiting");
    Ok(())
}

fn split_console_line(line: &str) -> Option<(&str, &str)> {
    let (user, text) = line.split_once(':')?;
    let user = user.trim();
    if user.is_empty() {
        return None;
    }
    Some((user, text.trim()))
}
