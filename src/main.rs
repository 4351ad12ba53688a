use mapty_rs::app::AppController;
use mapty_rs::config::Config;
use mapty_rs::console::{self, Command, ConsoleMap, ConsoleView};
use mapty_rs::error::AppError;
use mapty_rs::storage::FileStorage;
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::sync::mpsc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), AppError> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "mapty_rs=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let config = Config::from_env();
    let storage = FileStorage::open(&config.data_dir)?;
    tracing::info!("Workouts stored in {}", storage.dir().display());

    let (events_tx, mut events_rx) = mpsc::unbounded_channel();
    let mut app = AppController::new(
        ConsoleMap::new(),
        storage,
        ConsoleView::new(),
        config.zoom,
        events_tx.clone(),
    );
    app.start(console::locate(config.position)).await;

    println!("{}", console::HELP);
    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        let command = match console::parse_command(&line) {
            Ok(Command::Quit) => break,
            Ok(command) => command,
            Err(err) => {
                println!("{err}");
                continue;
            }
        };

        let restart = command == Command::Reset;
        console::execute(&mut app, &events_tx, command);
        app.drain(&mut events_rx);

        if restart {
            app.start(console::locate(config.position)).await;
        }
    }

    Ok(())
}
