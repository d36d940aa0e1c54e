use std::sync::Arc;

use cityrisk::app::App;

#[tokio::main]
async fn main() -> color_eyre::Result<()> {
    // Stdout belongs to the TUI; logs go to a file.
    let log_file = std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open("cityrisk.log")?;
    tracing_subscriber::fmt()
        .with_writer(Arc::new(log_file))
        .with_ansi(false)
        .init();

    color_eyre::install()?;
    let terminal = ratatui::init();
    let result = App::new()?.run(terminal).await;
    ratatui::restore();
    result
}
