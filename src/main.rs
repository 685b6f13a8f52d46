// cardnews: card-news donation carousel for the terminal

use std::io;

use clap::Parser;
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use tracing::{error, info};

use cardnews::cli::Cli;
use cardnews::errors::AppResult;
use cardnews::links::{DryRunOpener, LinkOpener, SystemOpener};
use cardnews::logging;
use cardnews::ui::App;

fn main() -> AppResult<()> {
    let cli = Cli::parse();

    let log_path = cli.log_path();
    let _log_guard = logging::init_tracing(&log_path, &cli.log_level)?;
    logging::install_panic_hook();
    info!(log = %log_path.display(), no_open = cli.no_open, cell_width = cli.cell_width, "starting");

    let opener: Box<dyn LinkOpener> = if cli.no_open {
        Box::new(DryRunOpener)
    } else {
        Box::new(SystemOpener)
    };

    // Set up terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Create and run app
    let mut app = App::new(opener, cli.cell_width);
    let res = app.run(&mut terminal);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        DisableMouseCapture,
        LeaveAlternateScreen
    )?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        error!(error = %err, "event loop failed");
        return Err(err.into());
    }

    Ok(())
}
