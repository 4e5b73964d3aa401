// Analogize: data structures explained through your own interests

use std::io;

use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};

use analogize::cli::{self, Command};
use analogize::session::Session;
use analogize::ui::App;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = match cli::parse_args() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {}", e);
            eprintln!();
            cli::print_usage();
            std::process::exit(2);
        }
    };

    match config.command {
        Command::Help => {
            cli::print_usage();
            return Ok(());
        }
        Command::Version => {
            println!("analogize {}", cli::VERSION);
            return Ok(());
        }
        Command::Print | Command::Interactive => {}
    }

    analogize::logging::init(config.log_file.as_deref())?;

    let mut session = Session::new();
    if let Some(interest) = config.interest {
        session.select_interest(interest);
    }
    if let Some(concept) = config.concept {
        session.select_concept(concept);
    }

    if config.command == Command::Print {
        // parse_args guarantees both halves for --print
        if let Some(explanation) = session.explanation() {
            print!("{}", explanation.to_plain_text());
        }
        return Ok(());
    }

    // Set up terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::new(session);
    let res = app.run(&mut terminal);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        tracing::error!(error = %err, "event loop failed");
        eprintln!("Error: {:?}", err);
    }

    tracing::info!("exiting");
    Ok(())
}
