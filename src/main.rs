//! termfolio - an interactive portfolio terminal for the console
//!
//! termfolio renders a personal portfolio as a faux shell session: a
//! static command table answers `help`, `about`, `projects` and friends,
//! with bash-style history recall and tab completion. A decorative ID
//! card hangs beside the terminal when the window is wide enough.
//!
//! # Features
//!
//! - **Command Terminal**: fixed command set with instant responses
//! - **History Recall**: arrow keys walk previously submitted commands
//! - **Tab Completion**: single-match prefix completion
//! - **Scrollback**: wheel and PageUp/PageDown review long transcripts
//! - **Color Schemes**: built-in themes with config/CLI selection
//! - **ID Card Panel**: decorative badge, hidden on narrow windows
//!
//! # Quick Start
//!
//! ```text
//! termfolio              # Default identity and theme
//! termfolio -t nord      # Pick a color scheme
//! termfolio --no-card    # Terminal only
//! ```
//!
//! # Keys
//!
//! | Key | Action |
//! |-----|--------|
//! | Enter | Submit command |
//! | ↑ / ↓ | History recall |
//! | Tab | Complete command name |
//! | Ctrl+L | Clear terminal |
//! | Ctrl+V | Paste into input |
//! | PageUp/PageDown, wheel | Scroll transcript |
//! | Ctrl+C / Ctrl+D | Quit |

mod commands;
mod config;
mod history;
mod session;
mod ui;

use std::env;
use std::io::Write;
use std::path::PathBuf;
use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEventKind, KeyModifiers, MouseEventKind};
use crossterm::terminal;
use tracing::{info, warn, Level};
use tracing_subscriber::FmtSubscriber;

use crate::commands::CommandTable;
use crate::config::{ColorScheme, Config as AppConfig};
use crate::session::Session;
use crate::ui::Renderer;

/// Command-line options
#[derive(Default)]
struct CliOptions {
    /// Color scheme override
    theme: Option<String>,
    /// Prompt username override
    user: Option<String>,
    /// Prompt hostname override
    host: Option<String>,
    /// Hide the ID card panel
    no_card: bool,
}

/// Version string from Cargo.toml
const VERSION: &str = env!("CARGO_PKG_VERSION");

fn print_version() {
    eprintln!("termfolio {}", VERSION);
}

fn print_help() {
    eprintln!("termfolio {} - an interactive portfolio terminal", VERSION);
    eprintln!();
    eprintln!("Usage: termfolio [OPTIONS]");
    eprintln!();
    eprintln!("Options:");
    eprintln!("  -t, --theme <NAME>    Color scheme (see list below)");
    eprintln!("  -u, --user <NAME>     Username shown in the prompt");
    eprintln!("  -H, --host <NAME>     Hostname shown in the prompt");
    eprintln!("      --no-card         Hide the ID card panel");
    eprintln!("  -v, --version         Show version");
    eprintln!("  -h, --help            Show this help");
    eprintln!();
    eprintln!("Terminal commands: type 'help' at the prompt.");
    eprintln!();
    eprintln!("Keys:");
    eprintln!("  Enter                 Submit command");
    eprintln!("  Up/Down               History recall");
    eprintln!("  Tab                   Complete command name");
    eprintln!("  Ctrl+L                Clear terminal");
    eprintln!("  Ctrl+V                Paste into input");
    eprintln!("  PageUp/PageDown       Scroll transcript");
    eprintln!("  Ctrl+C, Ctrl+D        Quit");
    eprintln!();
    eprintln!("Configuration: ~/.termfolio/config.toml");
    eprintln!();
    eprintln!(
        "Color schemes: {}",
        ColorScheme::list().join(", ")
    );
}

fn parse_args() -> Result<CliOptions, String> {
    let args: Vec<String> = env::args().collect();
    let mut options = CliOptions::default();
    let mut i = 1;

    while i < args.len() {
        match args[i].as_str() {
            "-h" | "--help" => {
                print_help();
                std::process::exit(0);
            }
            "-v" | "--version" => {
                print_version();
                std::process::exit(0);
            }
            "-t" | "--theme" => {
                i += 1;
                if i >= args.len() {
                    return Err("Missing theme argument".to_string());
                }
                options.theme = Some(args[i].clone());
            }
            "-u" | "--user" => {
                i += 1;
                if i >= args.len() {
                    return Err("Missing user argument".to_string());
                }
                options.user = Some(args[i].clone());
            }
            "-H" | "--host" => {
                i += 1;
                if i >= args.len() {
                    return Err("Missing host argument".to_string());
                }
                options.host = Some(args[i].clone());
            }
            "--no-card" => {
                options.no_card = true;
            }
            arg => {
                return Err(format!("Unknown argument: {}. Use -h for help.", arg));
            }
        }
        i += 1;
    }

    Ok(options)
}

/// Application data directory (`~/.termfolio`), created on first use.
pub(crate) fn app_dir() -> Option<PathBuf> {
    let home = env::var_os("HOME")
        .or_else(|| env::var_os("USERPROFILE"))
        .map(PathBuf::from)?;
    let dir = home.join(".termfolio");
    if !dir.exists() {
        let _ = std::fs::create_dir_all(&dir);
    }
    Some(dir)
}

fn main() -> anyhow::Result<()> {
    // Parse command line arguments
    let options = match parse_args() {
        Ok(o) => o,
        Err(e) => {
            eprintln!("Error: {}", e);
            eprintln!("Use --help for usage information");
            std::process::exit(1);
        }
    };

    // Initialize logging to file
    let log_path = app_dir()
        .map(|dir| dir.join("termfolio.log"))
        .unwrap_or_else(|| PathBuf::from("termfolio.log"));

    let log_file = std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(&log_path)
        .ok();

    if let Some(file) = log_file {
        let subscriber = FmtSubscriber::builder()
            .with_max_level(Level::INFO)
            .with_writer(std::sync::Mutex::new(file))
            .with_ansi(false)
            .finish();
        let _ = tracing::subscriber::set_global_default(subscriber);
    }

    info!("termfolio {} starting...", VERSION);

    // Load config file, then apply CLI overrides
    let mut config = AppConfig::load();
    if let Some(theme) = options.theme {
        config.color_scheme = theme;
    }
    if let Some(user) = options.user {
        config.username = user;
    }
    if let Some(host) = options.host {
        config.hostname = host;
    }
    if options.no_card {
        config.card.visible = false;
    }

    info!("Identity: {}@{}", config.username, config.hostname);
    info!("Color scheme: {}", config.get_color_scheme().name);

    run_terminal(config)
}

/// Run the terminal session until the user quits.
fn run_terminal(config: AppConfig) -> anyhow::Result<()> {
    let table = CommandTable::new(&config.username, &config.hostname);
    let mut session = Session::new(&config.username, &config.hostname);

    let (cols, rows) = Renderer::size()?;
    info!("Terminal size: {}x{}", cols, rows);

    let mut renderer = Renderer::new(&config);
    renderer.init()?;

    // Set window title
    let title = format!("termfolio - {}@{}", config.username, config.hostname);
    print!("\x1b]0;{}\x07", title);
    let _ = std::io::stdout().flush();

    // Run main loop
    let result = run_main_loop(&mut session, &table, &mut renderer);

    // Cleanup - multiple attempts to ensure it works
    let _ = renderer.cleanup();
    let _ = terminal::disable_raw_mode();

    print!("\x1b[?1049l"); // Leave alternate screen
    print!("\x1b[?25h"); // Show cursor
    print!("\x1b[0m"); // Reset attributes
    let _ = std::io::stdout().flush();

    result
}

/// Main event loop
fn run_main_loop(
    session: &mut Session,
    table: &CommandTable,
    renderer: &mut Renderer,
) -> anyhow::Result<()> {
    let poll_timeout = Duration::from_millis(250);

    loop {
        renderer.render(session, table)?;

        if !event::poll(poll_timeout)? {
            // Idle tick: blink the caret (and refresh the clock)
            renderer.toggle_caret();
            continue;
        }

        match event::read()? {
            Event::Key(key_event) => {
                if key_event.kind != KeyEventKind::Press {
                    continue;
                }
                renderer.show_caret();

                let ctrl = key_event.modifiers.contains(KeyModifiers::CONTROL);
                match key_event.code {
                    // Quit chords; the `exit` command only prints
                    KeyCode::Char('c') | KeyCode::Char('d') if ctrl => {
                        info!("Session closed by user");
                        break;
                    }
                    KeyCode::Char('l') if ctrl => {
                        session.clear_shortcut(table);
                    }
                    KeyCode::Char('v') | KeyCode::Char('V') if ctrl => {
                        match arboard::Clipboard::new().and_then(|mut c| c.get_text()) {
                            Ok(text) => {
                                session.scroll_to_latest();
                                session.insert_str(&text);
                            }
                            Err(e) => warn!("Clipboard paste failed: {}", e),
                        }
                    }
                    KeyCode::Enter => {
                        session.scroll_to_latest();
                        session.submit_input(table);
                    }
                    KeyCode::Up => {
                        session.recall_previous();
                    }
                    KeyCode::Down => {
                        session.recall_next();
                    }
                    KeyCode::Tab => {
                        session.complete(table);
                    }
                    KeyCode::Backspace => {
                        session.backspace();
                    }
                    KeyCode::PageUp => {
                        session.scroll_up(10);
                    }
                    KeyCode::PageDown => {
                        session.scroll_down(10);
                    }
                    KeyCode::Char(c) if !ctrl => {
                        session.scroll_to_latest();
                        session.insert_char(c);
                    }
                    _ => {}
                }
            }

            Event::Paste(text) => {
                session.scroll_to_latest();
                session.insert_str(&text);
            }

            Event::Mouse(mouse_event) => match mouse_event.kind {
                MouseEventKind::ScrollUp => {
                    session.scroll_up(3);
                }
                MouseEventKind::ScrollDown => {
                    session.scroll_down(3);
                }
                _ => {}
            },

            Event::Resize(cols, rows) => {
                info!("Resize: {}x{}", cols, rows);
            }

            _ => {}
        }
    }

    Ok(())
}
