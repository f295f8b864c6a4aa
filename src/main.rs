// structviz: step-through data structure visualizer

use std::fs::File;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::sync::Mutex;
use std::time::Duration;

use clap::{Args, Parser, Subcommand};
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use tracing::{info, warn};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use structviz::command::StructureKind;
use structviz::engine::constants::{
    DEFAULT_BUCKET_COUNT, DEFAULT_MAX_NODES, DEFAULT_STEP_DELAY_MS, LOG_ENV_VAR,
};
use structviz::engine::{EngineConfig, Session};
use structviz::ui::App;

#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "structviz: step through data structure operations",
    long_about = None
)]
struct Cli {
    #[command(flatten)]
    engine: EngineArgs,

    #[command(subcommand)]
    command: Option<Mode>,
}

#[derive(Subcommand, Debug)]
enum Mode {
    /// Interactive terminal UI (the default)
    Tui {
        /// Structure selected at startup
        #[arg(short, long, default_value = "list")]
        structure: StructureKind,

        /// Write logs to this file (the UI owns the terminal)
        #[arg(long)]
        log_file: Option<PathBuf>,
    },

    /// Run commands headlessly and print one JSON trace per command
    #[command(
        after_help = "EXAMPLES:\n    structviz trace -s tree 'insert 50' 'insert 30' inorder\n    printf 'put apple red\\nget apple\\n' | structviz trace -s hash"
    )]
    Trace {
        #[arg(short, long)]
        structure: StructureKind,

        /// Pretty-print each trace
        #[arg(long)]
        pretty: bool,

        /// Command lines; read from stdin when none are given
        commands: Vec<String>,
    },
}

#[derive(Args, Debug)]
struct EngineArgs {
    /// Binary search tree capacity
    #[arg(long, global = true, default_value_t = DEFAULT_MAX_NODES)]
    max_nodes: usize,

    /// Hash table bucket count
    #[arg(long, global = true, default_value_t = DEFAULT_BUCKET_COUNT)]
    buckets: usize,

    /// Autoplay delay between steps, in milliseconds
    #[arg(long, global = true, default_value_t = DEFAULT_STEP_DELAY_MS)]
    step_ms: u64,
}

impl EngineArgs {
    fn config(&self) -> EngineConfig {
        EngineConfig::default()
            .with_max_nodes(self.max_nodes)
            .with_bucket_count(self.buckets)
            .with_step_delay(Duration::from_millis(self.step_ms))
    }
}

fn init_tracing(log_file: Option<File>, to_stderr: bool) {
    let filter = EnvFilter::try_from_env(LOG_ENV_VAR)
        .unwrap_or_else(|_| EnvFilter::new("structviz=info,warn"));

    let file_layer = log_file.map(|file| {
        fmt::layer()
            .compact()
            .with_ansi(false)
            .with_writer(Mutex::new(file))
    });
    let stderr_layer = to_stderr.then(|| fmt::layer().compact().with_writer(io::stderr));

    tracing_subscriber::registry()
        .with(filter)
        .with(file_layer)
        .with(stderr_layer)
        .init();
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let config = cli.engine.config();

    match cli.command {
        Some(Mode::Trace {
            structure,
            pretty,
            commands,
        }) => {
            init_tracing(None, true);
            let session = Session::new(config)?;
            run_trace(session, structure, pretty, commands)
        }
        Some(Mode::Tui {
            structure,
            log_file,
        }) => {
            let log_file = log_file.map(File::create).transpose()?;
            init_tracing(log_file, false);
            let session = Session::new(config)?;
            run_tui(session, structure)
        }
        None => {
            init_tracing(None, false);
            let session = Session::new(config)?;
            run_tui(session, StructureKind::LinkedList)
        }
    }
}

/// Execute each command line and print its trace as JSON
fn run_trace(
    mut session: Session,
    structure: StructureKind,
    pretty: bool,
    commands: Vec<String>,
) -> Result<(), Box<dyn std::error::Error>> {
    let lines: Vec<String> = if commands.is_empty() {
        io::stdin().lock().lines().collect::<Result<_, _>>()?
    } else {
        commands
    };

    let stdout = io::stdout();
    let mut out = stdout.lock();
    let mut failures = 0usize;

    for line in lines.iter().map(|l| l.trim()).filter(|l| !l.is_empty()) {
        let json = match session.execute_line(structure, line) {
            Ok(playback) => {
                let trace = playback.trace();
                if pretty {
                    serde_json::to_string_pretty(trace)?
                } else {
                    serde_json::to_string(trace)?
                }
            }
            Err(e) => {
                failures += 1;
                warn!(command = line, error = %e, "command rejected");
                serde_json::json!({ "command": line, "error": e.to_string() }).to_string()
            }
        };
        writeln!(out, "{}", json)?;
    }

    info!(
        executed = session.executed(),
        rejected = failures,
        "trace run finished"
    );
    Ok(())
}

fn run_tui(session: Session, structure: StructureKind) -> Result<(), Box<dyn std::error::Error>> {
    // Set up terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::new(session, structure);
    let res = app.run(&mut terminal);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        eprintln!("Error: {:?}", err);
    }

    Ok(())
}
