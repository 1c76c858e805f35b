// cpp2py: C++ subset to Python translator with a side-by-side viewer

use std::fs;
use std::io;
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use tracing_subscriber::{fmt, EnvFilter};

use cpp2py::codegen::{CodegenOptions, DEFAULT_INDENT_WIDTH};
use cpp2py::driver::{translate_file, Translation};
use cpp2py::ui::App;

/// Environment variable holding the log filter.
const LOG_ENV: &str = "CPP2PY_LOG";

/// Translate a C++ subset into Python.
#[derive(Debug, Parser)]
#[command(name = "cpp2py", version, about)]
struct Cli {
    /// C++ source file to translate
    file: PathBuf,

    /// Print the translation to stdout instead of opening the viewer
    #[arg(long)]
    print: bool,

    /// Write the translation to a file instead of opening the viewer
    #[arg(short, long, value_name = "PATH")]
    output: Option<PathBuf>,

    /// Spaces per indentation level in the generated Python
    #[arg(long, value_name = "N", default_value_t = DEFAULT_INDENT_WIDTH)]
    indent: usize,
}

impl Cli {
    fn opens_viewer(&self) -> bool {
        !self.print && self.output.is_none()
    }
}

fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();
    init_tracing(cli.opens_viewer());

    let options = CodegenOptions::default().with_indent_width(cli.indent);
    let translation = translate_file(&cli.file, &options)?;

    if cli.opens_viewer() {
        run_viewer(cli.file, options, translation)?;
        return Ok(ExitCode::SUCCESS);
    }

    let python = match &translation.result {
        Ok(python) => python,
        Err(err) => {
            eprintln!("{}", err);
            return Ok(ExitCode::FAILURE);
        }
    };

    if let Some(path) = &cli.output {
        fs::write(path, python)
            .with_context(|| format!("failed to write '{}'", path.display()))?;
        tracing::info!(path = %path.display(), "wrote translation");
    }
    if cli.print {
        print!("{}", python);
    }

    Ok(ExitCode::SUCCESS)
}

/// Log to stderr, filtered by `CPP2PY_LOG` (default `warn`). Colour codes
/// would garble the alternate screen, so the viewer logs plain text.
fn init_tracing(plain: bool) {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"));

    fmt()
        .with_target(false)
        .with_ansi(!plain)
        .with_writer(io::stderr)
        .with_env_filter(filter)
        .init();
}

fn run_viewer(path: PathBuf, options: CodegenOptions, translation: Translation) -> anyhow::Result<()> {
    // Set up terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Create and run app
    let mut app = App::new(path, options, translation);
    let res = app.run(&mut terminal);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    res.context("viewer terminated with an I/O error")
}
