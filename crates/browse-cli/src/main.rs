use anyhow::Result;
use browse_cli::{commands, output};
use browse_core::FilePreferenceStore;
use browse_launcher::{Detector, LaunchRequest, Launcher, Mode, SystemEnv, resolve_default};
use clap::{CommandFactory, Parser};
use clap_complete::{Shell, generate};
use std::io;
use std::path::PathBuf;
use std::process::ExitCode;

const EXAMPLES: &str = "\
Examples:
  # Open a website
  browse archlinux.org

  # Search on Google
  browse -s \"arch linux wiki\"

  # Search on YouTube
  browse -y \"arch linux installation\"

  # Use a specific browser
  browse -b firefox archlinux.org

  # Set default browser
  browse --set-default firefox";

#[derive(Parser)]
#[command(name = "browse")]
#[command(author, version, long_about = None)]
#[command(
    about = "Open an installed web browser at a URL, a web search, or a YouTube search",
    after_help = EXAMPLES
)]
struct Cli {
    /// URL to open (https:// is added if needed)
    #[arg(value_name = "URL")]
    url: Option<String>,

    /// Browser to use instead of the default
    #[arg(short, long, value_name = "BROWSER")]
    browser: Option<String>,

    /// Search the web for TERM
    #[arg(short, long, value_name = "TERM")]
    search: Option<String>,

    /// Search YouTube for TERM
    #[arg(short, long, value_name = "TERM")]
    youtube: Option<String>,

    /// Set the default browser
    #[arg(long, value_name = "BROWSER")]
    set_default: Option<String>,

    /// List installed browsers
    #[arg(long)]
    list: bool,

    /// Preference file (defaults to ~/.config/browse/config)
    #[arg(long, value_name = "PATH", env = "BROWSE_CONFIG")]
    config: Option<PathBuf>,

    /// Print a shell completion script and exit
    #[arg(long, value_name = "SHELL")]
    completions: Option<Shell>,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

/// An empty value counts as not given
fn given(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.is_empty())
}

impl Cli {
    /// youtube > search > url > plain start
    fn mode(&self) -> Mode {
        if let Some(term) = given(&self.youtube) {
            Mode::YoutubeSearch(term.to_string())
        } else if let Some(term) = given(&self.search) {
            Mode::Search(term.to_string())
        } else if let Some(url) = given(&self.url) {
            Mode::OpenUrl(url.to_string())
        } else {
            Mode::Plain
        }
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    // Initialize logging
    init_logging(cli.verbose);

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            output::error(&format!("{e:#}"));
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    if let Some(shell) = cli.completions {
        print_completions(shell);
        return Ok(());
    }

    let env = SystemEnv;
    let detector = Detector::new(&env);
    let installed = detector.detect_all()?;

    let store = match &cli.config {
        Some(path) => FilePreferenceStore::new(path.clone()),
        None => FilePreferenceStore::at_default_location(),
    };
    tracing::debug!("Preference file: {:?}", store.path());
    let default_browser = resolve_default(&installed, &store, &detector);

    if cli.list {
        commands::list::execute(&installed, default_browser);
        return Ok(());
    }

    if let Some(name) = given(&cli.set_default) {
        return commands::set_default::execute(name, &installed, &detector, &store);
    }

    let browser = match given(&cli.browser) {
        Some(name) => match commands::select_browser(name, &installed, &detector) {
            Some(browser) => browser,
            None => return Ok(()),
        },
        None => default_browser,
    };

    let request = LaunchRequest::new(browser, cli.mode());
    commands::open::execute(&request, &detector, &Launcher::new(&env));
    Ok(())
}

fn print_completions(shell: Shell) {
    let mut cmd = Cli::command();
    let bin_name = cmd.get_name().to_string();
    generate(shell, &mut cmd, bin_name, &mut io::stdout());
}

fn init_logging(verbose: bool) {
    use tracing_subscriber::EnvFilter;

    let filter = if verbose {
        EnvFilter::new("browse=debug,browse_cli=debug,browse_core=debug,browse_launcher=debug")
    } else {
        EnvFilter::new("browse=info")
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .without_time()
        .with_writer(io::stderr)
        .init();
}
