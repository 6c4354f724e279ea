//! `navmenu` renders a JSON menu definition for a given request path.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use clap::ValueEnum;
use navmenu_lib::Attributes;
use navmenu_lib::ConfigError;
use navmenu_lib::LinkError;
use navmenu_lib::MenuError;
use navmenu_lib::MenuRegistry;
use navmenu_lib::MenuSettings;
use navmenu_lib::context::BaseUrlResolver;
use navmenu_lib::context::Environment;
use navmenu_lib::context::StaticRequest;
use simplelog::ColorChoice;
use simplelog::Config;
use simplelog::LevelFilter;
use simplelog::TermLogger;
use simplelog::TerminalMode;

#[derive(Parser)]
#[command(name = "navmenu", version, about = "Render navigation menus as HTML")]
struct Cli {
    /// JSON menu definition
    #[arg(long)]
    menu: PathBuf,

    /// JSON settings (`default` plus per-menu overrides)
    #[arg(long)]
    settings: Option<PathBuf>,

    /// Menu name, used to pick per-menu settings
    #[arg(long, default_value = "main")]
    name: String,

    /// Container element
    #[arg(long, value_enum, default_value = "ul")]
    format: Format,

    /// Current request path, for active state
    #[arg(long, default_value = "/")]
    path: String,

    /// Application base URL
    #[arg(long, default_value = "http://localhost")]
    base_url: String,

    /// Class of the container element
    #[arg(long)]
    class: Option<String>,

    /// Log engine activity to stderr
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Format {
    Ul,
    Ol,
    Div,
}

#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error("Failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Menu(#[from] MenuError),

    #[error(transparent)]
    Link(#[from] LinkError),
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let level = if cli.verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Warn
    };
    if let Err(e) = TermLogger::init(level, Config::default(), TerminalMode::Stderr, ColorChoice::Auto) {
        eprintln!("Warning: logger unavailable: {}", e);
    }

    match run(&cli) {
        Ok(markup) => {
            println!("{}", markup);
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<String, CliError> {
    let settings = match &cli.settings {
        Some(path) => MenuSettings::from_path(path)?,
        None => MenuSettings::default(),
    };

    let request_url = format!(
        "{}/{}",
        cli.base_url.trim_end_matches('/'),
        cli.path.trim_start_matches('/')
    );
    let env = Environment::new(
        BaseUrlResolver::new(&cli.base_url)?,
        StaticRequest::from_url(&request_url)?,
    );

    let json = std::fs::read_to_string(&cli.menu).map_err(|source| CliError::Read {
        path: cli.menu.clone(),
        source,
    })?;
    log::debug!("rendering {} for {}", cli.menu.display(), request_url);

    let mut menus = MenuRegistry::new(settings, env);
    let menu = menus.make_from_json(&cli.name, &json)?;

    let mut attributes = Attributes::new();
    if let Some(class) = &cli.class {
        attributes.insert("class".to_string(), class.clone());
    }

    let markup = match cli.format {
        Format::Ul => menu.as_ul(&attributes)?,
        Format::Ol => menu.as_ol(&attributes)?,
        Format::Div => menu.as_div(&attributes)?,
    };
    Ok(markup)
}
