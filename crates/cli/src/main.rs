use anyhow::{anyhow, Context, Result};
use clap::{Args, Parser, Subcommand, ValueEnum};
use dex_client::{ClientConfig, HttpCatalogSource, SessionDriver};
use dex_session::{DetailState, Event, ListState, Locale, StepDirection};
use serde::Serialize;
use std::path::PathBuf;
use std::sync::Arc;

mod render;

#[derive(Parser)]
#[command(name = "dex")]
#[command(about = "Browse the species catalog and its evolution lineages", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Only log warnings and errors
    #[arg(long, global = true)]
    quiet: bool,

    /// Config file (TOML or JSON)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Catalog API root (overrides config and DEX_API_BASE_URL)
    #[arg(long, global = true)]
    base_url: Option<String>,

    /// Entries per catalog page
    #[arg(long, global = true)]
    page_size: Option<u32>,

    /// Label language: es or en
    #[arg(long, global = true)]
    locale: Option<Locale>,

    /// Print JSON instead of text
    #[arg(long, global = true)]
    json: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Print one page of the catalog
    List(ListArgs),

    /// Show a species with its lineage
    Show(ShowArgs),
}

#[derive(Args)]
struct ListArgs {
    /// 1-based page number
    #[arg(long, default_value_t = 1)]
    page: u32,
}

#[derive(Args)]
struct ShowArgs {
    /// Species id
    id: u32,

    /// Walk the lineage after loading; repeatable, applied in order
    #[arg(long = "step", value_enum)]
    steps: Vec<StepArg>,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum StepArg {
    Previous,
    Next,
}

impl From<StepArg> for StepDirection {
    fn from(step: StepArg) -> Self {
        match step {
            StepArg::Previous => StepDirection::Previous,
            StepArg::Next => StepDirection::Next,
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut builder =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"));
    if cli.quiet {
        builder.filter_level(log::LevelFilter::Warn);
    } else if cli.verbose {
        builder.filter_level(log::LevelFilter::Debug);
    }
    // reqwest and hyper internals are only interesting when debugging
    if !cli.verbose {
        builder.filter_module("reqwest", log::LevelFilter::Warn);
        builder.filter_module("hyper_util", log::LevelFilter::Warn);
    }
    builder.target(env_logger::Target::Stderr).init();

    let config = load_config(&cli)?;
    log::debug!("Using catalog at {}", config.base_url);

    let source = Arc::new(
        HttpCatalogSource::new(&config.base_url).context("Failed to build HTTP client")?,
    );
    let mut driver = SessionDriver::new(source, config.session()?);

    match cli.command {
        Commands::List(ref args) => run_list(&mut driver, args, config.locale, cli.json).await?,
        Commands::Show(ref args) => run_show(&mut driver, args, config.locale, cli.json).await?,
    }

    Ok(())
}

/// Defaults, then the config file, then `DEX_*` variables, then flags.
fn load_config(cli: &Cli) -> Result<ClientConfig> {
    let base = match &cli.config {
        Some(path) => ClientConfig::load(path)?,
        None => ClientConfig::default(),
    };
    let mut config = base.with_env()?;

    if let Some(base_url) = &cli.base_url {
        config.base_url = base_url.clone();
    }
    if let Some(page_size) = cli.page_size {
        config.page_size = page_size;
    }
    if let Some(locale) = cli.locale {
        config.locale = locale;
    }

    config.validate()?;
    Ok(config)
}

async fn run_list(
    driver: &mut SessionDriver<HttpCatalogSource>,
    args: &ListArgs,
    locale: Locale,
    json: bool,
) -> Result<()> {
    driver.dispatch(Event::PageRequested(args.page))?;
    driver.settle().await?;

    match &driver.state().list {
        ListState::Ready { page } => {
            if json {
                print_json(page)?;
            } else {
                print!("{}", render::page_text(page, locale));
            }
            Ok(())
        }
        ListState::Error { message, cause, .. } => {
            Err(anyhow!(cause.clone()).context(message.clone()))
        }
        other => Err(anyhow!("Catalog page did not settle: {other:?}")),
    }
}

async fn run_show(
    driver: &mut SessionDriver<HttpCatalogSource>,
    args: &ShowArgs,
    locale: Locale,
    json: bool,
) -> Result<()> {
    driver.dispatch(Event::EntitySelected(args.id))?;
    driver.settle().await?;

    for &step in &args.steps {
        let Some(view) = driver.state().detail_view() else {
            break;
        };
        let allowed = match step {
            StepArg::Previous => view.display.can_step_previous,
            StepArg::Next => view.display.can_step_next,
        };
        if !allowed {
            log::warn!(
                "Cannot step {} from #{}; staying put",
                match step {
                    StepArg::Previous => "previous",
                    StepArg::Next => "next",
                },
                view.entity_id
            );
            continue;
        }
        driver.dispatch(Event::StepRequested(step.into()))?;
        driver.settle().await?;
    }

    match &driver.state().detail {
        DetailState::Ready { view } => {
            if json {
                print_json(&view.display)?;
            } else {
                print!("{}", render::detail_text(&view.display, locale));
            }
            Ok(())
        }
        DetailState::Error { message, cause, .. } => {
            Err(anyhow!(cause.clone()).context(message.clone()))
        }
        other => Err(anyhow!("Species detail did not settle: {other:?}")),
    }
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
