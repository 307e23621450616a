use clap::Parser;

mod bootstrap;
mod cli;
mod commands;
mod context;
mod output;
mod progress;
mod ui;

#[tokio::main]
async fn main() {
    if let Err(error) = run().await {
        eprintln!("grn error: {error:#}");
        std::process::exit(1);
    }
}

async fn run() -> anyhow::Result<()> {
    let cli = cli::Cli::parse();
    init_tracing(cli.quiet, cli.verbose)?;

    let flags = cli.global_flags();
    ui::init(&flags);

    // init and schema need no configuration or network.
    match &cli.command {
        cli::Commands::Init => return commands::init::handle(&flags),
        cli::Commands::Schema(args) => return commands::schema::handle(args),
        _ => {}
    }

    let config = bootstrap::load_config()?;
    let ctx = context::AppContext::init(config)?;

    match cli.command {
        cli::Commands::Validate(args) => commands::validate::handle(&args, &ctx, &flags).await,
        cli::Commands::Sync(args) => commands::sync::handle(&args, &ctx, &flags).await,
        cli::Commands::Grid => commands::grid::handle(&ctx, &flags).await,
        cli::Commands::Init | cli::Commands::Schema(_) => {
            unreachable!("init and schema are pre-dispatched in run")
        }
    }
}

fn init_tracing(quiet: bool, verbose: bool) -> anyhow::Result<()> {
    let level = if quiet {
        "error"
    } else if verbose {
        "debug"
    } else {
        "warn"
    };

    let filter = tracing_subscriber::EnvFilter::try_from_env("GRN_LOG")
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|error| anyhow::anyhow!("failed to initialize tracing subscriber: {error}"))?;

    Ok(())
}
