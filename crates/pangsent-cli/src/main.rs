use clap::Parser;
use pangsent_cli::cli::{Cli, Commands};
use pangsent_cli::interactive::render;
use pangsent_cli::{run_batch, run_interactive, JsonLinesStore};
use pangsent_resolver::{AnalyzerConfig, Resolver};
use tokio::io::BufReader;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    init_logging(cli.verbose);

    let mut config = AnalyzerConfig::load(&cli.config)?;
    if cli.offline {
        config = config.offline();
    }
    let resolver = Resolver::from_config(&config)?;

    match cli.command {
        Commands::Analyze { text, json } => {
            let result = resolver.resolve(&text).await;
            if json {
                println!("{}", serde_json::to_string_pretty(&result)?);
            } else {
                print!("{}", render(&result));
            }
        }

        Commands::Interactive => {
            println!("Type feedback in Pangasinan or English, `quit` to leave.");
            let stdin = BufReader::new(tokio::io::stdin());
            let analyzed = run_interactive(&resolver, stdin, tokio::io::stdout()).await?;
            info!("Interactive session ended after {} entries", analyzed);
        }

        Commands::Batch {
            input,
            output,
            concurrency,
        } => {
            let store = JsonLinesStore::open(&input, &output).await?;
            let report = run_batch(&resolver, &store, concurrency).await?;

            println!("Feedback updated successfully!");
            println!("{}", serde_json::to_string_pretty(&report)?);
        }
    }

    Ok(())
}

fn init_logging(verbose: bool) {
    let filter = if verbose {
        "pangsent=debug"
    } else {
        "pangsent=warn"
    };

    // logs go to stderr so stdout stays parseable
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| filter.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}
