use anyhow::{Context, Result};
use clap::Parser;
use phrasebook::cli::Args;
use phrasebook::{PhraseResolver, PhrasebookConfig};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

fn load_config(args: &Args) -> Result<PhrasebookConfig> {
    let config = match &args.config {
        Some(path) => PhrasebookConfig::from_json_file(path)
            .with_context(|| format!("loading config from {}", path.display()))?,
        None => PhrasebookConfig::default(),
    };
    Ok(config.with_env_overrides())
}

fn run(args: Args) -> Result<()> {
    let config = load_config(&args)?;
    tracing::info!(
        locale = %config.locale,
        root = %config.resource_root.display(),
        "Phrasebook ready"
    );

    let resolver = PhraseResolver::from_config(&config);
    let slot = args.slot();

    if args.all {
        for phrase in resolver.phrases(&args.intent, slot)? {
            println!("{}", phrase);
        }
        return Ok(());
    }

    match resolver.random_phrase(&args.intent, slot)? {
        Some(phrase) => println!("{}", phrase),
        None => tracing::warn!(intent = %args.intent, ?slot, "No phrases defined"),
    }
    Ok(())
}

fn main() {
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .finish();
    if let Err(e) = tracing::subscriber::set_global_default(subscriber) {
        eprintln!("failed to install tracing subscriber: {}", e);
    }

    let args = Args::parse();
    if let Err(e) = run(args) {
        tracing::warn!("{:#}", e);
        eprintln!("error: {:#}", e);
        std::process::exit(1);
    }
}
