mod batch;
mod cli;

use anyhow::Result;
use batch::{read_snapshot, run_batch, BatchOptions};
use clap::Parser;
use cli::{Cli, Commands, ExtractCommand, Format};
use common::{ConfigLoader, FsExt};
use dotenv::dotenv;
use engine::FeatureExtractor;
use env_logger::Env;
use log::info;
use space_invaders::{FeatureVector, SpaceInvadersExtractor};

fn main() -> Result<()> {
    dotenv().ok();
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();

    match &cli.command {
        Commands::Extract(extract_args) => extract(extract_args)?,
        Commands::Batch(batch_args) => {
            let config_path = batch_args.config.relative_to_cwd()?;
            let config = ConfigLoader::new(config_path, "batch".to_string())?;

            let batch_options: BatchOptions = config.load()?;
            info!("{:?}", batch_options);

            run_batch(&batch_options)?;
        }
    }

    Ok(())
}

fn extract(args: &ExtractCommand) -> Result<()> {
    let extractor = SpaceInvadersExtractor::new();

    for file in &args.files {
        let snapshot = read_snapshot(&file.relative_to_cwd()?)?;
        let features = extractor.extract(&snapshot);

        if args.files.len() > 1 && args.format == Format::Table {
            println!("{}", file);
        }

        println!("{}", format_features(&features, args.format)?);
    }

    Ok(())
}

fn format_features(features: &FeatureVector, format: Format) -> Result<String> {
    Ok(match format {
        Format::Table => features.to_string(),
        Format::Json => serde_json::to_string(features)?,
        Format::Values => features
            .values()
            .iter()
            .map(|v| v.to_string())
            .collect::<Vec<_>>()
            .join(","),
    })
}
