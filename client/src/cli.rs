use clap::{Args, Parser, Subcommand, ValueEnum};

#[derive(Parser)]
#[clap(author, version)]
#[clap(name = "Space Invaders Feature Client")]
#[clap(about = "Turns Space Invaders state dumps into feature vectors", long_about = None)]
pub struct Cli {
    #[clap(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    Extract(ExtractCommand),
    Batch(BatchCommand),
}

#[derive(Args)]
#[clap(about = "Prints the feature vector of each state dump", long_about = None)]
pub struct ExtractCommand {
    #[clap(required = true)]
    pub files: Vec<String>,

    #[clap(short, long, value_enum, default_value_t = Format::Table)]
    pub format: Format,
}

#[derive(Args)]
#[clap(about = "Extracts every state dump in a directory into a JSON lines file", long_about = None)]
pub struct BatchCommand {
    #[clap(short, long, default_value_t = String::from("client.conf"))]
    pub config: String,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum Format {
    Table,
    Json,
    Values,
}
