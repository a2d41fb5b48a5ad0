use clap::Parser;
use log::error;
use waygraph::cli::Cli;

fn main() {
    let cli = Cli::parse();

    // Logs go to stderr so command output stays pipeable
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .target(env_logger::Target::Stderr)
        .init();

    if let Err(e) = cli.run() {
        error!("{e:#}");
        std::process::exit(1);
    }
}
