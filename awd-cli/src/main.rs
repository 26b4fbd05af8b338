use awd_cli::Cli;
use clap::Parser;
use log::error;

fn main() {
    let cli = Cli::parse();

    env_logger::Builder::new()
        .filter_level(cli.log_level())
        .format_target(false)
        .format_timestamp_secs()
        .init();

    match cli.run() {
        Ok(out) => println!("{out}"),
        Err(e) => {
            error!("Failed to decode {:?}: {e}", cli.input);
            std::process::exit(1);
        }
    }
}
