mod commands;
mod terminal;

use std::time::Duration;

use commands::{CommandLine, Commands, check, wait};
use reachr_common::config::Config;
use reachr_common::network::target::Target;
use terminal::{print, spinner};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let commands = CommandLine::parse_args();

    spinner::init_logging(commands.quiet);
    print::banner(commands.no_banner, commands.quiet);

    let cfg = Config {
        probe_timeout: Duration::from_secs(commands.timeout),
        quiet: commands.quiet,
    };

    let result = match commands.command {
        Commands::Check { host, ports } => {
            print::header("checking reachability", cfg.quiet);
            check::check(Target::new(host, ports), &cfg).await
        }
        Commands::Wait {
            host,
            ports,
            attempts,
        } => {
            print::header("waiting for endpoints", cfg.quiet);
            wait::wait(Target::new(host, ports), attempts, &cfg).await
        }
    };

    spinner::finish();
    result
}
