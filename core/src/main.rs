use clap::Parser;
use workout_core::cli::{run, Args};

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let default_level = if args.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .init();

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    run(&args, &mut out)
}
