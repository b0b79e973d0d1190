use clap::Parser;

use crate::opts::{Command, Opts};

mod opts;
mod summary;

fn main() -> anyhow::Result<()> {
    let args = argfile::expand_args(argfile::parse_fromfile, argfile::PREFIX)?;

    let opts = Opts::parse_from(args);

    cli::tracing::configure_tracing(opts.trace.clone(), opts.verbose.clone())?;

    match opts.command {
        Command::Summary(args) => summary::run(args),
    }
}
