mod cli;
mod commands;
mod logging;

use cli::{BuildParams, DumpParams, build_cli};

fn main() {
    let matches = build_cli().get_matches();

    match matches.subcommand() {
        Some(("build", m)) => {
            let params = BuildParams::from_matches(m);
            logging::init(params.verbose);
            commands::build::run(params.into());
        }
        Some(("dump", m)) => {
            let params = DumpParams::from_matches(m);
            logging::init(params.verbose);
            commands::dump::run(params.into());
        }
        _ => unreachable!("clap should have caught this"),
    }
}
