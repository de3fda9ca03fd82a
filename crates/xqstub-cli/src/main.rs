mod cli;
mod commands;
mod logging;


use cli::{AstParams, CheckParams, GenerateParams, build_cli};

fn main() {
    let matches = build_cli().get_matches();

    match matches.subcommand() {
        Some(("gen", m)) => {
            logging::init(m.get_count("verbose"));
            let params = GenerateParams::from_matches(m);
            commands::generate::run(params.into());
        }
        Some(("check", m)) => {
            logging::init(m.get_count("verbose"));
            let params = CheckParams::from_matches(m);
            commands::check::run(params.into());
        }
        Some(("ast", m)) => {
            logging::init(m.get_count("verbose"));
            let params = AstParams::from_matches(m);
            commands::ast::run(params.into());
        }
        _ => unreachable!("clap should have caught this"),
    }
}
