use std::io::stdout;

use anyhow::Result;
use clap::{crate_version, value_parser, Arg, Command};
use clap_complete::{generate, Shell};

pub mod io;

mod subcommands;

pub mod traits;
use traits::DeinflectApp;

fn main() -> Result<()> {
    // Known subapplications.
    let apps = vec![
        subcommands::CandidatesApp::app(),
        subcommands::DescribeApp::app(),
        subcommands::TagApp::app(),
    ];

    env_logger::init();

    let cli = Command::new("deinflect-de")
        .about("Generate dictionary form candidates for German words")
        .version(crate_version!())
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommands(apps)
        .subcommand(
            Command::new("completions")
                .about("Generate completion scripts for your shell")
                .arg_required_else_help(true)
                .arg(
                    Arg::new("shell")
                        .value_parser(value_parser!(Shell))
                        .required(true),
                ),
        );
    let matches = cli.clone().get_matches();

    match matches.subcommand() {
        Some(("candidates", matches)) => subcommands::CandidatesApp::parse(matches)?.run(),
        Some(("completions", matches)) => {
            let shell = matches.get_one::<Shell>("shell").copied().unwrap();
            write_completion_script(cli, shell);
            Ok(())
        }
        Some(("describe", matches)) => subcommands::DescribeApp::parse(matches)?.run(),
        Some(("tag", matches)) => subcommands::TagApp::parse(matches)?.run(),
        _ => unreachable!(),
    }
}

fn write_completion_script(mut cli: Command, shell: Shell) {
    generate(shell, &mut cli, "deinflect-de", &mut stdout());
}
