use std::io::{BufWriter, Write};

use anyhow::{Context, Result};
use clap::{Arg, ArgMatches, Command};
use deinflect_de::{RegistryDescription, TransformRegistry};
use stdinout::Output;

use crate::traits::DeinflectApp;

const OUTPUT: &str = "OUTPUT";

pub struct DescribeApp {
    output: Option<String>,
}

impl DeinflectApp for DescribeApp {
    fn app() -> Command {
        Command::new("describe")
            .about("Write the transform registry as JSON")
            .arg(Arg::new(OUTPUT).help("Output file").index(1))
    }

    fn parse(matches: &ArgMatches) -> Result<Self> {
        let output = matches.get_one::<String>(OUTPUT).map(ToOwned::to_owned);
        Ok(DescribeApp { output })
    }

    fn run(&self) -> Result<()> {
        let output = Output::from(self.output.as_ref());
        let mut writer = BufWriter::new(output.write().context("Cannot open output for writing")?);

        RegistryDescription::from(TransformRegistry::german())
            .to_writer_pretty(&mut writer)
            .context("Cannot write registry description")?;
        writeln!(writer).context("Cannot write registry description")?;
        writer.flush().context("Cannot flush output")?;

        Ok(())
    }
}
