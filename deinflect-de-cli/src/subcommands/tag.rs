use std::io::{BufRead, BufWriter, Write};

use anyhow::{Context, Result};
use clap::{Arg, ArgMatches, Command};
use deinflect_de::entry_conditions;
use log::warn;
use stdinout::{Input, Output};

use crate::traits::DeinflectApp;

const INPUT: &str = "INPUT";
const OUTPUT: &str = "OUTPUT";

pub struct TagApp {
    input: Option<String>,
    output: Option<String>,
}

impl TagApp {
    fn process<R, W>(&self, read: R, mut write: W) -> Result<()>
    where
        R: BufRead,
        W: Write,
    {
        let mut n_untagged = 0;

        for body in read.lines() {
            let body = body.context("Cannot read entry body")?;
            let tags = entry_conditions(&body);
            if tags.is_empty() {
                n_untagged += 1;
            }

            writeln!(write, "{}", tags.join(" ")).context("Cannot write condition tags")?;
        }

        write.flush().context("Cannot flush output")?;

        if n_untagged > 0 {
            warn!("{} entries without part-of-speech tags", n_untagged);
        }

        Ok(())
    }
}

impl DeinflectApp for TagApp {
    fn app() -> Command {
        Command::new("tag")
            .about("Find the condition tags of dictionary entry bodies")
            .arg(Arg::new(INPUT).help("Entry bodies, one per line").index(1))
            .arg(Arg::new(OUTPUT).help("Condition tags").index(2))
    }

    fn parse(matches: &ArgMatches) -> Result<Self> {
        let input = matches.get_one::<String>(INPUT).map(ToOwned::to_owned);
        let output = matches.get_one::<String>(OUTPUT).map(ToOwned::to_owned);
        Ok(TagApp { input, output })
    }

    fn run(&self) -> Result<()> {
        let input = Input::from(self.input.as_ref());
        let reader = input.buf_read().context("Cannot open input for reading")?;

        let output = Output::from(self.output.as_ref());
        let writer = BufWriter::new(output.write().context("Cannot open output for writing")?);

        self.process(reader, writer)
    }
}
