use std::io::{BufRead, BufWriter, Write};

use anyhow::{Context, Result};
use clap::{Arg, ArgMatches, Command};
use deinflect_de::{Deinflector, TransformRegistry};
use log::info;
use rayon::prelude::*;
use stdinout::{Input, Output};

use crate::io::load_config;
use crate::traits::DeinflectApp;

const CONFIG: &str = "CONFIG";
const INPUT: &str = "INPUT";
const NUM_THREADS: &str = "NUM_THREADS";
const OUTPUT: &str = "OUTPUT";
const READ_AHEAD: &str = "READ_AHEAD";

pub struct CandidatesApp {
    config: Option<String>,
    input: Option<String>,
    num_threads: usize,
    output: Option<String>,
    read_ahead: usize,
}

impl CandidatesApp {
    fn process<R, W>(&self, deinflector: &Deinflector, read: R, mut write: W) -> Result<()>
    where
        R: BufRead,
        W: Write,
    {
        let mut n_forms = 0;
        let mut n_candidates = 0;
        let mut batch = Vec::with_capacity(self.read_ahead);

        for line in read.lines() {
            let line = line.context("Cannot read surface form")?;
            let form = line.trim();
            if form.is_empty() {
                continue;
            }

            batch.push(form.to_owned());
            if batch.len() == self.read_ahead {
                n_candidates += write_batch(deinflector, &batch, &mut write)?;
                n_forms += batch.len();
                batch.clear();
            }
        }

        n_candidates += write_batch(deinflector, &batch, &mut write)?;
        n_forms += batch.len();

        write.flush().context("Cannot flush output")?;

        info!("Generated {} candidates for {} forms", n_candidates, n_forms);

        Ok(())
    }
}

/// Generate candidates for a batch of forms in parallel and write them in
/// input order.
fn write_batch<W>(deinflector: &Deinflector, batch: &[String], write: &mut W) -> Result<usize>
where
    W: Write,
{
    let batch_candidates = batch
        .par_iter()
        .map(|form| deinflector.candidates(form))
        .collect::<Vec<_>>();

    let mut n_candidates = 0;
    for (form, candidates) in batch.iter().zip(batch_candidates) {
        for candidate in candidates {
            writeln!(
                write,
                "{}\t{}\t{}\t{}",
                form,
                candidate.form(),
                candidate.category(),
                candidate.rule()
            )
            .context("Cannot write candidate")?;
            n_candidates += 1;
        }
    }

    Ok(n_candidates)
}

impl DeinflectApp for CandidatesApp {
    fn app() -> Command {
        Command::new("candidates")
            .about("Generate dictionary form candidates")
            .arg(
                Arg::new(CONFIG)
                    .long("config")
                    .value_name("FILE")
                    .num_args(1)
                    .help("Configuration file"),
            )
            .arg(Arg::new(INPUT).help("Surface forms, one per line").index(1))
            .arg(Arg::new(OUTPUT).help("Candidates").index(2))
            .arg(
                Arg::new(NUM_THREADS)
                    .help("Number of threads")
                    .long("threads")
                    .value_name("N")
                    .default_value("4"),
            )
            .arg(
                Arg::new(READ_AHEAD)
                    .help("Readahead (number of forms)")
                    .long("readahead")
                    .value_name("N")
                    .default_value("10000"),
            )
    }

    fn parse(matches: &ArgMatches) -> Result<Self> {
        let config = matches.get_one::<String>(CONFIG).map(ToOwned::to_owned);
        let input = matches.get_one::<String>(INPUT).map(ToOwned::to_owned);
        let num_threads = matches
            .get_one::<String>(NUM_THREADS)
            .unwrap()
            .parse()
            .context("Cannot parse number of threads")?;
        let output = matches.get_one::<String>(OUTPUT).map(ToOwned::to_owned);
        let read_ahead = matches
            .get_one::<String>(READ_AHEAD)
            .unwrap()
            .parse()
            .context("Cannot parse number of forms to read ahead")?;

        anyhow::ensure!(read_ahead > 0, "Read ahead should at least be 1.");

        Ok(CandidatesApp {
            config,
            input,
            num_threads,
            output,
            read_ahead,
        })
    }

    fn run(&self) -> Result<()> {
        rayon::ThreadPoolBuilder::new()
            .num_threads(self.num_threads)
            .build_global()
            .context("Cannot build thread pool")?;

        let config = load_config(self.config.as_deref())?;

        let deinflector = Deinflector::new(TransformRegistry::german(), &config)
            .context("Cannot construct deinflector")?;

        let input = Input::from(self.input.as_ref());
        let reader = input.buf_read().context("Cannot open input for reading")?;

        let output = Output::from(self.output.as_ref());
        let writer = BufWriter::new(output.write().context("Cannot open output for writing")?);

        self.process(&deinflector, reader, writer)
    }
}
