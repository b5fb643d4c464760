extern crate getopts;
use anyhow::{bail, Context, Result};
use getopts::{Matches, Options};
use log::LevelFilter;
use std::{env, io, process};
use union_of_many_sets::benchmark_util::{
    run_single, run_sweep, Algorithms, Combination, ReportWriter, Verification,
};
use union_of_many_sets::random_set_util::SetGenerator;

#[derive(Debug, PartialEq, Eq)]
enum Mode {
    Sweep,
    Single(Algorithms),
}

#[derive(Debug)]
struct BenchConfig {
    mode: Mode,
    seed: u64,
    verification: Verification,
    log_level: LevelFilter,
}

impl BenchConfig {
    fn from_matches(matches: &Matches) -> Result<BenchConfig> {
        let mode = match matches.free.as_slice() {
            [] => Mode::Sweep,
            [selector] => Mode::Single(Algorithms::from_selector(selector)),
            _ => bail!("expected at most one argument, got {:?}", matches.free),
        };

        let seed: u64 = match matches.opt_str("s") {
            Some(raw) => raw
                .parse::<u64>()
                .with_context(|| format!("invalid seed {:?}", raw))?,
            None => u64::from(process::id()),
        };

        let verification = if matches.opt_present("n") {
            Verification::Skip
        } else {
            Verification::Enforce
        };

        let log_level = match matches.opt_count("v") {
            0 => LevelFilter::Warn,
            1 => LevelFilter::Info,
            2 => LevelFilter::Debug,
            _ => LevelFilter::Trace,
        };

        Ok(BenchConfig {
            mode,
            seed,
            verification,
            log_level,
        })
    }
}

fn build_options() -> Options {
    let mut opts = Options::new();
    opts.optopt("s", "seed", "seed for the set generator. default is the process id.", "SEED");
    opts.optflag("n", "no-verify", "skip the cross check between the two results");
    opts.optflagmulti("v", "verbose", "log progress to stderr (repeat for more detail)");
    opts.optflag("h", "help", "print this help menu");
    opts
}

fn print_usage(program: &str, opts: &Options) {
    let brief = format!(
        "Usage: {} [P|S] [options]\n\n  P  run one combination with the min heap union only\n  S  run one combination with the pairwise union only\n  (no argument runs the full sweep with both)",
        program
    );
    print!("{}", opts.usage(&brief));
}

fn main() -> Result<()> {
    let args: Vec<String> = env::args().collect();
    let program = args
        .first()
        .cloned()
        .unwrap_or_else(|| "union_of_many_sets".to_string());

    let opts = build_options();
    let matches = opts
        .parse(args.get(1..).unwrap_or(&[]))
        .context("parsing command line")?;
    if matches.opt_present("h") {
        print_usage(&program, &opts);
        return Ok(());
    }
    let config = BenchConfig::from_matches(&matches)?;

    env_logger::Builder::new()
        .filter_level(config.log_level)
        .init();
    log::info!("{:?}", config);

    let stdout = io::stdout();
    let mut writer = ReportWriter::new(stdout.lock())?;
    let mut generator = SetGenerator::new(config.seed);

    match config.mode {
        Mode::Sweep => run_sweep(&mut generator, &mut writer, config.verification),
        Mode::Single(algorithms) => {
            run_single(&mut generator, &mut writer, &Combination::single(), algorithms)?;
            writer.into_inner()?;
            process::exit(1);
        }
    }
}
