//! snoopy2frbgate CLI
//!
//! Usage:
//!   snoopy2frbgate cand.snoopy -f 1271.5 --timediff -12.3 --corrstartmjd 59000.25
//!   snoopy2frbgate cand.snoopy -f 1271.5 --timediff 0 --corrstartmjd 59000.25 --json
//!
//! Writes craftfrb.polyco, craftfrb.{gate,rfi,bin,finder}.binconfig and
//! dosubtractions.sh, then prints the best integration time.

use std::path::PathBuf;
use std::process;

use clap::{Parser, ValueEnum};
use colored::Colorize;
use env_logger::Env;

use frbgate::core::{format_int_time, run, GateInputs};
use frbgate::types::{FinderSpacing, GateError, PlanOptions, RunSummary};
use frbgate::{CORRSTART_UNSET_MJD, FAKE_PULSAR_PERIOD_SECONDS, FREQUENCY_UNSET_MHZ, TIMEDIFF_UNSET_MS, VERSION};

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
enum FinderSpan {
    /// 100 ms bins from the gate start
    Fixed,
    /// Equal bins between the two RFI guard windows
    Guard,
}

impl From<FinderSpan> for FinderSpacing {
    fn from(span: FinderSpan) -> Self {
        match span {
            FinderSpan::Fixed => FinderSpacing::Fixed,
            FinderSpan::Guard => FinderSpacing::GuardSpan,
        }
    }
}

#[derive(Parser, Debug)]
#[command(
    name = "snoopy2frbgate",
    version = VERSION,
    about = "Turn a snoopy log into a binconfig and polyco for DiFX",
    long_about = "Reads the single triggering candidate from a snoopy log and writes a\n\
                  fake-pulsar polyco plus gate, RFI, high time resolution and finder\n\
                  binconfigs, and a dosubtractions.sh script for uvsubScaled.py.\n\n\
                  The best integration time (seconds) is printed to stdout."
)]
struct Args {
    /// The snoopy log file
    snoopylog: PathBuf,

    /// The reference freq at which snoopy DM was calculated (MHz)
    #[arg(short, long, allow_hyphen_values = true, default_value_t = FREQUENCY_UNSET_MHZ)]
    freq: f64,

    /// The time difference between the VCRAFT and snoopy log arrival times
    /// for the pulse, including geometric delay, in ms
    #[arg(long, allow_hyphen_values = true, default_value_t = TIMEDIFF_UNSET_MS)]
    timediff: f64,

    /// When the correlation will start (MJD)
    #[arg(long, allow_hyphen_values = true, default_value_t = CORRSTART_UNSET_MJD)]
    corrstartmjd: f64,

    /// Directory for the output files
    #[arg(long, default_value = ".")]
    outdir: PathBuf,

    /// Finder bin layout
    #[arg(long, value_enum, default_value_t = FinderSpan::Fixed)]
    finder_span: FinderSpan,

    /// Print a JSON summary instead of the bare integration time
    #[arg(long)]
    json: bool,

    /// Log derived epochs and phases
    #[arg(short, long)]
    verbose: bool,

    /// Disable colors in diagnostics
    #[arg(long)]
    no_color: bool,
}

fn main() {
    let args = Args::parse();

    let level = if args.verbose { "info" } else { "warn" };
    env_logger::Builder::from_env(Env::default().default_filter_or(level)).init();
    if args.no_color {
        colored::control::set_override(false);
    }

    let inputs = GateInputs {
        snoopy_log: args.snoopylog.clone(),
        frequency_mhz: args.freq,
        timediff_ms: args.timediff,
        correlation_start_mjd: args.corrstartmjd,
        options: PlanOptions {
            period_seconds: FAKE_PULSAR_PERIOD_SECONDS,
            finder_spacing: args.finder_span.into(),
        },
    };

    match run(&inputs, &args.outdir) {
        Ok((plan, written)) => {
            if args.json {
                let files = written.iter().map(|p| p.display().to_string()).collect();
                let summary = RunSummary::new(&plan, files);
                match serde_json::to_string_pretty(&summary) {
                    Ok(json) => println!("{}", json),
                    Err(e) => fail(&format!("cannot serialize summary: {}", e), None),
                }
            } else {
                println!("{}", format_int_time(plan.best_int_time_seconds));
            }
        }
        Err(e) => fail(&e.to_string(), Some(&e)),
    }
}

/// Print a diagnostic and exit non-zero
fn fail(message: &str, error: Option<&GateError>) -> ! {
    let code = error.map(GateError::code).unwrap_or("E000_INTERNAL");
    eprintln!("{} {}", format!("[{}]", code).red().bold(), message);
    if let Some(e) = error {
        if e.is_input_error() {
            eprintln!("{}", "Don't be lazy, that's how accidents happen.".yellow());
        }
    }
    process::exit(1);
}
