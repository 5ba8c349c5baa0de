use chrono::NaiveDate;
use clap::Parser;
use tracing::debug;
use tracing_subscriber::EnvFilter;

use meeting_deadlines::{to_text, Schedule, ScheduleError};

#[derive(thiserror::Error, Debug)]
pub enum CliError {
    #[error("{0}")]
    LibraryError(#[from] ScheduleError),

    #[error("{0}: date needs to be in format yyyy-mm-dd and be a valid date.")]
    UnparseableDate(#[from] chrono::ParseError),
}

/// Generates the deadline dates leading up to an annual general meeting.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Date of the annual general meeting
    #[arg(long, value_name = "YYYY-MM-DD")]
    date: String,

    /// Do not require the meeting to be held by the end of April
    #[arg(long)]
    skip_date_check: bool,

    /// Print debug diagnostics to stderr
    #[arg(short, long)]
    verbose: bool,
}

impl Cli {
    fn anchor_date(&self) -> Result<NaiveDate, CliError> {
        Ok(NaiveDate::parse_from_str(&self.date, "%Y-%m-%d")?)
    }
}

fn main() {
    let cli = Cli::parse();

    // RUST_LOG wins over --verbose when set
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        if cli.verbose {
            EnvFilter::new("debug")
        } else {
            EnvFilter::new("warn")
        }
    });
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    match do_work(&cli) {
        Ok(output) => print!("{output}"),
        Err(e) => {
            eprintln!("{}", e);
            std::process::exit(1);
        }
    }
}

fn do_work(cli: &Cli) -> Result<String, CliError> {
    let anchor_date = cli.anchor_date()?;
    debug!(%anchor_date, skip_date_check = cli.skip_date_check, "parsed arguments");
    let schedule = Schedule::build(anchor_date, !cli.skip_date_check)?;
    Ok(to_text(&schedule))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::*;

    fn run(args: &[&str]) -> Result<String, CliError> {
        let argv = std::iter::once("meeting-deadlines").chain(args.iter().copied());
        let cli = Cli::try_parse_from(argv).unwrap();
        do_work(&cli)
    }

    #[test]
    fn test_prints_schedule() {
        let output = run(&["--date", "2024-04-27"]).unwrap();
        assert_eq!(10, output.lines().count());
        assert!(output.starts_with("2024-02-27 3 kap. 4§ Sista dag för beviljat medlemskap.\n"));
        assert!(output.ends_with("2024-04-27 Årsmöte\n"));
    }

    #[test]
    fn test_late_date_rejected() {
        let res = run(&["--date", "2024-05-01"]);
        assert!(matches!(
            res,
            Err(CliError::LibraryError(ScheduleError::AnchorAfterApril { .. }))
        ));
    }

    #[test]
    fn test_skip_date_check() {
        let output = run(&["--date", "2024-05-01", "--skip-date-check"]).unwrap();
        assert!(output.contains("2024-05-01 Årsmöte\n"));
    }

    #[rstest]
    #[case("2024-02-30")]
    #[case("27/04/2024")]
    #[case("2024-04")]
    #[case("not a date")]
    fn test_unparseable_date(#[case] date: &str) {
        let res = run(&["--date", date]);
        match res {
            Err(e @ CliError::UnparseableDate(_)) => {
                let message = e.to_string();
                assert!(message.ends_with("date needs to be in format yyyy-mm-dd and be a valid date."));
            }
            other => panic!("expected unparseable date, got {other:?}"),
        }
    }

    #[test]
    fn test_date_is_required() {
        assert!(Cli::try_parse_from(["meeting-deadlines"]).is_err());
    }
}
