use clap::Parser;
use serde::Serialize;
use std::path::PathBuf;
use std::process::ExitCode;
use subimage::{find_subimage, MatchConfig, Report, DEFAULT_THRESHOLD};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "Report where one image occurs as a crop of another",
    after_help = "Prints \"x,y\" (top-left of the match in the larger image) or \"-1,-1\" if no match is found."
)]
struct Cli {
    /// First image path.
    #[arg(value_name = "IMAGE1")]
    first: PathBuf,
    /// Second image path.
    #[arg(value_name = "IMAGE2")]
    second: PathBuf,
    /// Minimum normalized cross-correlation accepted as a match.
    #[arg(
        long,
        value_name = "SCORE",
        default_value_t = DEFAULT_THRESHOLD,
        allow_negative_numbers = true
    )]
    threshold: f32,
    /// Print a JSON object instead of "x,y".
    #[arg(long)]
    json: bool,
    /// Compute the correlation surface on all cores (requires the `rayon` feature).
    #[arg(long)]
    parallel: bool,
    /// Enable tracing output on stderr.
    #[arg(long)]
    trace: bool,
}

#[derive(Debug, Serialize)]
struct Output {
    x: i64,
    y: i64,
    score: Option<f32>,
    found: bool,
}

impl From<&Report> for Output {
    fn from(report: &Report) -> Self {
        let (x, y) = report.decision.location();
        let score = report.decision.score();
        Self {
            x,
            y,
            score: score.is_finite().then_some(score),
            found: report.decision.is_found(),
        }
    }
}

fn render(report: &Report, json: bool) -> Result<String, serde_json::Error> {
    if json {
        serde_json::to_string(&Output::from(report))
    } else {
        Ok(report.decision.to_string())
    }
}

fn run(cli: &Cli) -> Result<(), Box<dyn std::error::Error>> {
    let config = MatchConfig {
        threshold: cli.threshold,
        parallel: cli.parallel,
    };
    let report = find_subimage(&cli.first, &cli.second, &config)?;
    println!("{}", render(&report, cli.json)?);
    Ok(())
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    if cli.trace {
        let filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new("subimage=debug"));
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .with_writer(std::io::stderr)
            .init();
        tracing::debug!(first = %cli.first.display(), second = %cli.second.display(), "starting");
    }

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error: {err}");
            ExitCode::FAILURE
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{render, Cli};
    use clap::Parser;
    use subimage::{Decision, Dims, Report};

    fn report(decision: Decision) -> Report {
        Report {
            decision,
            search: Dims::new(10, 10),
            query: Dims::new(4, 4),
            query_is_first: true,
        }
    }

    #[test]
    fn plain_output_is_coordinate_pair() {
        let found = report(Decision::Found {
            x: 3,
            y: 5,
            score: 0.999,
        });
        assert_eq!(render(&found, false).unwrap(), "3,5");

        let missed = report(Decision::NotFound { score: 0.4 });
        assert_eq!(render(&missed, false).unwrap(), "-1,-1");
    }

    #[test]
    fn json_output_marks_missing_score_as_null() {
        let missed = report(Decision::NotFound {
            score: f32::NEG_INFINITY,
        });
        assert_eq!(
            render(&missed, true).unwrap(),
            r#"{"x":-1,"y":-1,"score":null,"found":false}"#
        );
    }

    #[test]
    fn cli_requires_exactly_two_paths() {
        assert!(Cli::try_parse_from(["subimage", "a.png"]).is_err());
        assert!(Cli::try_parse_from(["subimage", "a.png", "b.png", "c.png"]).is_err());

        let cli =
            Cli::try_parse_from(["subimage", "a.png", "b.png", "--threshold", "0.9"]).unwrap();
        assert_eq!(cli.threshold, 0.9);
        assert!(!cli.json);
    }
}
