use std::{env, process};

use buildbench::{
    BenchmarkReporter, MeanStrategy, ReporterConfig, mean::DEFAULT_ITERATIONS,
};

#[derive(Clone, Debug, PartialEq)]
struct CommandLineConfig {
    config: ReporterConfig,
    json: bool,
}

impl CommandLineConfig {
    fn from_args(args: &[&str]) -> Result<Self, String> {
        let mut config = ReporterConfig::default();
        let mut measured = false;
        let mut iterations: Option<usize> = None;
        let mut json = false;
        let mut iter = args.iter().skip(1);
        while let Some(arg) = iter.next() {
            match *arg {
                "--base" => {
                    config.base_path = iter
                        .next()
                        .ok_or_else(|| "--base requires a value".to_string())?
                        .to_string()
                        .into();
                }
                "--head" => {
                    config.head_path = iter
                        .next()
                        .ok_or_else(|| "--head requires a value".to_string())?
                        .to_string()
                        .into();
                }
                "--out" => {
                    config.output_path = iter
                        .next()
                        .ok_or_else(|| "--out requires a value".to_string())?
                        .to_string()
                        .into();
                }
                "--strategy" => {
                    let value = iter
                        .next()
                        .ok_or_else(|| "--strategy requires a value".to_string())?;
                    match *value {
                        "mean" => measured = false,
                        "measured" => measured = true,
                        other => return Err(format!("unknown strategy {other}")),
                    }
                }
                "--iterations" => {
                    let raw = iter
                        .next()
                        .ok_or_else(|| "--iterations requires a value".to_string())?;
                    let value: usize = raw
                        .parse()
                        .map_err(|_| format!("--iterations requires an integer, got {raw}"))?;
                    iterations = Some(value);
                }
                "--json" => json = true,
                other if other.starts_with('-') => {
                    return Err(format!("unknown flag {other}"));
                }
                other => {
                    return Err(format!("unexpected argument {other}"));
                }
            }
        }
        if measured || iterations.is_some() {
            config.strategy = MeanStrategy::MeasuredColumns {
                iterations: iterations.unwrap_or(DEFAULT_ITERATIONS),
            };
        }
        Ok(Self { config, json })
    }

    fn help() -> &'static str {
        "Usage: buildbench [--base PATH] [--head PATH] [--out PATH] \
         [--strategy mean|measured] [--iterations N] [--json]\n\
         Defaults: --base profile-out/benchmark.csv \
         --head profile-out-head/benchmark.csv --out benchmark-result.txt \
         --strategy mean\n"
    }
}

fn main() {
    let args: Vec<String> = env::args().collect();
    if args.iter().any(|arg| arg == "--help" || arg == "-h") {
        println!("{}", CommandLineConfig::help());
        return;
    }
    let arg_refs: Vec<&str> = args.iter().map(|s| s.as_str()).collect();
    let cli = match CommandLineConfig::from_args(&arg_refs) {
        Ok(cli) => cli,
        Err(err) => {
            eprintln!("error: {err}");
            process::exit(2);
        }
    };

    let reporter = BenchmarkReporter::new(cli.config);
    let comparison = match reporter.report() {
        Ok(comparison) => comparison,
        Err(err) => {
            eprintln!("report failed: {err}");
            process::exit(1);
        }
    };

    if cli.json {
        match serde_json::to_string(&comparison) {
            Ok(encoded) => println!("{encoded}"),
            Err(err) => {
                eprintln!("report failed: {err}");
                process::exit(1);
            }
        }
    }
}
