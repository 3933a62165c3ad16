use cricket_sim::{run, CliOptions};
use cricket_match_core::prelude::RunsPolicy;
use std::env;
use std::path::PathBuf;

fn usage() -> ! {
    eprintln!(
        "Usage: cargo run --release -- [--teams teams.json] [--overs N] [--seed SEED] \
[--matches N] [--runs-policy uniform|weighted] [--output series.csv]"
    );
    std::process::exit(1);
}

fn parse_args() -> anyhow::Result<CliOptions> {
    let mut opts = CliOptions::default();

    let mut args = env::args().skip(1);
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--teams" => {
                opts.teams_path = Some(args.next().map(PathBuf::from).ok_or_else(|| {
                    anyhow::anyhow!("--teams requires a path (e.g. --teams teams.json)")
                })?);
            }
            "--overs" => {
                let val = args
                    .next()
                    .ok_or_else(|| anyhow::anyhow!("--overs requires a number"))?;
                opts.total_overs = val.parse()?;
            }
            "--seed" => {
                let val = args
                    .next()
                    .ok_or_else(|| anyhow::anyhow!("--seed requires a number"))?;
                opts.seed = val.parse()?;
            }
            "--matches" => {
                let val = args
                    .next()
                    .ok_or_else(|| anyhow::anyhow!("--matches requires a number"))?;
                opts.matches = val.parse()?;
            }
            "--runs-policy" => {
                let val = args
                    .next()
                    .ok_or_else(|| anyhow::anyhow!("--runs-policy requires uniform or weighted"))?;
                opts.runs_policy = match val.to_ascii_lowercase().as_str() {
                    "uniform" => RunsPolicy::Uniform,
                    "weighted" => RunsPolicy::Weighted,
                    other => anyhow::bail!("Unknown runs policy {other} (use uniform or weighted)"),
                };
            }
            "--output" => {
                opts.output_path = Some(args.next().map(PathBuf::from).ok_or_else(|| {
                    anyhow::anyhow!("--output requires a path (e.g. --output series.csv)")
                })?);
            }
            _ => usage(),
        }
    }
    Ok(opts)
}

fn main() -> anyhow::Result<()> {
    let opts = parse_args()?;
    run(opts)
}
