use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use collinear::rand::{draw_planted, CloudCfg, PlantedCfg, ReplayToken};
use collinear::{source, Algorithm, Extractor, Line};
use serde::Serialize;
use std::path::{Path, PathBuf};
use std::time::Instant;
use tracing_subscriber::EnvFilter;

mod compare;
mod input;
mod provenance;

use provenance::{ensure_parent, write_sidecar, Payload};

#[derive(Parser)]
#[command(name = "cli")]
#[command(about = "Collinear segment extraction over 2D integer point sets")]
struct Cmd {
    /// Optional run tag; propagated to provenance sidecars and logs
    #[arg(long)]
    tag: Option<String>,

    #[command(subcommand)]
    action: Action,
}

#[derive(Subcommand)]
enum Action {
    /// Extract lines from a point file and write a JSON report
    Extract {
        /// Point source (`.csv` with x,y columns, otherwise count + pairs text)
        #[arg(long)]
        input: PathBuf,
        #[arg(long, value_enum, default_value_t = AlgoArg::Fast)]
        algo: AlgoArg,
        #[arg(long)]
        out: PathBuf,
    },
    /// Write a reproducible point file with planted collinear runs
    Generate {
        #[arg(long, default_value_t = 0)]
        seed: u64,
        #[arg(long, default_value_t = 0)]
        index: u64,
        #[arg(long, default_value_t = 64)]
        noise: usize,
        #[arg(long, default_value_t = 1000)]
        bound: i32,
        #[arg(long, default_value_t = 4)]
        lines: usize,
        #[arg(long, default_value_t = 5)]
        run_len: usize,
        #[arg(long)]
        out: PathBuf,
    },
    /// Run both algorithms and check that their results are consistent
    Compare {
        #[arg(long)]
        input: PathBuf,
    },
    /// Print a small provenance JSON block
    Report,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum AlgoArg {
    Fast,
    Brute,
}

impl From<AlgoArg> for Algorithm {
    fn from(a: AlgoArg) -> Self {
        match a {
            AlgoArg::Fast => Algorithm::Fast,
            AlgoArg::Brute => Algorithm::Brute,
        }
    }
}

#[derive(Serialize)]
struct LineRecord {
    len: usize,
    points: Vec<[i32; 2]>,
}

impl From<&Line> for LineRecord {
    fn from(line: &Line) -> Self {
        Self {
            len: line.len(),
            points: line.points().map(|p| [p.x(), p.y()]).collect(),
        }
    }
}

#[derive(Serialize)]
struct ExtractReport {
    algo: &'static str,
    points: usize,
    elapsed_ms: f64,
    lines: Vec<LineRecord>,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_target(false)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();
    let cmd = Cmd::parse();
    match cmd.action {
        Action::Extract { input, algo, out } => extract(&input, algo.into(), &out, cmd.tag),
        Action::Generate {
            seed,
            index,
            noise,
            bound,
            lines,
            run_len,
            out,
        } => {
            let cfg = PlantedCfg {
                cloud: CloudCfg { noise, bound },
                lines,
                run_len,
            };
            generate(cfg, ReplayToken { seed, index }, &out, cmd.tag)
        }
        Action::Compare { input } => compare(&input),
        Action::Report => report(cmd.tag),
    }
}

fn extract(input: &Path, algo: Algorithm, out: &Path, tag: Option<String>) -> Result<()> {
    tracing::info!(input = %input.display(), algo = algo.name(), out = %out.display(), tag = ?tag, "extract");
    let ex = Extractor::new(input::load(input)?);

    let started = Instant::now();
    let lines = ex.lines(algo);
    let elapsed_ms = started.elapsed().as_secs_f64() * 1e3;
    tracing::info!(lines = lines.len(), elapsed_ms, "extracted");

    let report = ExtractReport {
        algo: algo.name(),
        points: ex.len(),
        elapsed_ms,
        lines: lines.iter().map(LineRecord::from).collect(),
    };
    ensure_parent(out)?;
    std::fs::write(out, serde_json::to_vec_pretty(&report)?)
        .with_context(|| format!("writing {}", out.display()))?;

    let payload = Payload::new(serde_json::json!({
        "algo": algo.name(),
        "input": input.to_string_lossy(),
        "points": ex.len(),
        "lines": lines.len(),
    }))
    .with_tag(tag);
    write_sidecar(out, payload)?;
    Ok(())
}

fn generate(cfg: PlantedCfg, tok: ReplayToken, out: &Path, tag: Option<String>) -> Result<()> {
    tracing::info!(?cfg, seed = tok.seed, index = tok.index, out = %out.display(), "generate");
    let points = draw_planted(cfg, tok);
    ensure_parent(out)?;
    std::fs::write(out, source::format_points(&points))
        .with_context(|| format!("writing {}", out.display()))?;

    let payload = Payload::new(serde_json::json!({
        "seed": tok.seed,
        "index": tok.index,
        "noise": cfg.cloud.noise,
        "bound": cfg.cloud.bound,
        "lines": cfg.lines,
        "run_len": cfg.run_len,
        "points": points.len(),
    }))
    .with_tag(tag);
    write_sidecar(out, payload)?;
    Ok(())
}

fn compare(input: &Path) -> Result<()> {
    let ex = Extractor::new(input::load(input)?);

    let started = Instant::now();
    let fast = ex.lines_fast();
    let fast_ms = started.elapsed().as_secs_f64() * 1e3;
    let started = Instant::now();
    let brute = ex.lines_brute();
    let brute_ms = started.elapsed().as_secs_f64() * 1e3;
    tracing::info!(points = ex.len(), fast_ms, brute_ms, "timings");

    let agreement = compare::check(&brute, &fast);
    println!("{}", serde_json::to_string_pretty(&agreement)?);
    if !agreement.is_consistent() {
        bail!(
            "results disagree: {} orphaned brute lines, {} incomplete fast lines",
            agreement.orphaned.len(),
            agreement.incomplete.len()
        );
    }
    Ok(())
}

fn report(tag: Option<String>) -> Result<()> {
    let obj = serde_json::json!({
        "code_rev": provenance::current_git_rev(),
        "collinear_version": collinear::VERSION,
        "tag": tag,
        "params": {},
        "outputs": []
    });
    println!("{}", serde_json::to_string_pretty(&obj)?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn generate_then_extract_writes_report_and_sidecars() {
        let dir = tempdir().unwrap();
        let points_path = dir.path().join("points.txt");
        let cfg = PlantedCfg {
            cloud: CloudCfg {
                noise: 8,
                bound: 50,
            },
            lines: 2,
            run_len: 5,
        };
        generate(cfg, ReplayToken { seed: 5, index: 1 }, &points_path, None).unwrap();
        assert!(dir.path().join("points.provenance.json").exists());

        let out = dir.path().join("out").join("lines.json");
        extract(&points_path, Algorithm::Fast, &out, Some("t".into())).unwrap();
        let report: serde_json::Value =
            serde_json::from_slice(&std::fs::read(&out).unwrap()).unwrap();
        assert_eq!(report["algo"], "fast");
        assert_eq!(report["points"], 18);
        let lines = report["lines"].as_array().unwrap();
        assert!(!lines.is_empty());
        assert!(lines.iter().all(|l| l["len"].as_u64().unwrap() >= 4));
        assert!(dir.path().join("out").join("lines.provenance.json").exists());

        compare(&points_path).unwrap();
    }

    #[test]
    fn cli_parses_extract_flags() {
        let cmd = Cmd::try_parse_from([
            "cli", "--tag", "x", "extract", "--input", "a.txt", "--algo", "brute", "--out", "o.json",
        ])
        .unwrap();
        assert_eq!(cmd.tag.as_deref(), Some("x"));
        match cmd.action {
            Action::Extract { algo, .. } => assert_eq!(Algorithm::from(algo), Algorithm::Brute),
            _ => panic!("expected extract"),
        }
    }
}
