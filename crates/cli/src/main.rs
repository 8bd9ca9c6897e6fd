use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use geocalc::api::{
    closest_pair, convex_hull, largest_empty_circle, Circle, ClosestPair, Line, Point,
};
use geocalc::cfg::MAX_RANDOM_POINTS;
use geocalc::rand::{random_points, PointBounds, ReplayToken};
use geocalc::session::Session;
use serde::Serialize;
use serde_json::{json, Value};
use std::path::{Path, PathBuf};
use tracing_subscriber::fmt::SubscriberBuilder;

mod console;
mod input;
mod provenance;

#[derive(Parser)]
#[command(name = "cli")]
#[command(about = "Planar geometry console and batch runner")]
struct Cmd {
    #[command(subcommand)]
    action: Action,
}

#[derive(Subcommand)]
enum Action {
    /// Interactive command console
    Console {
        /// Seed for `random_points`; drawn from entropy and logged when omitted
        #[arg(long)]
        seed: Option<u64>,
    },
    /// Run one algorithm over a point or segment file
    Run {
        #[arg(long, value_enum)]
        algo: Algo,
        #[arg(long)]
        input: PathBuf,
        #[arg(long)]
        out: PathBuf,
    },
    /// Print random points as a JSON array of [x, y]
    Random {
        #[arg(long, default_value_t = 10)]
        count: usize,
        #[arg(long, default_value_t = 0)]
        seed: u64,
    },
    /// Print a small provenance JSON block
    Report,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum Algo {
    ClosestPair,
    ConvexHull,
    LargestEmptyCircle,
    SegmentIntersection,
}

impl Algo {
    fn name(self) -> &'static str {
        match self {
            Algo::ClosestPair => "closest-pair",
            Algo::ConvexHull => "convex-hull",
            Algo::LargestEmptyCircle => "largest-empty-circle",
            Algo::SegmentIntersection => "segment-intersection",
        }
    }
}

fn main() -> Result<()> {
    SubscriberBuilder::default()
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
    let cmd = Cmd::parse();
    match cmd.action {
        Action::Console { seed } => console(seed),
        Action::Run { algo, input, out } => run(algo, &input, &out),
        Action::Random { count, seed } => random(count, seed),
        Action::Report => report(),
    }
}

fn console(seed: Option<u64>) -> Result<()> {
    let seed = console_seed(seed);
    tracing::info!(seed, "console");
    let mut session = Session::with_seed(seed);
    let stdin = std::io::stdin();
    console::run(&mut session, stdin.lock(), std::io::stdout())
}

/// Requested seed, or a fresh one from entropy.
fn console_seed(seed: Option<u64>) -> u64 {
    seed.unwrap_or_else(rand::random)
}

fn run(algo: Algo, input: &Path, out: &Path) -> Result<()> {
    tracing::info!(algo = algo.name(), input = %input.display(), out = %out.display(), "run");
    let (result, params) = compute(algo, input)?;

    if let Some(parent) = out.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("creating output dir {}", parent.display()))?;
        }
    }
    std::fs::write(out, serde_json::to_vec_pretty(&result)?)
        .with_context(|| format!("writing {}", out.display()))?;
    let sidecar = provenance::write_sidecar(out, provenance::Payload::new(algo.name(), params))?;
    tracing::info!(sidecar = %sidecar.display(), "wrote_outputs");
    Ok(())
}

/// Result document written to `--out`.
#[derive(Serialize)]
#[serde(untagged)]
enum RunOutput {
    ClosestPair(ClosestPair),
    Hull { hull: Vec<Point> },
    Circle { circle: Option<Circle> },
    Pairs { pairs: Vec<(usize, usize)> },
}

/// Run parameters recorded in provenance.
#[derive(Serialize)]
struct RunParams {
    input: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    points: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    segments: Option<usize>,
}

impl RunParams {
    fn points(input: &Path, n: usize) -> Self {
        Self {
            input: input.to_string_lossy().into_owned(),
            points: Some(n),
            segments: None,
        }
    }

    fn segments(input: &Path, n: usize) -> Self {
        Self {
            input: input.to_string_lossy().into_owned(),
            points: None,
            segments: Some(n),
        }
    }
}

/// Result document plus the run parameters recorded in provenance.
fn compute(algo: Algo, input: &Path) -> Result<(Value, Value)> {
    let (output, params) = match algo {
        Algo::ClosestPair => {
            let pts = input::read_points(input)?;
            let res = closest_pair(&pts);
            tracing::info!(points = pts.len(), distance = res.distance, "closest_pair");
            (RunOutput::ClosestPair(res), RunParams::points(input, pts.len()))
        }
        Algo::ConvexHull => {
            let pts = input::read_points(input)?;
            let hull = convex_hull(&pts).context("convex hull")?;
            tracing::info!(points = pts.len(), vertices = hull.len() - 1, "convex_hull");
            (RunOutput::Hull { hull }, RunParams::points(input, pts.len()))
        }
        Algo::LargestEmptyCircle => {
            let pts = input::read_points(input)?;
            let circle = largest_empty_circle(&pts);
            tracing::info!(points = pts.len(), found = circle.is_some(), "largest_empty_circle");
            (RunOutput::Circle { circle }, RunParams::points(input, pts.len()))
        }
        Algo::SegmentIntersection => {
            let segs = input::read_segments(input)?;
            let pairs = intersecting_pairs(&segs);
            tracing::info!(segments = segs.len(), pairs = pairs.len(), "segment_intersection");
            (RunOutput::Pairs { pairs }, RunParams::segments(input, segs.len()))
        }
    };
    Ok((serde_json::to_value(output)?, serde_json::to_value(params)?))
}

/// Index pairs `(i, j)`, `i < j`, of segments that touch or cross.
fn intersecting_pairs(segs: &[Line]) -> Vec<(usize, usize)> {
    let mut pairs = Vec::new();
    for (i, a) in segs.iter().enumerate() {
        for (j, b) in segs.iter().enumerate().skip(i + 1) {
            if a.intersects(b) {
                pairs.push((i, j));
            }
        }
    }
    pairs
}

fn random(count: usize, seed: u64) -> Result<()> {
    tracing::info!(count, seed, "random");
    println!("{}", random_json(count, seed)?);
    Ok(())
}

fn random_json(count: usize, seed: u64) -> Result<String> {
    if count > MAX_RANDOM_POINTS {
        bail!("--count {count} is too large (at most {MAX_RANDOM_POINTS})");
    }
    let pts: Vec<[f64; 2]> = random_points(count, PointBounds::default(), ReplayToken::new(seed, 0))
        .into_iter()
        .map(|p| [p.x, p.y])
        .collect();
    Ok(serde_json::to_string(&pts)?)
}

fn report() -> Result<()> {
    let obj = provenance::block(json!({}), &[]);
    println!("{}", serde_json::to_string_pretty(&obj)?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn run_closest_pair_writes_result_and_sidecar() {
        let dir = tempdir().unwrap();
        let input = dir.path().join("pts.json");
        fs::write(&input, "[[0, 0], [10, 10], [3, 4], [20, 0]]").unwrap();
        let out = dir.path().join("res/pair.json");
        run(Algo::ClosestPair, &input, &out).unwrap();
        let doc: Value = serde_json::from_slice(&fs::read(&out).unwrap()).unwrap();
        assert_eq!(doc["distance"], 5.0);
        assert_eq!(doc["pair"][1]["x"], 3.0);
        assert!(dir.path().join("res/pair.provenance.json").exists());
    }

    #[test]
    fn closest_pair_of_one_point_is_null() {
        let dir = tempdir().unwrap();
        let input = dir.path().join("one.json");
        fs::write(&input, "[[1, 1]]").unwrap();
        let (doc, _) = compute(Algo::ClosestPair, &input).unwrap();
        assert!(doc["distance"].is_null());
        assert!(doc["pair"].is_null());
    }

    #[test]
    fn hull_from_csv() {
        let dir = tempdir().unwrap();
        let input = dir.path().join("sq.csv");
        fs::write(&input, "x,y\n0,0\n1,1\n0,1\n1,0\n0.5,0.5\n").unwrap();
        let (doc, params) = compute(Algo::ConvexHull, &input).unwrap();
        assert_eq!(doc["hull"].as_array().unwrap().len(), 5);
        assert_eq!(params["points"], 5);
    }

    #[test]
    fn hull_of_two_points_fails() {
        let dir = tempdir().unwrap();
        let input = dir.path().join("two.json");
        fs::write(&input, "[[0, 0], [1, 1]]").unwrap();
        let err = compute(Algo::ConvexHull, &input).unwrap_err();
        assert!(format!("{err:#}").contains("less than 3 points"));
    }

    #[test]
    fn empty_circle_of_collinear_points_is_null() {
        let dir = tempdir().unwrap();
        let input = dir.path().join("line.json");
        fs::write(&input, "[[0, 0], [1, 1], [2, 2]]").unwrap();
        let (doc, _) = compute(Algo::LargestEmptyCircle, &input).unwrap();
        assert!(doc["circle"].is_null());
    }

    #[test]
    fn console_seed_is_fresh_unless_given() {
        assert_eq!(console_seed(Some(17)), 17);
        assert_ne!(console_seed(None), console_seed(None));
        let mut a = Session::with_seed(console_seed(None));
        let mut b = Session::with_seed(console_seed(None));
        assert_ne!(a.add_random_points(20), b.add_random_points(20));
    }

    #[test]
    fn random_count_is_capped() {
        assert!(random_json(usize::MAX, 0).is_err());
        assert!(random_json(MAX_RANDOM_POINTS + 1, 0).is_err());
        let pts: Vec<[f64; 2]> = serde_json::from_str(&random_json(4, 7).unwrap()).unwrap();
        assert_eq!(pts.len(), 4);
        assert_eq!(random_json(4, 7).unwrap(), random_json(4, 7).unwrap());
    }

    #[test]
    fn run_params_name_the_input_kind() {
        let dir = tempdir().unwrap();
        let input = dir.path().join("segs.json");
        fs::write(&input, "[[[0, 0], [1, 1]]]").unwrap();
        let (_, params) = compute(Algo::SegmentIntersection, &input).unwrap();
        assert_eq!(params["segments"], 1);
        assert!(params.get("points").is_none());
    }

    #[test]
    fn segment_pairs() {
        let dir = tempdir().unwrap();
        let input = dir.path().join("segs.json");
        fs::write(
            &input,
            "[[[1, 1], [10, 10]], [[1, 10], [10, 1]], [[20, 20], [30, 20]]]",
        )
        .unwrap();
        let (doc, _) = compute(Algo::SegmentIntersection, &input).unwrap();
        assert_eq!(doc["pairs"], json!([[0, 1]]));
    }
}
