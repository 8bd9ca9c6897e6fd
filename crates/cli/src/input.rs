//! Batch input readers: points or segments from JSON arrays or CSV columns.

use anyhow::{bail, Context, Result};
use geocalc::shapes::{Line, Point};
use polars::prelude::*;
use std::fs;
use std::path::Path;

fn is_csv(path: &Path) -> bool {
    path.extension()
        .map(|ext| ext.eq_ignore_ascii_case("csv"))
        .unwrap_or(false)
}

/// Read `[[x, y], ...]` JSON or a CSV with `x,y` columns.
pub fn read_points(path: &Path) -> Result<Vec<Point>> {
    if is_csv(path) {
        let df = read_csv(path)?;
        let xs = float_column(&df, "x")?;
        let ys = float_column(&df, "y")?;
        return Ok(xs
            .into_iter()
            .zip(ys)
            .map(|(x, y)| Point::new(x, y))
            .collect());
    }
    let raw: Vec<[f64; 2]> = serde_json::from_slice(&read_bytes(path)?)
        .with_context(|| format!("parsing point list {}", path.display()))?;
    Ok(raw.into_iter().map(|[x, y]| Point::new(x, y)).collect())
}

/// Read `[[[x1, y1], [x2, y2]], ...]` JSON or a CSV with `x1,y1,x2,y2` columns.
/// Zero-length segments are rejected with their row index.
pub fn read_segments(path: &Path) -> Result<Vec<Line>> {
    let ends: Vec<(Point, Point)> = if is_csv(path) {
        let df = read_csv(path)?;
        let x1 = float_column(&df, "x1")?;
        let y1 = float_column(&df, "y1")?;
        let x2 = float_column(&df, "x2")?;
        let y2 = float_column(&df, "y2")?;
        (0..x1.len())
            .map(|i| (Point::new(x1[i], y1[i]), Point::new(x2[i], y2[i])))
            .collect()
    } else {
        let raw: Vec<[[f64; 2]; 2]> = serde_json::from_slice(&read_bytes(path)?)
            .with_context(|| format!("parsing segment list {}", path.display()))?;
        raw.into_iter()
            .map(|[[x1, y1], [x2, y2]]| (Point::new(x1, y1), Point::new(x2, y2)))
            .collect()
    };
    ends.into_iter()
        .enumerate()
        .map(|(i, (a, b))| Line::new(a, b).with_context(|| format!("segment {i}")))
        .collect()
}

fn read_bytes(path: &Path) -> Result<Vec<u8>> {
    fs::read(path).with_context(|| format!("reading {}", path.display()))
}

fn read_csv(path: &Path) -> Result<DataFrame> {
    let df = LazyCsvReader::new(path)
        .with_infer_schema_length(Some(100))
        .finish()
        .with_context(|| format!("opening {}", path.display()))?
        .collect()?;
    tracing::info!(rows = df.height(), cols = df.width(), "input_csv_shape");
    Ok(df)
}

fn float_column(df: &DataFrame, name: &str) -> Result<Vec<f64>> {
    let col = df
        .column(name)
        .with_context(|| format!("missing column '{name}'"))?
        .cast(&DataType::Float64)?;
    let mut out = Vec::with_capacity(col.len());
    for (row, v) in col.f64()?.into_iter().enumerate() {
        match v {
            Some(v) if v.is_finite() => out.push(v),
            _ => bail!("column '{name}' row {row}: expected a finite number"),
        }
    }
    Ok(out)
}
