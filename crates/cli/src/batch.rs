use anyhow::{Context, Result};
use planar::sample::{draw_pair, TriangleCfg};
use planar::{Nearest, Triangle, Vec2};
use polars::prelude::*;
use std::fs::File;
use std::path::Path;

/// Input columns: triangle ABC, then triangle PQR.
pub const PAIR_COLUMNS: [&str; 12] = [
    "ax", "ay", "bx", "by", "cx", "cy", "px", "py", "qx", "qy", "rx", "ry",
];

pub type PairRow = [f64; 12];

/// Closest pair for one row; all `NaN` when the row could not be resolved.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RowResult {
    pub distance: f64,
    pub source: [f64; 2],
    pub target: [f64; 2],
}

impl RowResult {
    const FAILED: RowResult = RowResult {
        distance: f64::NAN,
        source: [f64::NAN; 2],
        target: [f64::NAN; 2],
    };

    pub fn is_failed(&self) -> bool {
        self.distance.is_nan()
    }
}

fn triangles(row: &PairRow) -> Result<(Triangle, Triangle), planar::GeomError> {
    let v = |i: usize| Vec2::new(row[i], row[i + 1]);
    Ok((
        Triangle::new(v(0), v(2), v(4))?,
        Triangle::new(v(6), v(8), v(10))?,
    ))
}

fn row_of(t: &Triangle, u: &Triangle) -> PairRow {
    let mut row = [0.0; 12];
    for (k, v) in t.vertices().into_iter().chain(u.vertices()).enumerate() {
        row[2 * k] = v.x;
        row[2 * k + 1] = v.y;
    }
    row
}

pub fn evaluate_row(row: &PairRow) -> RowResult {
    let resolved = triangles(row).and_then(|(t, u)| t.closest_points(&u));
    match resolved {
        Ok(c) => RowResult {
            distance: c.distance(),
            source: [c.source().x, c.source().y],
            target: [c.target().x, c.target().y],
        },
        Err(err) => {
            tracing::warn!(kind = err.kind(), %err, "row skipped");
            RowResult::FAILED
        }
    }
}

pub fn read_pairs(path: &Path) -> Result<Vec<PairRow>> {
    let df = LazyCsvReader::new(path)
        .with_has_header(true)
        .with_infer_schema_length(Some(100))
        .finish()?
        .collect()
        .with_context(|| format!("reading {}", path.display()))?;
    let mut rows = vec![[f64::NAN; 12]; df.height()];
    for (j, name) in PAIR_COLUMNS.iter().enumerate() {
        let col = df
            .column(name)
            .with_context(|| format!("missing column {name}"))?
            .cast(&DataType::Float64)?;
        for (row, value) in rows.iter_mut().zip(col.f64()?.into_iter()) {
            row[j] = value.unwrap_or(f64::NAN);
        }
    }
    tracing::info!(rows = rows.len(), "pairs loaded");
    Ok(rows)
}

fn write_frame(path: &Path, df: &mut DataFrame) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }
    let mut file = File::create(path).with_context(|| format!("creating {}", path.display()))?;
    if path.extension().is_some_and(|ext| ext == "parquet") {
        ParquetWriter::new(&mut file).finish(df)?;
    } else {
        CsvWriter::new(&mut file).finish(df)?;
    }
    Ok(())
}

pub fn write_results(path: &Path, results: &[RowResult]) -> Result<()> {
    let pick = |f: fn(&RowResult) -> f64| results.iter().map(f).collect::<Vec<f64>>();
    let mut df = df!(
        "distance" => pick(|r| r.distance),
        "sx" => pick(|r| r.source[0]),
        "sy" => pick(|r| r.source[1]),
        "tx" => pick(|r| r.target[0]),
        "ty" => pick(|r| r.target[1]),
    )?;
    write_frame(path, &mut df)
}

pub fn write_pairs(path: &Path, rows: &[PairRow]) -> Result<()> {
    let columns = PAIR_COLUMNS
        .iter()
        .enumerate()
        .map(|(j, name)| Series::new((*name).into(), rows.iter().map(|r| r[j]).collect::<Vec<f64>>()))
        .collect::<Vec<_>>();
    let mut df = DataFrame::new(columns)?;
    write_frame(path, &mut df)
}

/// Evaluate every row of `input` and write one result per row to `out`.
pub fn run(input: &Path, out: &Path) -> Result<usize> {
    let rows = read_pairs(input)?;
    let results: Vec<RowResult> = rows.iter().map(evaluate_row).collect();
    let failed = results.iter().filter(|r| r.is_failed()).count();
    tracing::info!(rows = results.len(), failed, out = %out.display(), "batch done");
    write_results(out, &results)?;
    Ok(results.len())
}

/// Write `count` random triangle pairs drawn from `seed`.
pub fn sample(count: u64, seed: u64, out: &Path) -> Result<usize> {
    let cfg = TriangleCfg::default();
    let rows: Vec<PairRow> = (0..count)
        .filter_map(|i| draw_pair(cfg, seed, i))
        .map(|(t, u)| row_of(&t, &u))
        .collect();
    tracing::info!(count = rows.len(), seed, out = %out.display(), "sampled pairs");
    write_pairs(out, &rows)?;
    Ok(rows.len())
}
