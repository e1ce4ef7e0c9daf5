//! Point loading for the CLI: `.csv` tables with `x` and `y` columns, or the
//! plain `count` + pairs text format for anything else.

use anyhow::{bail, Context, Result};
use collinear::{source, Point};
use polars::prelude::*;
use std::path::Path;

pub fn load(path: &Path) -> Result<Vec<Point>> {
    let is_csv = path
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("csv"));
    let points = if is_csv {
        load_csv(path)?
    } else {
        source::load_points(path).with_context(|| format!("loading {}", path.display()))?
    };
    tracing::info!(path = %path.display(), points = points.len(), "loaded points");
    Ok(points)
}

fn load_csv(path: &Path) -> Result<Vec<Point>> {
    let df = LazyCsvReader::new(path)
        .with_infer_schema_length(Some(100))
        .finish()?
        .select([
            col("x").cast(DataType::Int32),
            col("y").cast(DataType::Int32),
        ])
        .collect()
        .with_context(|| format!("reading x,y columns from {}", path.display()))?;
    let xs = df.column("x")?.i32()?;
    let ys = df.column("y")?.i32()?;
    let mut points = Vec::with_capacity(df.height());
    for (row, (x, y)) in xs.into_iter().zip(ys.into_iter()).enumerate() {
        match (x, y) {
            (Some(x), Some(y)) => points.push(Point::new(x, y)),
            _ => bail!(
                "{}: row {row} has a missing or non-integer coordinate",
                path.display()
            ),
        }
    }
    Ok(points)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn loads_text_format() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("points.txt");
        fs::write(&path, "3\n0 0\n1 2\n-4 9\n").unwrap();
        let pts = load(&path).unwrap();
        assert_eq!(pts, vec![Point::new(0, 0), Point::new(1, 2), Point::new(-4, 9)]);
    }

    #[test]
    fn text_errors_keep_the_loader_message() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("bad.txt");
        fs::write(&path, "2\n0 0\n1").unwrap();
        let err = load(&path).unwrap_err();
        let chain = format!("{err:#}");
        assert!(chain.contains("missing its y coordinate"), "{chain}");
    }

    #[test]
    fn loads_csv_columns() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("points.csv");
        fs::write(&path, "x,y\n0,0\n1,1\n2,2\n3,3\n").unwrap();
        let pts = load(&path).unwrap();
        assert_eq!(pts.len(), 4);
        assert_eq!(pts[3], Point::new(3, 3));
    }

    #[test]
    fn csv_without_y_column_fails() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("points.csv");
        fs::write(&path, "x,z\n0,0\n").unwrap();
        assert!(load(&path).is_err());
    }
}
