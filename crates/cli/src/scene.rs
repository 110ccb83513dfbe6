use anyhow::{Context, Result};
use planar::{Contact, GeomError, Nearest, Shape, Side, Triangle, Vec2};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// JSON form of a shape; points are `[x, y]`.
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum ShapeSpec {
    Point { at: [f64; 2] },
    Side { a: [f64; 2], b: [f64; 2] },
    Triangle { a: [f64; 2], b: [f64; 2], c: [f64; 2] },
}

impl ShapeSpec {
    pub fn build(&self) -> Result<Shape, GeomError> {
        Ok(match *self {
            ShapeSpec::Point { at } => Shape::Point(Vec2::from(at)),
            ShapeSpec::Side { a, b } => Shape::Side(Side::new(Vec2::from(a), Vec2::from(b))?),
            ShapeSpec::Triangle { a, b, c } => {
                Shape::Triangle(Triangle::new(Vec2::from(a), Vec2::from(b), Vec2::from(c))?)
            }
        })
    }
}

/// A single pairwise query: closest points from `a` to `b`.
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct Scene {
    pub a: ShapeSpec,
    pub b: ShapeSpec,
}

#[derive(Clone, Debug, Serialize, PartialEq)]
pub struct ContactReport {
    pub source: [f64; 2],
    pub target: [f64; 2],
    pub direction: Option<[f64; 2]>,
    pub distance: f64,
    pub touching: bool,
}

impl From<&Contact> for ContactReport {
    fn from(c: &Contact) -> Self {
        let xy = |v: Vec2| [v.x, v.y];
        Self {
            source: xy(c.source()),
            target: xy(c.target()),
            direction: c.direction().map(xy),
            distance: c.distance(),
            touching: c.is_touching(),
        }
    }
}

pub fn load(path: &Path) -> Result<Scene> {
    let bytes = std::fs::read(path).with_context(|| format!("reading {}", path.display()))?;
    serde_json::from_slice(&bytes).with_context(|| format!("parsing scene {}", path.display()))
}

pub fn evaluate(scene: &Scene) -> Result<ContactReport> {
    let a = scene.a.build().context("building shape a")?;
    let b = scene.b.build().context("building shape b")?;
    tracing::debug!(a = a.kind(), b = b.kind(), "query");
    let contact = a.closest_points(&b).context("resolving closest points")?;
    Ok(ContactReport::from(&contact))
}
