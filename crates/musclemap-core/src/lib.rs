#![forbid(unsafe_code)]

//! Muscle taxonomy and body outline catalog (headless).
//!
//! Design goals:
//! - closed, statically validated muscle catalog with parent/sub-group relations
//! - immutable per-(gender, side) path catalogs shared by every renderer
//! - deterministic geometry: the same inputs always flatten to the same polygons

pub mod body;
pub mod color;
pub mod error;
pub mod generated;
pub mod geom;
pub mod muscle;
pub mod path;
pub mod paths;

pub use body::{BodyGender, BodyPart, BodySide, BodySlug};
pub use color::Color;
pub use error::{Error, Result};
pub use muscle::{Muscle, MuscleSide};
pub use path::PathGeometry;
pub use paths::{BodyGeometry, PartGeometry, ShapeGeometry, geometry, paths, view_box};
