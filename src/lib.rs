//! zonegeo - validate and measure map-drawn site boundaries, zones and pitches
//!
//! Every operation is a pure function of its inputs, so the same library can
//! back both quick in-editor feedback and the authoritative check in front of
//! persistence.

pub mod config;
pub mod domain;
pub mod error;
pub mod geometry;
pub mod input;
pub mod measure;
pub mod policy;
pub mod template;
pub mod validation;

pub use domain::{Dimensions, Measurement, Polygon, Template, TemplateCatalog};
pub use error::{ErrorKind, TemplateError, ValidationError};
pub use geometry::{snap_ring, snap_to_grid};
pub use measure::{calculate_area, calculate_centroid, calculate_perimeter, measure};
pub use template::{calculate_bounds, generate_from_template, generate_rectangle};
pub use validation::{Validator, validate_geometry, validate_polygon};
