pub mod measurement;
pub mod polygon;
pub mod template;

pub use measurement::Measurement;
pub use polygon::Polygon;
pub use template::{Dimensions, Template, TemplateCatalog};
