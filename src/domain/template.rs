use serde::{Deserialize, Serialize};

/// Physical size of a rectangular area in meters
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Dimensions {
    pub width_m: f64,
    pub length_m: f64,
}

impl Dimensions {
    pub fn new(width_m: f64, length_m: f64) -> Self {
        Self { width_m, length_m }
    }

    pub fn is_valid(&self) -> bool {
        self.width_m.is_finite()
            && self.length_m.is_finite()
            && self.width_m > 0.0
            && self.length_m > 0.0
    }
}

/// A named pitch or zone layout used to seed generated rectangles
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Template {
    pub id: String,
    pub name: String,
    pub category: String,
    pub dimensions: Dimensions,
    /// Default rotation in degrees; 0 puts the length axis north-south
    #[serde(default)]
    pub rotation_deg: f64,
}

impl Template {
    pub fn new(id: &str, name: &str, category: &str, width_m: f64, length_m: f64) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            category: category.to_string(),
            dimensions: Dimensions::new(width_m, length_m),
            rotation_deg: 0.0,
        }
    }
}

/// Read-only set of templates, built once at startup and passed to the
/// generator explicitly.
#[derive(Debug, Clone, PartialEq)]
pub struct TemplateCatalog {
    templates: Vec<Template>,
}

impl TemplateCatalog {
    pub fn new(templates: Vec<Template>) -> Self {
        Self { templates }
    }

    /// Standard playing areas. Dimensions are the common full-size (or youth
    /// format) playing surface, excluding run-off.
    pub fn builtin() -> Self {
        Self::new(vec![
            Template::new("football-11v11", "Football 11v11", "football", 68.0, 105.0),
            Template::new("football-9v9", "Football 9v9", "football", 46.0, 73.0),
            Template::new("football-7v7", "Football 7v7", "football", 37.0, 55.0),
            Template::new("football-5v5", "Football 5v5", "football", 27.0, 37.0),
            Template::new("rugby-union", "Rugby Union", "rugby", 70.0, 100.0),
            Template::new(
                "american-football",
                "American Football",
                "american-football",
                48.77,
                109.73,
            ),
            Template::new("field-hockey", "Field Hockey", "hockey", 55.0, 91.4),
            Template::new("lacrosse", "Lacrosse", "lacrosse", 54.86, 100.58),
            Template::new("tennis", "Tennis Court", "tennis", 10.97, 23.77),
            Template::new("basketball", "Basketball Court", "basketball", 15.0, 28.0),
            Template::new("training-grid", "Training Grid", "zone", 20.0, 20.0),
        ])
    }

    /// Builtins plus `extra`; an extra entry replaces a builtin with the same id
    pub fn with_additions(extra: Vec<Template>) -> Self {
        let mut templates = Self::builtin().templates;
        for template in extra {
            match templates.iter_mut().find(|t| t.id == template.id) {
                Some(existing) => *existing = template,
                None => templates.push(template),
            }
        }
        Self::new(templates)
    }

    pub fn get(&self, id: &str) -> Option<&Template> {
        self.templates.iter().find(|t| t.id == id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Template> {
        self.templates.iter()
    }

    pub fn len(&self) -> usize {
        self.templates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.templates.is_empty()
    }
}

impl Default for TemplateCatalog {
    fn default() -> Self {
        Self::builtin()
    }
}
