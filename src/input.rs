//! Extraction of geometries from GeoJSON documents
//!
//! Accepts a bare Geometry, a Feature, or a FeatureCollection. Anything else is
//! handed on as-is so the structural validator can reject it with a proper
//! error instead of it being silently dropped.

use serde_json::Value;

/// A geometry pulled out of an input document, with a label for reporting
#[derive(Debug, Clone, PartialEq)]
pub struct LabeledGeometry {
    pub label: String,
    pub geometry: Value,
}

pub fn collect_geometries(document: &Value) -> Vec<LabeledGeometry> {
    match document.get("type").and_then(Value::as_str) {
        Some("FeatureCollection") => match document.get("features").and_then(Value::as_array) {
            Some(features) => features
                .iter()
                .enumerate()
                .map(|(i, feature)| from_feature(feature, i))
                .collect(),
            // No features array: let the structural check reject the document
            None => vec![as_geometry(document)],
        },
        Some("Feature") => vec![from_feature(document, 0)],
        _ => vec![as_geometry(document)],
    }
}

fn as_geometry(document: &Value) -> LabeledGeometry {
    LabeledGeometry {
        label: "geometry".to_string(),
        geometry: document.clone(),
    }
}

fn from_feature(feature: &Value, index: usize) -> LabeledGeometry {
    LabeledGeometry {
        label: feature_label(feature).unwrap_or_else(|| format!("feature {}", index)),
        geometry: feature.get("geometry").cloned().unwrap_or(Value::Null),
    }
}

fn feature_label(feature: &Value) -> Option<String> {
    match feature.get("id") {
        Some(Value::String(id)) => return Some(id.clone()),
        Some(Value::Number(id)) => return Some(id.to_string()),
        _ => {}
    }
    feature
        .get("properties")?
        .get("name")?
        .as_str()
        .map(str::to_string)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_bare_geometry() {
        let geometry = json!({"type": "Polygon", "coordinates": []});
        let collected = collect_geometries(&geometry);
        assert_eq!(collected.len(), 1);
        assert_eq!(collected[0].geometry, geometry);
    }

    #[test]
    fn test_feature_collection_labels() {
        let doc = json!({
            "type": "FeatureCollection",
            "features": [
                {"type": "Feature", "id": "north-pitch", "geometry": {"type": "Polygon"}},
                {"type": "Feature", "id": 7, "geometry": null},
                {"type": "Feature", "properties": {"name": "Car park"}, "geometry": {}},
                {"type": "Feature", "properties": {}}
            ]
        });
        let labels: Vec<String> = collect_geometries(&doc).into_iter().map(|g| g.label).collect();
        assert_eq!(labels, vec!["north-pitch", "7", "Car park", "feature 3"]);
    }

    #[test]
    fn test_feature_without_geometry_yields_null() {
        let doc = json!({"type": "Feature", "properties": {}});
        let collected = collect_geometries(&doc);
        assert_eq!(collected[0].geometry, Value::Null);
    }

    #[test]
    fn test_collection_without_features_is_rejected() {
        let doc = json!({"type": "FeatureCollection", "features": {"oops": true}});
        let collected = collect_geometries(&doc);
        assert_eq!(collected.len(), 1);
        assert_eq!(collected[0].geometry, doc);

        let err = crate::validation::validate_geometry(&collected[0].geometry).unwrap_err();
        assert_eq!(err.kind(), crate::error::ErrorKind::InvalidPolygon);
    }

    #[test]
    fn test_empty_collection_has_nothing_to_check() {
        let doc = json!({"type": "FeatureCollection", "features": []});
        assert!(collect_geometries(&doc).is_empty());
    }
}
