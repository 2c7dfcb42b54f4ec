use crate::models::{LocationItem, Position};

/// Name shown for points of interest the API returns without one
pub const UNKNOWN_LOCATION_NAME: &str = "Unknown location";

/// Turn raw API entries into display-ready markers.
///
/// Only entries whose position carries exactly two coordinates survive. Their
/// coordinates are swapped from the API's `[longitude, latitude]` into
/// `[latitude, longitude]`, and missing name/text get display defaults.
/// Input order is preserved.
pub fn map_items(items: Vec<LocationItem>) -> Vec<LocationItem> {
    items.into_iter().filter_map(to_marker).collect()
}

fn to_marker(item: LocationItem) -> Option<LocationItem> {
    let position = item.position?;
    let &[longitude, latitude] = position.coordinates.as_slice() else {
        tracing::debug!(
            "Dropping item {}: expected 2 coordinates, got {}",
            item.id,
            position.coordinates.len()
        );
        return None;
    };

    Some(LocationItem {
        id: item.id,
        name: Some(item.name.unwrap_or_else(|| UNKNOWN_LOCATION_NAME.to_string())),
        text: Some(item.text.unwrap_or_default()),
        position: Some(Position::point(latitude, longitude)),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::location::POINT_TYPE;

    fn item(id: &str, coordinates: Option<Vec<f64>>) -> LocationItem {
        LocationItem {
            id: id.to_string(),
            name: Some(format!("Place {}", id)),
            text: Some("Some text".to_string()),
            position: coordinates.map(|coordinates| Position {
                kind: POINT_TYPE.to_string(),
                coordinates,
            }),
        }
    }

    #[test]
    fn test_coordinates_are_swapped() {
        let markers = map_items(vec![item("a", Some(vec![13.405, 52.52]))]);

        assert_eq!(markers.len(), 1);
        let position = markers[0].position.as_ref().unwrap();
        assert_eq!(position.coordinates, vec![52.52, 13.405]);
        assert_eq!(position.latitude(), Some(52.52));
        assert_eq!(position.longitude(), Some(13.405));
    }

    #[test]
    fn test_entries_without_a_coordinate_pair_are_dropped() {
        let markers = map_items(vec![
            item("no-position", None),
            item("empty", Some(vec![])),
            item("one", Some(vec![1.0])),
            item("three", Some(vec![1.0, 2.0, 3.0])),
            item("kept", Some(vec![1.0, 2.0])),
        ]);

        let ids: Vec<&str> = markers.iter().map(|m| m.id.as_str()).collect();
        assert_eq!(ids, vec!["kept"]);
    }

    #[test]
    fn test_missing_name_and_text_get_defaults() {
        let mut raw = item("a", Some(vec![8.0, 47.0]));
        raw.name = None;
        raw.text = None;

        let markers = map_items(vec![raw]);
        assert_eq!(markers[0].name.as_deref(), Some(UNKNOWN_LOCATION_NAME));
        assert_eq!(markers[0].text.as_deref(), Some(""));
    }

    #[test]
    fn test_present_name_and_text_are_kept() {
        let markers = map_items(vec![item("a", Some(vec![8.0, 47.0]))]);
        assert_eq!(markers[0].name.as_deref(), Some("Place a"));
        assert_eq!(markers[0].text.as_deref(), Some("Some text"));
    }

    #[test]
    fn test_position_type_is_forced_to_point() {
        let mut raw = item("a", Some(vec![8.0, 47.0]));
        if let Some(position) = raw.position.as_mut() {
            position.kind = "Feature".to_string();
        }

        let markers = map_items(vec![raw]);
        assert_eq!(markers[0].position.as_ref().unwrap().kind, POINT_TYPE);
    }

    #[test]
    fn test_order_is_preserved() {
        let markers = map_items(vec![
            item("c", Some(vec![3.0, 3.0])),
            item("skip", None),
            item("a", Some(vec![1.0, 1.0])),
            item("b", Some(vec![2.0, 2.0])),
        ]);

        let ids: Vec<&str> = markers.iter().map(|m| m.id.as_str()).collect();
        assert_eq!(ids, vec!["c", "a", "b"]);
    }

    #[test]
    fn test_empty_input() {
        assert!(map_items(Vec::new()).is_empty());
    }
}
