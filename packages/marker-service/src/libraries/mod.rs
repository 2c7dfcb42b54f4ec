pub mod marker_mapping;
