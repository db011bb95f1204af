pub mod distance_table;
pub mod vertex_expanded_data;
