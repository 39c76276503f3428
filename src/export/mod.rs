pub mod bvh;
pub mod csv;
pub mod viewer;
