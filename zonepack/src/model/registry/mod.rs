mod boundary_source;

pub use boundary_source::BoundarySource;
