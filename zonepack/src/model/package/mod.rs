mod boundary_tool;
pub mod package_ops;

pub use boundary_tool::{BoundaryConverter, BoundaryFileSet, Ogr2OgrTool, SHAPEFILE_EXTENSIONS};
