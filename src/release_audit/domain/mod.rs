pub mod cutoff;
pub mod dependency_node;
pub mod package_version_map;
pub mod release_result;
pub mod timestamp;

pub use cutoff::Cutoff;
pub use dependency_node::DependencyNode;
pub use package_version_map::PackageVersionMap;
pub use release_result::ReleaseResult;
