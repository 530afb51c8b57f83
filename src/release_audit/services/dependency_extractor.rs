use crate::release_audit::domain::{DependencyNode, PackageVersionMap};

/// DependencyExtractor service for flattening a lockfile tree
///
/// This service contains pure business logic with no I/O dependencies.
pub struct DependencyExtractor;

impl DependencyExtractor {
    /// Collects every package/version pair reachable from `root`
    ///
    /// The walk is depth-first in document order. Each child under a
    /// `dependencies` field that carries a version is recorded, overwriting
    /// any earlier version of the same name, and every child is descended
    /// into whether or not it had a version. The root's own version is the
    /// project itself and is never recorded.
    ///
    /// Lockfile trees are JSON and therefore acyclic, so no visited set is kept.
    pub fn extract(root: &DependencyNode) -> PackageVersionMap {
        let mut packages = PackageVersionMap::new();
        Self::collect(root, &mut packages);
        packages
    }

    fn collect(node: &DependencyNode, packages: &mut PackageVersionMap) {
        for (name, child) in node.dependencies() {
            if let Some(version) = child.version() {
                packages.record(name, version);
            }
            Self::collect(child, packages);
        }
    }
}
