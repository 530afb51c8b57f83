use indexmap::IndexMap;

/// Ordered mapping from package name to a single pinned version
///
/// When the same name is recorded twice the later version replaces the
/// earlier one, but the entry keeps the position of its first insertion.
/// Multiple versions of one package are deliberately collapsed: only the
/// last-visited version is looked up.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PackageVersionMap(IndexMap<String, String>);

impl PackageVersionMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a version for `name`, returning the version it replaced
    pub fn record(&mut self, name: impl Into<String>, version: impl Into<String>) -> Option<String> {
        self.0.insert(name.into(), version.into())
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.0.get(name).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterates entries in insertion order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0
            .iter()
            .map(|(name, version)| (name.as_str(), version.as_str()))
    }
}

impl<N: Into<String>, V: Into<String>> FromIterator<(N, V)> for PackageVersionMap {
    fn from_iter<I: IntoIterator<Item = (N, V)>>(iter: I) -> Self {
        let mut map = Self::new();
        for (name, version) in iter {
            map.record(name, version);
        }
        map
    }
}
