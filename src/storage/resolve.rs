//! Path resolution
//!
//! Prefixes caller-supplied paths with the configured root directory.
//! This is plain string work: `..` segments, symlinks and separators are
//! passed through untouched.

/// Resolves paths against a root directory
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathResolver {
    root: String,
}

impl PathResolver {
    pub fn new(root: impl Into<String>) -> Self {
        Self { root: root.into() }
    }

    /// The configured root directory
    pub fn root(&self) -> &str {
        &self.root
    }

    /// The root without its trailing slash (`"./"` -> `"."`, `"../"` -> `".."`).
    /// This marker names the root itself and is never prefixed. Absolute
    /// roots keep their leading slash so the marker still points at the root.
    pub fn root_marker(&self) -> &str {
        match self.root.trim_end_matches('/') {
            "" => &self.root,
            marker => marker,
        }
    }

    /// Resolve `path` against the root.
    ///
    /// Paths equal to the root marker or already under the root are returned
    /// unchanged. Everything else gets the root prepended, with a `/` in
    /// between unless the root already ends with one.
    pub fn resolve(&self, path: &str) -> String {
        if path == self.root_marker() || self.is_rooted(path) {
            return path.to_string();
        }

        if self.root.ends_with('/') {
            format!("{}{}", self.root, path)
        } else {
            format!("{}/{}", self.root, path)
        }
    }

    /// Whether `path` already lives under the root.
    ///
    /// The prefix has to end on a segment boundary, so `./static2/x` is not
    /// considered to be under `./static`.
    pub fn is_rooted(&self, path: &str) -> bool {
        match path.strip_prefix(self.root.as_str()) {
            Some(rest) => self.root.ends_with('/') || rest.is_empty() || rest.starts_with('/'),
            None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prefixes_relative_paths_with_a_separator() {
        let resolver = PathResolver::new("./files");
        assert_eq!(resolver.resolve("a.txt"), "./files/a.txt");
        assert_eq!(
            resolver.resolve("reports/2024/q1.txt"),
            "./files/reports/2024/q1.txt"
        );
    }

    #[test]
    fn roots_with_trailing_slash_are_concatenated_directly() {
        assert_eq!(PathResolver::new("./").resolve("index.php"), "./index.php");
        assert_eq!(PathResolver::new("../").resolve("config/app.toml"), "../config/app.toml");
    }

    #[test]
    fn rooted_paths_are_left_alone() {
        let resolver = PathResolver::new("./static");
        for path in ["./static", "./static/css/site.css", "./static/"] {
            assert_eq!(resolver.resolve(path), path);
        }

        let resolver = PathResolver::new("./");
        assert_eq!(resolver.resolve("./files/a.txt"), "./files/a.txt");
    }

    #[test]
    fn root_marker_is_left_alone() {
        assert_eq!(PathResolver::new("./").resolve("."), ".");
        assert_eq!(PathResolver::new("../").resolve(".."), "..");
        assert_eq!(PathResolver::new("/srv/files/").resolve("/srv/files"), "/srv/files");
    }

    #[test]
    fn absolute_root_marker_keeps_its_leading_slash() {
        let resolver = PathResolver::new("/srv/files/");
        assert_eq!(resolver.root_marker(), "/srv/files");
        assert_eq!(resolver.resolve("srv/files"), "/srv/files/srv/files");

        assert_eq!(PathResolver::new("/").root_marker(), "/");
        assert_eq!(PathResolver::new("/").resolve("etc/hosts"), "/etc/hosts");
    }

    #[test]
    fn prefix_must_end_on_a_segment_boundary() {
        let resolver = PathResolver::new("./static");
        assert!(!resolver.is_rooted("./static2/x"));
        assert_eq!(resolver.resolve("./static2/x"), "./static/./static2/x");
    }

    #[test]
    fn parent_segments_are_not_normalised() {
        let resolver = PathResolver::new("./files");
        assert_eq!(resolver.resolve("../secret"), "./files/../secret");
    }
}
