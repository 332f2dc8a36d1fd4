use std::path::{Component, Path};

/// Prefix shared by every package label
pub const ROOT_SCOPE: &str = "//";

/// Package label of the BUILD file at `document` inside the workspace at `root`.
///
/// `/w/a/b/BUILD` under `/w` is `//a/b`; `/w/BUILD` is just `//`. Returns
/// `None` when the relative directory contains `..`, which can point outside
/// the workspace.
pub fn package_label(root: &Path, document: &Path) -> Option<String> {
    let package_dir = document.parent()?;
    let relative = package_dir.strip_prefix(root).ok()?;

    let segments = relative
        .components()
        .map(|component| match component {
            Component::Normal(segment) => Some(segment.to_string_lossy().into_owned()),
            _ => None,
        })
        .collect::<Option<Vec<String>>>()?;

    Some(format!("{ROOT_SCOPE}{}", segments.join("/")))
}

/// Query expression selecting the rules declared directly in `package`
pub fn rules_in_package(package: &str) -> String {
    format!("kind(rule, {package}:all)")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nested_package_label() {
        let label = package_label(Path::new("/w"), Path::new("/w/a/b/BUILD"));
        assert_eq!(label.as_deref(), Some("//a/b"));
    }

    #[test]
    fn test_root_package_label() {
        let label = package_label(Path::new("/w"), Path::new("/w/BUILD"));
        assert_eq!(label.as_deref(), Some("//"));
    }

    #[test]
    fn test_document_outside_root() {
        assert_eq!(package_label(Path::new("/w"), Path::new("/x/BUILD")), None);
    }

    #[test]
    fn test_parent_dir_inside_relative_path() {
        assert_eq!(package_label(Path::new("/w"), Path::new("/w/a/../b/BUILD")), None);
        assert_eq!(package_label(Path::new("/w"), Path::new("/w/../c/BUILD")), None);
    }

    #[test]
    fn test_query_expression() {
        assert_eq!(rules_in_package("//a/b"), "kind(rule, //a/b:all)");
        assert_eq!(rules_in_package("//"), "kind(rule, //:all)");
    }
}
