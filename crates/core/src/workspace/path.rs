use std::path::{Component, Path, PathBuf};

/// Fold `.` and `..` components without touching the filesystem.
///
/// `..` at the root stays at the root; leading `..` of a relative path is kept.
pub fn normalize(path: &Path) -> PathBuf {
    let mut normalized = PathBuf::new();

    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => match normalized.components().next_back() {
                Some(Component::Normal(_)) => {
                    normalized.pop();
                }
                Some(Component::RootDir | Component::Prefix(_)) => {}
                _ => normalized.push(".."),
            },
            other => normalized.push(other.as_os_str()),
        }
    }

    normalized
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_folds_parent_dirs() {
        assert_eq!(
            normalize(Path::new("/t/a/b/../../c/BUILD")),
            PathBuf::from("/t/c/BUILD")
        );
    }

    #[test]
    fn test_drops_current_dirs() {
        assert_eq!(normalize(Path::new("/w/./pkg/./BUILD")), PathBuf::from("/w/pkg/BUILD"));
    }

    #[test]
    fn test_parent_of_root_is_root() {
        assert_eq!(normalize(Path::new("/../../BUILD")), PathBuf::from("/BUILD"));
    }

    #[test]
    fn test_relative_leading_parent_is_kept() {
        assert_eq!(normalize(Path::new("../x/../y")), PathBuf::from("../y"));
    }
}
