use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use crate::CONFIG_FILE_NAME;

#[derive(Debug)]
pub enum ConfigProbe {
    Present,
    Absent,
    /// `stat` failed for a reason other than not-found. Opening the file is
    /// what surfaces the real error.
    Indeterminate(std::io::Error),
}

impl ConfigProbe {
    /// Whether the resolver should try to open the file.
    #[must_use]
    pub fn should_open(&self) -> bool {
        !matches!(self, Self::Absent)
    }
}

#[must_use]
pub fn config_path(dir: &Path) -> PathBuf {
    dir.join(CONFIG_FILE_NAME)
}

#[must_use]
pub fn probe(dir: &Path) -> ConfigProbe {
    if dir.as_os_str().is_empty() {
        return ConfigProbe::Absent;
    }

    match std::fs::metadata(config_path(dir)) {
        Ok(_) => ConfigProbe::Present,
        Err(e) if e.kind() == ErrorKind::NotFound => ConfigProbe::Absent,
        Err(e) => ConfigProbe::Indeterminate(e),
    }
}

#[must_use]
pub fn has_config(dir: &Path) -> bool {
    matches!(probe(dir), ConfigProbe::Present)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_config_path_joins_file_name() {
        let path = config_path(Path::new("/work/project"));
        assert_eq!(path, PathBuf::from("/work/project/.envrc"));
    }

    #[test]
    fn test_missing_file_is_absent() {
        let dir = tempdir().unwrap();
        assert!(matches!(probe(dir.path()), ConfigProbe::Absent));
        assert!(!has_config(dir.path()));
    }

    #[test]
    fn test_existing_file_is_present() {
        let dir = tempdir().unwrap();
        std::fs::write(dir.path().join(".envrc"), "A=1\n").unwrap();
        assert!(matches!(probe(dir.path()), ConfigProbe::Present));
        assert!(has_config(dir.path()));
    }

    #[test]
    fn test_missing_directory_is_absent() {
        let dir = tempdir().unwrap();
        let gone = dir.path().join("does-not-exist");
        assert!(matches!(probe(&gone), ConfigProbe::Absent));
    }

    #[test]
    fn test_empty_directory_is_absent() {
        assert!(matches!(probe(Path::new("")), ConfigProbe::Absent));
    }

    #[cfg(unix)]
    #[test]
    fn test_parent_is_a_file_is_indeterminate() {
        let dir = tempdir().unwrap();
        let file = dir.path().join("plain-file");
        std::fs::write(&file, "").unwrap();

        let result = probe(&file);
        assert!(matches!(result, ConfigProbe::Indeterminate(_)));
        assert!(result.should_open());
        assert!(!has_config(&file));
    }
}
