use crate::errors::TemplateError;
use crate::models::RepositorySettings;
use crate::template::render_year;
use std::fmt::Debug;
use std::path::PathBuf;

/// Resolves where a site's extracted files are written
pub trait Repository: Debug + Send + Sync {
    fn get_path(&self) -> Result<PathBuf, TemplateError>;
}

/// Local filesystem output directory built from a `{year}` template.
///
/// The directory is not created here; extraction creates whatever it needs.
#[derive(Debug, Clone, PartialEq)]
pub struct LocalRepository {
    path: String,
    year: i32,
}

impl LocalRepository {
    pub fn new(path: impl Into<String>, year: i32) -> Self {
        Self {
            path: path.into(),
            year,
        }
    }

    pub fn from_settings(settings: &RepositorySettings) -> Self {
        Self::new(settings.path.clone(), settings.year)
    }

    pub fn set_path(&mut self, path: impl Into<String>) {
        self.path = path.into();
    }
}

impl Repository for LocalRepository {
    fn get_path(&self) -> Result<PathBuf, TemplateError> {
        render_year(&self.path, self.year).map(PathBuf::from)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolves_year_template() {
        let repo = LocalRepository::new("data/inmet/{year}", 2024);
        assert_eq!(repo.get_path().unwrap(), PathBuf::from("data/inmet/2024"));
    }

    #[test]
    fn test_set_path_replaces_template() {
        let mut repo = LocalRepository::new("data/inmet/{year}", 2021);
        repo.set_path("archive/{year}/raw");
        assert_eq!(repo.get_path().unwrap(), PathBuf::from("archive/2021/raw"));
    }

    #[test]
    fn test_malformed_template_propagates() {
        let repo = LocalRepository::new("data/{station}", 2024);
        assert!(repo.get_path().is_err());
    }

    #[test]
    fn test_from_settings() {
        let repo = LocalRepository::from_settings(&RepositorySettings {
            path: "out/{year}".to_string(),
            year: 2019,
        });
        assert_eq!(repo.get_path().unwrap(), PathBuf::from("out/2019"));
    }
}
