use faststart_codegen::{FileEntry, FileRegistry, LanguageCodegen};
use faststart_config::GenerationConfig;
use faststart_core::GeneratedFile;

use crate::files::{AuthPy, EndpointsPy, InitPy};

/// Composes the FastAPI router package for one configuration.
///
/// Composition is pure and cannot fail: every configuration that could be
/// built yields a complete file set.
pub struct Generator<'a> {
    config: &'a GenerationConfig,
}

impl LanguageCodegen for Generator<'_> {
    fn language(&self) -> &'static str {
        "python"
    }

    fn file_extension(&self) -> &'static str {
        "py"
    }

    fn compose(&self) -> FileRegistry {
        let mut registry = FileRegistry::new();

        registry.register(generated(
            EndpointsPy::PATH,
            &EndpointsPy::new(self.config),
        ));

        if self.config.auth_type().is_enabled() {
            registry.register(generated(AuthPy::PATH, &AuthPy::new(self.config)));
        }

        registry.register(generated(InitPy::PATH, &InitPy::new(self.config)));

        tracing::debug!(
            project = self.config.project_name(),
            project_type = %self.config.project_type(),
            auth = %self.config.auth_type(),
            is_async = self.config.is_async(),
            files = registry.len(),
            "composed API files"
        );

        registry
    }
}

impl<'a> Generator<'a> {
    pub fn new(config: &'a GenerationConfig) -> Self {
        Self { config }
    }
}

fn generated(path: &str, file: &impl GeneratedFile) -> FileEntry {
    FileEntry::generated(path, file.render())
}

#[cfg(test)]
mod tests {
    use faststart_config::{AuthType, ProjectType};

    use super::*;

    #[test]
    fn test_file_set_follows_auth() {
        let without = GenerationConfig::new("a").unwrap();
        let with = GenerationConfig::new("a").unwrap().with_auth(AuthType::Jwt);

        assert_eq!(
            Generator::new(&without).compose().paths(),
            [EndpointsPy::PATH, InitPy::PATH]
        );
        assert_eq!(
            Generator::new(&with).compose().paths(),
            [EndpointsPy::PATH, AuthPy::PATH, InitPy::PATH]
        );
    }

    #[test]
    fn test_registry_paths_match_file_paths() {
        let config = GenerationConfig::new("a")
            .unwrap()
            .with_project_type(ProjectType::Microservice)
            .with_auth(AuthType::OAuth2);
        let base = std::path::Path::new("root");

        for entry in Generator::new(&config).compose().entries() {
            let expected = match entry.path.as_str() {
                EndpointsPy::PATH => EndpointsPy::new(&config).path(base),
                AuthPy::PATH => AuthPy::new(&config).path(base),
                InitPy::PATH => InitPy::new(&config).path(base),
                other => panic!("unexpected path {other}"),
            };
            assert_eq!(entry.full_path(base), expected);
        }
    }

    #[test]
    fn test_language() {
        let config = GenerationConfig::new("a").unwrap();
        let generator = Generator::new(&config);
        assert_eq!(generator.language(), "python");
        assert_eq!(generator.file_extension(), "py");
    }
}
