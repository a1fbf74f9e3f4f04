//! The enumerated axes of a generation run.

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize, Serializer};

/// Kind of application being scaffolded.
///
/// Selects which project-specific endpoints are appended to the router.
/// New kinds may be added; generators treat kinds they don't know as
/// [`ProjectType::Generic`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Deserialize)]
#[serde(try_from = "String")]
#[non_exhaustive]
pub enum ProjectType {
    /// Plain API with only the root and health endpoints
    #[default]
    Generic,
    /// Machine-learning inference API
    MlApi,
    /// Data-processing microservice
    Microservice,
}

impl ProjectType {
    /// Every project type, in prompt order.
    pub const ALL: &'static [ProjectType] = &[
        ProjectType::Generic,
        ProjectType::MlApi,
        ProjectType::Microservice,
    ];

    /// Returns the identifier used in faststart.toml.
    pub fn as_str(&self) -> &'static str {
        match self {
            ProjectType::Generic => "generic",
            ProjectType::MlApi => "ml_api",
            ProjectType::Microservice => "microservice",
        }
    }

    /// Human-readable label for interactive prompts.
    pub fn label(&self) -> &'static str {
        match self {
            ProjectType::Generic => "Generic API",
            ProjectType::MlApi => "ML API (prediction + model info)",
            ProjectType::Microservice => "Microservice (status + process)",
        }
    }
}

impl fmt::Display for ProjectType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for ProjectType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "generic" | "api" => Ok(ProjectType::Generic),
            "ml_api" | "ml-api" | "ml" => Ok(ProjectType::MlApi),
            "microservice" | "micro" | "service" => Ok(ProjectType::Microservice),
            _ => Err(format!(
                "unknown project type '{}', expected 'generic', 'ml_api' or 'microservice'",
                s
            )),
        }
    }
}

impl TryFrom<String> for ProjectType {
    type Error = String;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl Serialize for ProjectType {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

/// Authentication scheme of the generated application.
///
/// Anything other than [`AuthType::None`] turns on the auth router.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Deserialize)]
#[serde(try_from = "String")]
#[non_exhaustive]
pub enum AuthType {
    /// No authentication
    #[default]
    None,
    /// Bearer JWT issued by the `/auth/token` endpoint
    Jwt,
    /// OAuth2 password flow
    OAuth2,
}

impl AuthType {
    /// Every auth type, in prompt order.
    pub const ALL: &'static [AuthType] = &[AuthType::None, AuthType::Jwt, AuthType::OAuth2];

    /// Returns the identifier used in faststart.toml.
    pub fn as_str(&self) -> &'static str {
        match self {
            AuthType::None => "none",
            AuthType::Jwt => "jwt",
            AuthType::OAuth2 => "oauth2",
        }
    }

    /// Human-readable label for interactive prompts.
    pub fn label(&self) -> &'static str {
        match self {
            AuthType::None => "None",
            AuthType::Jwt => "JWT bearer tokens",
            AuthType::OAuth2 => "OAuth2 password flow",
        }
    }

    /// Whether auth files and dependencies are generated.
    pub fn is_enabled(&self) -> bool {
        !matches!(self, AuthType::None)
    }
}

impl fmt::Display for AuthType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for AuthType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "none" | "off" => Ok(AuthType::None),
            "jwt" => Ok(AuthType::Jwt),
            "oauth2" | "oauth" => Ok(AuthType::OAuth2),
            _ => Err(format!(
                "unknown auth type '{}', expected 'none', 'jwt' or 'oauth2'",
                s
            )),
        }
    }
}

impl TryFrom<String> for AuthType {
    type Error = String;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl Serialize for AuthType {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_project_type_from_str() {
        assert_eq!(
            ProjectType::from_str("generic").unwrap(),
            ProjectType::Generic
        );
        assert_eq!(ProjectType::from_str("ml_api").unwrap(), ProjectType::MlApi);
        assert_eq!(ProjectType::from_str("ML-API").unwrap(), ProjectType::MlApi);
        assert_eq!(
            ProjectType::from_str("microservice").unwrap(),
            ProjectType::Microservice
        );
        assert!(ProjectType::from_str("webapp").is_err());
    }

    #[test]
    fn test_auth_type_from_str() {
        assert_eq!(AuthType::from_str("none").unwrap(), AuthType::None);
        assert_eq!(AuthType::from_str("JWT").unwrap(), AuthType::Jwt);
        assert_eq!(AuthType::from_str("oauth").unwrap(), AuthType::OAuth2);
        assert!(AuthType::from_str("basic").is_err());
    }

    #[test]
    fn test_display_round_trips_through_from_str() {
        for kind in ProjectType::ALL {
            assert_eq!(kind.to_string().parse::<ProjectType>().unwrap(), *kind);
        }
        for auth in AuthType::ALL {
            assert_eq!(auth.to_string().parse::<AuthType>().unwrap(), *auth);
        }
    }

    #[test]
    fn test_auth_enabled() {
        assert!(!AuthType::None.is_enabled());
        assert!(AuthType::Jwt.is_enabled());
        assert!(AuthType::OAuth2.is_enabled());
    }

    #[test]
    fn test_serde() {
        let kind: ProjectType = serde_json::from_str(r#""microservice""#).unwrap();
        assert_eq!(kind, ProjectType::Microservice);
        assert_eq!(
            serde_json::to_string(&ProjectType::MlApi).unwrap(),
            r#""ml_api""#
        );

        let auth: AuthType = serde_json::from_str(r#""oauth2""#).unwrap();
        assert_eq!(auth, AuthType::OAuth2);
        assert!(serde_json::from_str::<AuthType>(r#""saml""#).is_err());
    }
}
