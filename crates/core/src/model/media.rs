use std::fmt;
use std::path::{Path, PathBuf};
use thiserror::Error;
use url::Url;

//
// ─── ERRORS ────────────────────────────────────────────────────────────────────
//

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum MediaValidationError {
    #[error("image reference cannot be empty")]
    EmptyImageRef,

    #[error("image URL is malformed: {0}")]
    MalformedUrl(String),
}

//
// ─── IMAGE REFERENCE ───────────────────────────────────────────────────────────
//

/// Optional illustration attached to a question.
///
/// The quiz engine never dereferences it; hosts decide how to display it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ImageRef {
    FilePath(PathBuf),
    Url(Url),
}

impl ImageRef {
    pub fn from_file(path: impl Into<PathBuf>) -> Result<Self, MediaValidationError> {
        let p = path.into();
        if p.as_os_str().is_empty() {
            return Err(MediaValidationError::EmptyImageRef);
        }
        Ok(ImageRef::FilePath(p))
    }

    pub fn from_url(url: impl AsRef<str>) -> Result<Self, MediaValidationError> {
        let s = url.as_ref().trim();
        if s.is_empty() {
            return Err(MediaValidationError::EmptyImageRef);
        }
        let u = Url::parse(s).map_err(|_| MediaValidationError::MalformedUrl(s.to_string()))?;
        Ok(ImageRef::Url(u))
    }

    /// Interpret a raw reference as a URL when it carries a scheme, otherwise as a path.
    ///
    /// Site-relative paths like `/images/q1.png` stay paths.
    pub fn parse(raw: impl AsRef<str>) -> Result<Self, MediaValidationError> {
        let s = raw.as_ref().trim();
        if s.is_empty() {
            return Err(MediaValidationError::EmptyImageRef);
        }
        if has_scheme(s) {
            Self::from_url(s)
        } else {
            Self::from_file(s)
        }
    }

    pub fn as_path(&self) -> Option<&Path> {
        match self {
            ImageRef::FilePath(p) => Some(p.as_path()),
            _ => None,
        }
    }

    pub fn as_url(&self) -> Option<&Url> {
        match self {
            ImageRef::Url(u) => Some(u),
            _ => None,
        }
    }
}

impl fmt::Display for ImageRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ImageRef::FilePath(p) => write!(f, "{}", p.display()),
            ImageRef::Url(u) => write!(f, "{u}"),
        }
    }
}

fn has_scheme(s: &str) -> bool {
    let Some((scheme, _)) = s.split_once(':') else {
        return false;
    };
    // Single letters are Windows drive prefixes, not schemes.
    scheme.len() > 1
        && scheme.starts_with(|c: char| c.is_ascii_alphabetic())
        && scheme
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.'))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_reference_is_rejected() {
        assert_eq!(
            ImageRef::parse("   ").unwrap_err(),
            MediaValidationError::EmptyImageRef
        );
        assert_eq!(
            ImageRef::from_file("").unwrap_err(),
            MediaValidationError::EmptyImageRef
        );
    }

    #[test]
    fn scheme_selects_url() {
        let img = ImageRef::parse("https://example.com/a.png").unwrap();
        assert_eq!(img.as_url().unwrap().host_str(), Some("example.com"));
        assert!(img.as_path().is_none());
    }

    #[test]
    fn site_relative_and_drive_paths_stay_paths() {
        let img = ImageRef::parse("/images/q1.png").unwrap();
        assert_eq!(img.as_path(), Some(Path::new("/images/q1.png")));

        let img = ImageRef::parse("C:\\quiz\\q1.png").unwrap();
        assert!(img.as_path().is_some());
    }

    #[test]
    fn malformed_url_is_reported() {
        let err = ImageRef::from_url("http://[::1").unwrap_err();
        assert!(matches!(err, MediaValidationError::MalformedUrl(_)));
    }
}
