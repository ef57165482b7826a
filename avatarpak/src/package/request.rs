//! Package request types.

use std::path::PathBuf;

/// User account classification, controlling metadata synthesis.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UserClassification {
    /// Regular local account; no profile metadata is packaged.
    Standard,
    /// Account activated offline; a synthetic `online.json` is packaged.
    ActivatedOffline,
}

/// One avatar conversion job: a source image, the classification and the
/// destination archive path. Immutable; created by the caller and consumed
/// by [`super::build`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackageRequest {
    /// Path of the source raster (PNG or JPEG). Never mutated.
    pub image_path: PathBuf,
    /// Classification of the target account.
    pub classification: UserClassification,
    /// Destination path of the final `.xavatar` archive.
    pub output_path: PathBuf,
}

impl PackageRequest {
    /// Create a new request.
    pub fn new(
        image_path: impl Into<PathBuf>,
        classification: UserClassification,
        output_path: impl Into<PathBuf>,
    ) -> Self {
        Self {
            image_path: image_path.into(),
            classification,
            output_path: output_path.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_holds_paths_verbatim() {
        let request = PackageRequest::new(
            "in/portrait.png",
            UserClassification::Standard,
            "out/portrait.xavatar",
        );
        assert_eq!(request.image_path, PathBuf::from("in/portrait.png"));
        assert_eq!(request.output_path, PathBuf::from("out/portrait.xavatar"));
        assert_eq!(request.classification, UserClassification::Standard);
    }
}
