//! Tests for error formatting and construction helpers

#[cfg(test)]
mod tests {
    use patternize::PatternError;
    use patternize::io::error::{file_system, invalid_color, invalid_parameter};
    use std::error::Error;
    use std::path::PathBuf;

    #[test]
    fn test_invalid_parameter_message() {
        let error = invalid_parameter("spacing", &0, &"must be positive");
        assert_eq!(
            error.to_string(),
            "Invalid parameter 'spacing' = '0': must be positive"
        );
        assert!(error.source().is_none());
    }

    #[test]
    fn test_invalid_color_message() {
        let error = invalid_color("#12", "too short");
        assert!(matches!(error, PatternError::InvalidColor { .. }));
        assert_eq!(error.to_string(), "Invalid color '#12': too short");
    }

    // Tests that wrapped I/O errors keep path, operation and source
    // Verified by dropping the source attribute
    #[test]
    fn test_file_system_wraps_source() {
        let wrap = file_system("out/dir", "create directory");
        let error = wrap(std::io::Error::other("disk full"));

        match &error {
            PatternError::FileSystem {
                path, operation, ..
            } => {
                assert_eq!(path, &PathBuf::from("out/dir"));
                assert_eq!(*operation, "create directory");
            }
            other => unreachable!("Expected FileSystem error, got {other:?}"),
        }
        assert!(error.to_string().contains("create directory"));
        assert!(error.to_string().contains("out/dir"));
        assert_eq!(
            error.source().map(ToString::to_string),
            Some("disk full".to_string())
        );
    }

    #[test]
    fn test_image_decode_reports_length() {
        let source = image::load_from_memory(&[0, 1, 2, 3]).err();
        let Some(source) = source else {
            unreachable!("four bytes are not an image");
        };
        let error = PatternError::ImageDecode { len: 4, source };
        assert!(error.to_string().starts_with("Failed to decode in-memory image (4 bytes)"));
        assert!(error.source().is_some());
    }
}
