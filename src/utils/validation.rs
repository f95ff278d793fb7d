use crate::utils::error::{GalleryError, Result};
use url::Url;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

/// Checks a locator at the CLI boundary before it reaches the model. The
/// model itself treats locators as opaque strings; this is host-side
/// hygiene only. Absolute URIs must carry a fetchable scheme; relative
/// references are accepted as-is.
pub fn validate_locator(field_name: &str, locator: &str) -> Result<()> {
    if locator.is_empty() {
        return Err(GalleryError::InvalidConfigValue {
            field: field_name.to_string(),
            value: locator.to_string(),
            reason: "Locator cannot be empty".to_string(),
        });
    }

    match Url::parse(locator) {
        Ok(url) => match url.scheme() {
            "http" | "https" | "file" => Ok(()),
            scheme => Err(GalleryError::InvalidConfigValue {
                field: field_name.to_string(),
                value: locator.to_string(),
                reason: format!("Unsupported locator scheme: {}", scheme),
            }),
        },
        // A bare path like "photos/cat.jpg" is a valid relative reference.
        Err(url::ParseError::RelativeUrlWithoutBase) => Ok(()),
        Err(e) => Err(GalleryError::InvalidConfigValue {
            field: field_name.to_string(),
            value: locator.to_string(),
            reason: format!("Invalid locator: {}", e),
        }),
    }
}

pub fn validate_path(field_name: &str, path: &str) -> Result<()> {
    if path.is_empty() {
        return Err(GalleryError::InvalidConfigValue {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path cannot be empty".to_string(),
        });
    }

    if path.contains('\0') {
        return Err(GalleryError::InvalidConfigValue {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path contains null bytes".to_string(),
        });
    }

    Ok(())
}

/// The persisted format permits any numeric ratio, but a host feeding the
/// model interactively should not insert cells of zero or negative height.
pub fn validate_ratio(field_name: &str, ratio: f32) -> Result<()> {
    if !ratio.is_finite() || ratio <= 0.0 {
        return Err(GalleryError::InvalidConfigValue {
            field: field_name.to_string(),
            value: ratio.to_string(),
            reason: "Ratio must be a positive finite number".to_string(),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_locator() {
        assert!(validate_locator("url", "https://example.com/cat.jpg").is_ok());
        assert!(validate_locator("url", "file:///tmp/cat.jpg").is_ok());
        assert!(validate_locator("url", "photos/cat.jpg").is_ok());
        assert!(validate_locator("url", "").is_err());
        assert!(validate_locator("url", "ftp://example.com/cat.jpg").is_err());
    }

    #[test]
    fn test_validate_ratio() {
        assert!(validate_ratio("ratio", 0.75).is_ok());
        assert!(validate_ratio("ratio", 0.0).is_err());
        assert!(validate_ratio("ratio", -1.0).is_err());
        assert!(validate_ratio("ratio", f32::NAN).is_err());
    }

    #[test]
    fn test_validate_path() {
        assert!(validate_path("document", "./gallery.json").is_ok());
        assert!(validate_path("document", "").is_err());
        assert!(validate_path("document", "bad\0path").is_err());
    }
}
