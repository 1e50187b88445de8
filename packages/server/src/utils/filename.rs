/// Most filesystems cap a single path component at 255 bytes.
const MAX_FILENAME_BYTES: usize = 255;

/// Why an upload name was refused.
#[derive(Debug, PartialEq, Eq)]
pub enum FilenameError {
    /// Name is empty or whitespace-only.
    Empty,
    /// Name is longer than a filesystem allows.
    TooLong,
    /// Name contains `/` or `\`.
    ContainsPathSeparator,
    /// Name is `..`.
    PathTraversal,
    /// Name contains NUL or another control character.
    ControlCharacter,
    /// Name starts with a dot.
    Hidden,
}

impl FilenameError {
    pub fn message(&self) -> &'static str {
        match self {
            Self::Empty => "Image filename cannot be empty",
            Self::TooLong => "Image filename is too long",
            Self::ContainsPathSeparator => "Image filename must not contain path separators",
            Self::PathTraversal => "Image filename must not be '..'",
            Self::ControlCharacter => "Image filename must not contain control characters",
            Self::Hidden => "Image filename must not start with '.'",
        }
    }
}

/// Check that an upload name stays a single file inside the image directory.
/// Returns the trimmed name.
pub fn validate_image_filename(filename: &str) -> Result<&str, FilenameError> {
    let trimmed = filename.trim();

    if trimmed.is_empty() {
        return Err(FilenameError::Empty);
    }
    if trimmed.len() > MAX_FILENAME_BYTES {
        return Err(FilenameError::TooLong);
    }
    // NUL is a control character too.
    if trimmed.chars().any(char::is_control) {
        return Err(FilenameError::ControlCharacter);
    }
    if trimmed.contains('/') || trimmed.contains('\\') {
        return Err(FilenameError::ContainsPathSeparator);
    }
    if trimmed == ".." {
        return Err(FilenameError::PathTraversal);
    }
    if trimmed.starts_with('.') {
        return Err(FilenameError::Hidden);
    }

    Ok(trimmed)
}
