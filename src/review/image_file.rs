//! Local image files selected for upload.

use std::fmt;

use camino::Utf8Path;
use cap_std::ambient_authority;
use cap_std::fs_utf8::Dir;

use crate::api::ClientError;

const FALLBACK_CONTENT_TYPE: &str = "application/octet-stream";

/// An image picked from disk, held in memory until it is uploaded.
#[derive(Clone, PartialEq, Eq)]
pub struct ImageFile {
    file_name: String,
    content_type: String,
    bytes: Vec<u8>,
}

impl ImageFile {
    /// Wraps raw bytes with an explicit MIME type.
    #[must_use]
    pub fn new(
        file_name: impl Into<String>,
        content_type: impl Into<String>,
        bytes: Vec<u8>,
    ) -> Self {
        Self {
            file_name: file_name.into(),
            content_type: content_type.into(),
            bytes,
        }
    }

    /// Wraps raw bytes, guessing the MIME type from the file extension.
    #[must_use]
    pub fn from_bytes(file_name: impl Into<String>, bytes: Vec<u8>) -> Self {
        let file_name = file_name.into();
        let content_type = content_type_for(&file_name).to_owned();
        Self {
            file_name,
            content_type,
            bytes,
        }
    }

    /// Reads an image from disk.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Io`] when the path has no file name, the file
    /// cannot be read, or the file is empty.
    pub fn read(path: &Utf8Path) -> Result<Self, ClientError> {
        let file_name = path.file_name().ok_or_else(|| ClientError::Io {
            message: format!("image path '{path}' does not name a file"),
        })?;
        let parent = path
            .parent()
            .filter(|parent| !parent.as_str().is_empty())
            .unwrap_or_else(|| Utf8Path::new("."));

        let dir = Dir::open_ambient_dir(parent, ambient_authority()).map_err(|error| {
            ClientError::Io {
                message: format!("failed to open image directory '{parent}': {error}"),
            }
        })?;
        let bytes = dir.read(file_name).map_err(|error| ClientError::Io {
            message: format!("failed to read image '{path}': {error}"),
        })?;

        if bytes.is_empty() {
            return Err(ClientError::Io {
                message: format!("image '{path}' is empty"),
            });
        }

        Ok(Self::from_bytes(file_name, bytes))
    }

    /// Returns the file name sent with the upload.
    #[must_use]
    pub const fn file_name(&self) -> &str {
        self.file_name.as_str()
    }

    /// Returns the MIME type sent with the upload.
    #[must_use]
    pub const fn content_type(&self) -> &str {
        self.content_type.as_str()
    }

    /// Returns the raw image bytes.
    #[must_use]
    pub const fn bytes(&self) -> &[u8] {
        self.bytes.as_slice()
    }

    /// Returns the image size in bytes.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.bytes.len()
    }

    /// Returns true when the image holds no bytes.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// Consumes the image and returns its bytes.
    #[must_use]
    pub fn into_bytes(self) -> Vec<u8> {
        self.bytes
    }
}

impl fmt::Debug for ImageFile {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("ImageFile")
            .field("file_name", &self.file_name)
            .field("content_type", &self.content_type)
            .field("len", &self.bytes.len())
            .finish()
    }
}

fn content_type_for(file_name: &str) -> &'static str {
    let Some((_, extension)) = file_name.rsplit_once('.') else {
        return FALLBACK_CONTENT_TYPE;
    };

    match extension.to_ascii_lowercase().as_str() {
        "png" => "image/png",
        "jpg" | "jpeg" => "image/jpeg",
        "gif" => "image/gif",
        "webp" => "image/webp",
        "heic" => "image/heic",
        _ => FALLBACK_CONTENT_TYPE,
    }
}
