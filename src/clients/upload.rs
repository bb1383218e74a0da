//! Image uploads.
//!
//! Only a fixed set of image types is accepted. The check is made on the
//! file extension when the upload is constructed, so an unsupported file is
//! rejected before any network call.

use std::path::Path;

use crate::clients::errors::{HttpError, InvalidHttpRequestError};

/// Image formats accepted by the images endpoint.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ImageType {
    /// `.jpg` / `.jpeg`
    Jpeg,
    /// `.png`
    Png,
    /// `.gif`
    Gif,
    /// `.webp`
    Webp,
}

impl ImageType {
    /// Resolves the image type from a file name's extension (case-insensitive).
    #[must_use]
    pub fn from_file_name(file_name: &str) -> Option<Self> {
        let (_, extension) = file_name.rsplit_once('.')?;
        match extension.to_ascii_lowercase().as_str() {
            "jpg" | "jpeg" => Some(Self::Jpeg),
            "png" => Some(Self::Png),
            "gif" => Some(Self::Gif),
            "webp" => Some(Self::Webp),
            _ => None,
        }
    }

    /// Returns the MIME type sent with the multipart part.
    #[must_use]
    pub const fn mime(&self) -> &'static str {
        match self {
            Self::Jpeg => "image/jpeg",
            Self::Png => "image/png",
            Self::Gif => "image/gif",
            Self::Webp => "image/webp",
        }
    }
}

/// An image file ready to be sent as multipart form data.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ImageUpload {
    file_name: String,
    image_type: ImageType,
    bytes: Vec<u8>,
}

impl ImageUpload {
    /// Multipart field name carrying the file.
    pub const FIELD_NAME: &'static str = "file";

    /// Creates an upload from in-memory bytes.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidHttpRequestError::UnsupportedImageType`] when the file
    /// extension is not one of `jpg, jpeg, gif, png, webp`.
    pub fn new(
        file_name: impl Into<String>,
        bytes: Vec<u8>,
    ) -> Result<Self, InvalidHttpRequestError> {
        let file_name = file_name.into();
        let image_type = ImageType::from_file_name(&file_name).ok_or_else(|| {
            InvalidHttpRequestError::UnsupportedImageType {
                file_name: file_name.clone(),
            }
        })?;

        Ok(Self {
            file_name,
            image_type,
            bytes,
        })
    }

    /// Reads an image from disk.
    ///
    /// The extension is validated before the file is opened.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError::InvalidRequest`] for unsupported extensions and
    /// [`HttpError::Io`] if the file cannot be read.
    pub async fn from_path(path: impl AsRef<Path>) -> Result<Self, HttpError> {
        let path = path.as_ref();
        let file_name = path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_default();

        if ImageType::from_file_name(&file_name).is_none() {
            return Err(InvalidHttpRequestError::UnsupportedImageType { file_name }.into());
        }

        let bytes = tokio::fs::read(path).await?;
        Ok(Self::new(file_name, bytes)?)
    }

    /// Returns the file name sent with the upload.
    #[must_use]
    pub fn file_name(&self) -> &str {
        &self.file_name
    }

    /// Returns the detected image type.
    #[must_use]
    pub const fn image_type(&self) -> ImageType {
        self.image_type
    }

    /// Returns the raw file contents.
    #[must_use]
    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }
}
