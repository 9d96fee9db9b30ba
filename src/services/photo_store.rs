use std::path::{Path, PathBuf};

use async_trait::async_trait;
use base64::{engine::general_purpose::STANDARD, Engine as _};
use chrono::Local;
use thiserror::Error;
use tokio::io::{AsyncWrite, AsyncWriteExt};

const DATA_URL_PREFIX: &str = "data:image";
const DEFAULT_SUBTYPE: &str = "png";
const MAX_NAME_ATTEMPTS: u32 = 16;

/// Reasons a captured photo could not be stored
#[derive(Debug, Error)]
pub enum PhotoError {
    #[error("not an image data URL")]
    NotImageData,
    #[error("data URL has no payload")]
    MissingPayload,
    #[error("unsupported image subtype: {0}")]
    UnsupportedSubtype(String),
    #[error("invalid base64 payload: {0}")]
    Decode(#[from] base64::DecodeError),
    #[error("failed to write photo: {0}")]
    Io(#[from] std::io::Error),
}

impl PhotoError {
    /// True when the input was never a photo, as opposed to a photo that failed to store
    pub fn is_not_a_photo(&self) -> bool {
        matches!(self, PhotoError::NotImageData)
    }
}

/// An image carried inline as `data:image/<subtype>;base64,<payload>`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageDataUrl<'a> {
    /// MIME subtype, used as the file extension
    pub subtype: &'a str,
    pub payload: &'a str,
}

impl<'a> ImageDataUrl<'a> {
    /// Splits a data URL into subtype and payload
    ///
    /// The subtype falls back to `png` when the header does not name one.
    pub fn parse(raw: &'a str) -> Result<Self, PhotoError> {
        if !raw.starts_with(DATA_URL_PREFIX) {
            return Err(PhotoError::NotImageData);
        }

        let (header, payload) = raw.split_once(',').ok_or(PhotoError::MissingPayload)?;

        let subtype = header
            .split("image/")
            .nth(1)
            .and_then(|rest| rest.split(';').next())
            .filter(|subtype| !subtype.is_empty())
            .unwrap_or(DEFAULT_SUBTYPE);

        if !subtype
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '+' || c == '-')
        {
            return Err(PhotoError::UnsupportedSubtype(subtype.to_string()));
        }

        Ok(Self { subtype, payload })
    }

    /// Decodes the base64 payload
    ///
    /// Characters outside the standard alphabet are skipped, so line breaks
    /// and stray symbols do not fail the decode. Padding is still checked.
    pub fn decode(&self) -> Result<Vec<u8>, PhotoError> {
        let cleaned: String = self
            .payload
            .chars()
            .filter(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '/' | '='))
            .collect();
        Ok(STANDARD.decode(cleaned)?)
    }
}

/// Destination for photos captured alongside a questionnaire
///
/// Storing is best-effort: callers treat any error as "no photo".
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait PhotoStore: Send + Sync {
    /// Stores the image in `data_url` and returns where it was written
    async fn save(&self, data_url: &str) -> Result<PathBuf, PhotoError>;
}

/// Writes photos into a local directory under timestamped names
#[derive(Debug, Clone)]
pub struct DiskPhotoStore {
    dir: PathBuf,
}

impl DiskPhotoStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }
}

#[async_trait]
impl PhotoStore for DiskPhotoStore {
    async fn save(&self, data_url: &str) -> Result<PathBuf, PhotoError> {
        let image = ImageDataUrl::parse(data_url)?;
        let bytes = image.decode()?;

        tokio::fs::create_dir_all(&self.dir).await?;

        let stamp = Local::now().format("%Y%m%d_%H%M%S_%6f").to_string();
        let (path, file) = create_unique(&self.dir, &stamp, image.subtype).await?;
        write_or_discard(&path, file, &bytes).await?;

        tracing::debug!(path = %path.display(), size = bytes.len(), "Stored photo");

        Ok(path)
    }
}

/// Opens `<stamp>.<ext>`, or `<stamp>_<n>.<ext>` if that name is taken
async fn create_unique(
    dir: &Path,
    stamp: &str,
    ext: &str,
) -> Result<(PathBuf, tokio::fs::File), PhotoError> {
    let mut attempt = 0u32;
    loop {
        let filename = match attempt {
            0 => format!("{stamp}.{ext}"),
            n => format!("{stamp}_{n}.{ext}"),
        };
        let path = dir.join(filename);

        match tokio::fs::OpenOptions::new()
            .write(true)
            .create_new(true)
            .open(&path)
            .await
        {
            Ok(file) => return Ok((path, file)),
            Err(e)
                if e.kind() == std::io::ErrorKind::AlreadyExists
                    && attempt < MAX_NAME_ATTEMPTS =>
            {
                attempt += 1;
            }
            Err(e) => return Err(e.into()),
        }
    }
}

/// Writes `bytes` to the freshly created `path`, removing it if the write fails
async fn write_or_discard<W>(path: &Path, mut writer: W, bytes: &[u8]) -> Result<(), PhotoError>
where
    W: AsyncWrite + Unpin,
{
    let written = async {
        writer.write_all(bytes).await?;
        writer.flush().await
    }
    .await;
    drop(writer);

    if let Err(e) = written {
        if let Err(remove_err) = tokio::fs::remove_file(path).await {
            tracing::warn!(
                path = %path.display(),
                error = %remove_err,
                "Failed to remove partial photo"
            );
        }
        return Err(e.into());
    }

    Ok(())
}
