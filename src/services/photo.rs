use base64::alphabet;
use base64::engine::{DecodePaddingMode, GeneralPurpose, GeneralPurposeConfig};
use base64::Engine as _;
use log::{error, info};
use rand::RngCore;

use crate::config::PhotoConfig;
use crate::errors::AppError;
use crate::models::photo::{PhotoUrl, ALLOWED_IMAGE_TYPES};

const FILE_NAME_BYTES: usize = 10;

const LENIENT_BASE64: GeneralPurpose = GeneralPurpose::new(
    &alphabet::STANDARD,
    GeneralPurposeConfig::new().with_decode_padding_mode(DecodePaddingMode::Indifferent),
);

/// Stores base64 data-URI images as files and lists what has been stored.
#[derive(Clone)]
pub struct PhotoService {
    config: PhotoConfig,
}

/// Splits `data:image/<subtype>;base64,<data>` into a lower-cased subtype and the raw payload.
fn parse_data_uri(value: &str) -> Option<(String, &str)> {
    let rest = value.strip_prefix("data:image/")?;
    let (subtype, rest) = rest.split_once(';')?;
    if subtype.is_empty()
        || !subtype
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_')
    {
        return None;
    }
    let data = rest.strip_prefix("base64,")?;
    Some((subtype.to_ascii_lowercase(), data))
}

fn random_file_name(extension: &str) -> String {
    let mut bytes = [0u8; FILE_NAME_BYTES];
    rand::thread_rng().fill_bytes(&mut bytes);
    let stem: String = bytes.iter().map(|b| format!("{:02x}", b)).collect();
    format!("{}.{}", stem, extension)
}

impl PhotoService {
    pub fn new(config: PhotoConfig) -> Self {
        Self { config }
    }

    pub async fn upload(&self, image: Option<String>) -> Result<PhotoUrl, AppError> {
        let image =
            image.ok_or_else(|| AppError::InvalidInput("No image data provided".to_string()))?;

        let (image_type, data) = parse_data_uri(&image).ok_or_else(|| {
            AppError::InvalidInput("Did not match data URI with image data".to_string())
        })?;

        if !ALLOWED_IMAGE_TYPES.contains(&image_type.as_str()) {
            return Err(AppError::InvalidInput("Invalid image type".to_string()));
        }

        // Line-wrapped payloads are accepted.
        let data: String = data.chars().filter(|c| !c.is_ascii_whitespace()).collect();
        let bytes = LENIENT_BASE64
            .decode(data.as_bytes())
            .map_err(|_| AppError::InvalidInput("Base64 decode failed".to_string()))?;

        let file_name = random_file_name(&image_type);

        tokio::fs::create_dir_all(&self.config.directory)
            .await
            .map_err(|err| {
                error!(
                    "Cannot create photos directory {}: {}",
                    self.config.directory.display(),
                    err
                );
                AppError::InternalServerError("Failed to create directory for photos".to_string())
            })?;

        let path = self.config.directory.join(&file_name);
        tokio::fs::write(&path, &bytes)
            .await
            .map_err(|err| AppError::FileSystemError(format!("Failed to save image: {}", err)))?;

        info!("Stored photo {} ({} bytes)", file_name, bytes.len());
        Ok(PhotoUrl { url: self.config.url_for(&file_name) })
    }

    /// Entries come back in directory enumeration order, which is not sorted.
    pub async fn list(&self) -> Result<Vec<PhotoUrl>, AppError> {
        let is_dir = tokio::fs::metadata(&self.config.directory)
            .await
            .map(|meta| meta.is_dir())
            .unwrap_or(false);
        if !is_dir {
            return Err(AppError::InternalServerError(
                "Photos directory does not exist".to_string(),
            ));
        }

        let mut entries = tokio::fs::read_dir(&self.config.directory).await?;
        let mut photos = Vec::new();
        while let Some(entry) = entries.next_entry().await? {
            let name = entry.file_name();
            photos.push(PhotoUrl { url: self.config.url_for(&name.to_string_lossy()) });
        }
        Ok(photos)
    }
}
