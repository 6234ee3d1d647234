use serde::{Deserialize, Serialize};

/// Image subtypes accepted by the upload endpoint.
pub const ALLOWED_IMAGE_TYPES: [&str; 3] = ["jpg", "jpeg", "png"];

#[derive(Deserialize, Debug, Default)]
pub struct PhotoUpload {
    pub image: Option<String>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct PhotoUrl {
    pub url: String,
}
