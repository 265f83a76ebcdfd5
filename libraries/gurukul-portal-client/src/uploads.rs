//! File upload endpoints.
//!
//! The portal stores uploaded assets and hands back a URL the partner can
//! reference from courses, events or their profile.

use crate::client::{parse_envelope, PortalClient};
use crate::error::{PortalClientError, Result};
use crate::types::UploadedFile;
use reqwest::multipart::{Form, Part};
use std::path::Path;
use tokio::fs::File;
use tokio::io::AsyncReadExt;
use tracing::{debug, info};

/// Client for uploading local files to the portal's asset store.
pub struct UploadsClient<'a> {
    portal: &'a PortalClient,
    base_url: String,
    access_token: String,
}

impl<'a> UploadsClient<'a> {
    pub(crate) fn new(portal: &'a PortalClient, base_url: String, access_token: String) -> Self {
        Self {
            portal,
            base_url,
            access_token,
        }
    }

    /// Upload a profile picture.
    pub async fn avatar(&self, file_path: &Path) -> Result<UploadedFile> {
        self.upload("avatar", file_path).await
    }

    /// Upload an event banner image.
    pub async fn event_banner(&self, file_path: &Path) -> Result<UploadedFile> {
        self.upload("event-banner", file_path).await
    }

    /// Upload a course thumbnail image.
    pub async fn course_thumbnail(&self, file_path: &Path) -> Result<UploadedFile> {
        self.upload("course-thumbnail", file_path).await
    }

    /// Upload a course video.
    pub async fn course_video(&self, file_path: &Path) -> Result<UploadedFile> {
        self.upload("course-video", file_path).await
    }

    /// Upload a course study material.
    pub async fn course_material(&self, file_path: &Path) -> Result<UploadedFile> {
        self.upload("course-material", file_path).await
    }

    async fn upload(&self, target: &str, file_path: &Path) -> Result<UploadedFile> {
        if !file_path.exists() {
            return Err(PortalClientError::FileNotFound(
                file_path.display().to_string(),
            ));
        }

        let file_name = file_path
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or("upload")
            .to_string();

        debug!(file = %file_path.display(), target, "Uploading file");

        let mut file = File::open(file_path).await?;
        let mut contents = Vec::new();
        file.read_to_end(&mut contents).await?;

        let file_size = contents.len();

        let file_part = Part::bytes(contents)
            .file_name(file_name.clone())
            .mime_str(mime_type_for_file(file_path))?;

        let form = Form::new().part("file", file_part);

        let url = format!("{}/api/v1/uploads/{}", self.base_url, target);

        let response = self
            .portal
            .http()
            .post(&url)
            .bearer_auth(&self.access_token)
            .multipart(form)
            .send()
            .await?;

        let status = response.status();

        if status.is_success() {
            let uploaded: UploadedFile = parse_envelope(response, "upload").await?;

            info!(
                file = %file_name,
                size = file_size,
                url = %uploaded.url,
                "File uploaded"
            );

            Ok(uploaded)
        } else if status.as_u16() == 413 {
            Err(PortalClientError::ServerError {
                status: 413,
                message: "File too large".to_string(),
            })
        } else {
            Err(self.portal.response_error(response).await)
        }
    }
}

/// Get MIME type for an upload by file extension.
fn mime_type_for_file(path: &Path) -> &'static str {
    match path.extension().and_then(|e| e.to_str()) {
        Some("jpg") | Some("jpeg") => "image/jpeg",
        Some("png") => "image/png",
        Some("webp") => "image/webp",
        Some("gif") => "image/gif",
        Some("mp4") => "video/mp4",
        Some("webm") => "video/webm",
        Some("mov") => "video/quicktime",
        Some("pdf") => "application/pdf",
        Some("doc") => "application/msword",
        Some("docx") => {
            "application/vnd.openxmlformats-officedocument.wordprocessingml.document"
        }
        Some("zip") => "application/zip",
        _ => "application/octet-stream",
    }
}
