//! File records and the chunked-upload vocabulary.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::UnknownWireValue;
use crate::ids::{FileId, UserId};

/// MIME types the file API accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MimeType {
    /// JPEG image.
    #[serde(rename = "image/jpeg")]
    ImageJpeg,
    /// JPEG image, legacy spelling.
    #[serde(rename = "image/jpg")]
    ImageJpg,
    /// PNG image.
    #[serde(rename = "image/png")]
    ImagePng,
    /// WebP image.
    #[serde(rename = "image/webp")]
    ImageWebp,
    /// GIF image.
    #[serde(rename = "image/gif")]
    ImageGif,
    /// BMP image.
    #[serde(rename = "image/bmp")]
    ImageBmp,
    /// SVG image.
    #[serde(rename = "image/svg+xml")]
    ImageSvgXml,
    /// TIFF image.
    #[serde(rename = "image/tiff")]
    ImageTiff,
    /// Avatar asset bundle.
    #[serde(rename = "application/x-avatar")]
    ApplicationAvatar,
    /// World asset bundle.
    #[serde(rename = "application/x-world")]
    ApplicationWorld,
    /// Gzip archive.
    #[serde(rename = "application/gzip")]
    ApplicationGzip,
    /// Rsync signature used for delta uploads.
    #[serde(rename = "application/x-rsync-signature")]
    ApplicationRsyncSignature,
    /// Rsync delta used for delta uploads.
    #[serde(rename = "application/x-rsync-delta")]
    ApplicationRsyncDelta,
    /// Arbitrary binary data.
    #[serde(rename = "application/octet-stream")]
    ApplicationOctetStream,
}

/// Server-side state of a file or file version.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FileStatus {
    /// Upload expected but not started.
    Waiting,
    /// Fully uploaded and processed.
    Complete,
    /// No data attached.
    None,
    /// Queued for processing.
    Queued,
}

/// Which artifact of a file version an upload operation addresses. Appears
/// as a literal path segment in the upload endpoints.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FileUploadType {
    /// The file content itself.
    File,
    /// The rsync signature.
    Signature,
    /// The rsync delta against the previous version.
    Delta,
}

impl FileUploadType {
    /// Returns the wire string.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::File => "file",
            Self::Signature => "signature",
            Self::Delta => "delta",
        }
    }
}

impl fmt::Display for FileUploadType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FileUploadType {
    type Err = UnknownWireValue;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "file" => Ok(Self::File),
            "signature" => Ok(Self::Signature),
            "delta" => Ok(Self::Delta),
            other => Err(UnknownWireValue::new("file upload type", other)),
        }
    }
}

/// One artifact (content, signature or delta) of a file version.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FileData {
    /// Storage category.
    pub category: String,
    /// Stored file name.
    pub file_name: String,
    /// Content MD5, base64-encoded.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub md5: Option<String>,
    /// Content size in bytes.
    pub size_in_bytes: i64,
    /// Upload state.
    pub status: FileStatus,
    /// Multipart upload session ID.
    pub upload_id: String,
    /// Download URL.
    pub url: String,
}

/// One version of a file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FileVersion {
    /// When the version was created.
    #[serde(rename = "created_at")]
    pub created_at: DateTime<Utc>,
    /// Present (and true) only on deleted versions.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub deleted: Option<bool>,
    /// Delta artifact.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub delta: Option<FileData>,
    /// Content artifact.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file: Option<FileData>,
    /// Signature artifact.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub signature: Option<FileData>,
    /// Version state.
    pub status: FileStatus,
    /// Version number; only ever increases.
    pub version: i64,
}

/// A file record with its version history.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct File {
    /// File extension including the leading dot.
    pub extension: String,
    /// File ID.
    pub id: FileId,
    /// Declared MIME type.
    pub mime_type: MimeType,
    /// Display name.
    pub name: String,
    /// Owner's user ID.
    pub owner_id: UserId,
    /// File tags.
    pub tags: Vec<String>,
    /// Version history, oldest first.
    pub versions: Vec<FileVersion>,
}

/// Body for `POST /file`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateFileRequest {
    /// File extension including the leading dot.
    pub extension: String,
    /// Declared MIME type.
    pub mime_type: MimeType,
    /// Display name.
    pub name: String,
    /// File tags.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
}

/// Body for `POST /file/{fileId}`, announcing a new version.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct CreateFileVersionRequest {
    /// MD5 of the content, base64-encoded.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file_md5: Option<String>,
    /// Content size in bytes.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file_size_in_bytes: Option<f64>,
    /// MD5 of the rsync signature, base64-encoded.
    pub signature_md5: String,
    /// Signature size in bytes.
    pub signature_size_in_bytes: f64,
}

/// Body for the upload `finish` endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FinishFileDataUploadRequest {
    /// ETags of the uploaded parts.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub etags: Option<Vec<String>>,
    /// Always the string `"0"` regardless of part count.
    pub max_parts: String,
    /// Always the string `"0"` regardless of part count.
    pub next_part_number: String,
}

/// Presigned URL returned by the upload `start` endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileUploadUrl {
    /// Where to PUT the data.
    pub url: String,
}

/// Progress of a multipart upload, from the `status` endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FileVersionUploadStatus {
    /// ETags collected so far.
    pub etags: Vec<serde_json::Value>,
    /// Stored file name.
    pub file_name: String,
    /// Maximum number of parts.
    pub max_parts: f64,
    /// Next part index to upload.
    pub next_part_number: f64,
    /// Parts uploaded so far.
    pub parts: Vec<serde_json::Value>,
    /// Multipart upload session ID.
    pub upload_id: String,
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_file_upload_type_path_segments() {
        assert_eq!(FileUploadType::File.to_string(), "file");
        assert_eq!(FileUploadType::Signature.to_string(), "signature");
        assert_eq!(FileUploadType::Delta.to_string(), "delta");
    }

    #[test]
    fn test_mime_type_wire_strings() {
        assert_eq!(
            serde_json::to_string(&MimeType::ApplicationAvatar).unwrap(),
            "\"application/x-avatar\""
        );
        assert_eq!(
            serde_json::from_str::<MimeType>("\"image/png\"").unwrap(),
            MimeType::ImagePng
        );
    }

    #[test]
    fn test_file_deserializes() {
        let json = r#"{
            "extension": ".vrca",
            "id": "file_1",
            "mimeType": "application/x-avatar",
            "name": "Robot avatar",
            "ownerId": "usr_1",
            "tags": [],
            "versions": [{
                "created_at": "2023-04-01T12:00:00.000Z",
                "status": "complete",
                "version": 1
            }]
        }"#;
        let file: File = serde_json::from_str(json).unwrap();
        assert_eq!(file.versions.len(), 1);
        assert_eq!(file.versions[0].status, FileStatus::Complete);
        assert_eq!(file.versions[0].file, None);
    }
}
