//! File operations, including the chunked-upload orchestration endpoints.
//!
//! Uploads go through three steps per artifact: `start` hands out a
//! presigned URL, the caller PUTs the data there directly, and `finish`
//! seals the version. `status` reports multipart progress in between.

use reqwest::Method;
use vrchat_types::{File, FileId, FileUploadType, FileUploadUrl, FileVersionUploadStatus};

use crate::client::Client;
use crate::error::Result;
use crate::query::Pagination;

impl Client {
    /// Lists the account's files.
    ///
    /// `GET /files`
    pub async fn get_files(&self, page: Pagination) -> Result<Vec<File>> {
        self.request(Method::GET, "/files", &page.to_query()).await
    }

    /// Creates a file record.
    ///
    /// `POST /file`
    pub async fn create_file(&self) -> Result<File> {
        self.request(Method::POST, "/file", &[]).await
    }

    /// Fetches a file record.
    ///
    /// `GET /file/{fileId}`
    pub async fn get_file(&self, file_id: &FileId) -> Result<File> {
        self.request(Method::GET, &format!("/file/{file_id}"), &[])
            .await
    }

    /// Announces a new version on a file record.
    ///
    /// `POST /file/{fileId}`
    pub async fn create_file_version(&self, file_id: &FileId) -> Result<File> {
        self.request(Method::POST, &format!("/file/{file_id}"), &[])
            .await
    }

    /// Deletes a file record with all its versions.
    ///
    /// `DELETE /file/{fileId}`
    pub async fn delete_file(&self, file_id: &FileId) -> Result<File> {
        self.request(Method::DELETE, &format!("/file/{file_id}"), &[])
            .await
    }

    /// Deletes one version of a file. Only the latest version can be
    /// deleted, and not the initial one.
    ///
    /// `DELETE /file/{fileId}/{versionId}`
    pub async fn delete_file_version(&self, file_id: &FileId, version_id: i64) -> Result<File> {
        self.request(
            Method::DELETE,
            &format!("/file/{file_id}/{version_id}"),
            &[],
        )
        .await
    }

    /// Downloads the raw content of a file version.
    ///
    /// `GET /file/{fileId}/{versionId}`
    pub async fn download_file_version(
        &self,
        file_id: &FileId,
        version_id: i64,
    ) -> Result<Vec<u8>> {
        self.request_bytes(&format!("/file/{file_id}/{version_id}"))
            .await
    }

    /// Seals an upload once all parts are transferred.
    ///
    /// `PUT /file/{fileId}/{versionId}/{fileType}/finish`
    pub async fn finish_file_data_upload(
        &self,
        file_id: &FileId,
        version_id: i64,
        file_type: FileUploadType,
    ) -> Result<File> {
        self.request(
            Method::PUT,
            &format!("/file/{file_id}/{version_id}/{file_type}/finish"),
            &[],
        )
        .await
    }

    /// Requests a presigned URL to upload an artifact to.
    ///
    /// `PUT /file/{fileId}/{versionId}/{fileType}/start`
    pub async fn start_file_data_upload(
        &self,
        file_id: &FileId,
        version_id: i64,
        file_type: FileUploadType,
    ) -> Result<FileUploadUrl> {
        self.request(
            Method::PUT,
            &format!("/file/{file_id}/{version_id}/{file_type}/start"),
            &[],
        )
        .await
    }

    /// Reports the multipart progress of an upload in flight.
    ///
    /// `GET /file/{fileId}/{versionId}/{fileType}/status`
    pub async fn get_file_data_upload_status(
        &self,
        file_id: &FileId,
        version_id: i64,
        file_type: FileUploadType,
    ) -> Result<FileVersionUploadStatus> {
        self.request(
            Method::GET,
            &format!("/file/{file_id}/{version_id}/{file_type}/status"),
            &[],
        )
        .await
    }
}
