use actix_multipart::form::{tempfile::TempFile, MultipartForm};
use serde::{Deserialize, Serialize};

#[derive(Debug, MultipartForm)]
pub struct UploadForm {
    #[multipart(limit = "100MB")]
    pub file: TempFile,
}

#[derive(Clone, Deserialize, Debug)]
pub struct FileUploadQuery {
    pub titulo: Option<String>,
}

#[derive(Clone, Serialize, Debug)]
pub struct FileUploadInfo {
    pub file_path: String,
}
