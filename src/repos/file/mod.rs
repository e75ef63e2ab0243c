use std::sync::Arc;

use aws_sdk_s3::{primitives::ByteStream, Client as S3Client};
use uuid::Uuid;

use crate::models::file::{FileUploadInfo, UploadForm};

/// Sube un archivo de galería al bucket bajo galeria/{uuid}.{ext}
pub async fn subir_archivo_galeria(
    form: UploadForm,
    s3_client: Arc<S3Client>,
    bucket_name: Arc<String>,
) -> Result<FileUploadInfo, String> {
    let extension = form
        .file
        .file_name
        .as_deref()
        .and_then(|nombre| nombre.rsplit_once('.').map(|(_, ext)| ext.to_lowercase()))
        .unwrap_or_else(|| "bin".to_string());

    let file_path = format!("galeria/{}.{}", Uuid::new_v4(), extension);

    // casteo del tempfile de actix al file async que espera el ByteStream
    let file = form.file.file.into_file();
    let body = ByteStream::read_from()
        .file(file.into())
        .build()
        .await
        .map_err(|_| "No se pudo leer el archivo subido".to_string())?;

    match s3_client
        .put_object()
        .bucket(bucket_name.as_str())
        .key(&file_path)
        .body(body)
        .send()
        .await
    {
        Ok(_) => Ok(FileUploadInfo { file_path }),
        Err(e) => {
            log::error!("fallo subiendo a S3: {:?}", e);
            Err("No se pudo subir el archivo".to_string())
        }
    }
}
