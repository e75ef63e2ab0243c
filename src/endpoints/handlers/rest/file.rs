use actix_multipart::form::MultipartForm;
use actix_web::{
    web::{Data, Query},
    HttpRequest, HttpResponse,
};
use aws_sdk_s3::Client as S3Client;
use r2d2::Pool;
use redis::Client;

use crate::{
    config::JwtSecret,
    models::{
        file::{FileUploadQuery, UploadForm},
        recursos::NuevoGaleriaItem,
        StatusMessage,
    },
    repos::{auth::utils::requiere_jwt, file::subir_archivo_galeria, recurso::galeria::GaleriaRepo},
};

/// Sube el archivo al bucket; si viene ?titulo= se crea de una el item de
/// galería que lo referencia.
pub async fn subir_media_galeria(
    req: HttpRequest,
    secret: Data<JwtSecret>,
    MultipartForm(form): MultipartForm<UploadForm>,
    query: Query<FileUploadQuery>,
    s3_client: Data<S3Client>,
    bucket_name: Data<String>,
    pool: Data<Pool<Client>>,
) -> HttpResponse {
    if let Err(err) = requiere_jwt(&req, &secret.0) {
        return HttpResponse::Unauthorized().json(err);
    }

    let subido = match subir_archivo_galeria(
        form,
        s3_client.into_inner(),
        bucket_name.into_inner(),
    )
    .await
    {
        Ok(subido) => subido,
        Err(message) => {
            return HttpResponse::InternalServerError().json(StatusMessage { message })
        }
    };

    if let Some(titulo) = query.into_inner().titulo {
        let repo = GaleriaRepo { pool };
        return match repo.crear(NuevoGaleriaItem {
            titulo,
            convencion_id: None,
            archivo_path: subido.file_path.clone(),
        }) {
            Ok(item) => HttpResponse::Created().json(item),
            Err(message) => HttpResponse::InternalServerError().json(StatusMessage { message }),
        };
    }

    HttpResponse::Ok().json(subido)
}
