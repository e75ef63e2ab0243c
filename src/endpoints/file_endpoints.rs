use actix_web::web::{post, resource, Data, ServiceConfig};
use aws_sdk_s3::Client as S3Client;

use crate::endpoints::handlers::rest::file::subir_media_galeria;

pub fn file_endpoints(config: &mut ServiceConfig, s3_client: S3Client, bucket_name: String) {
    config
        .app_data(Data::new(s3_client))
        .app_data(Data::new(bucket_name))
        .service(resource("/api/galeria/archivo").route(post().to(subir_media_galeria)));
}
