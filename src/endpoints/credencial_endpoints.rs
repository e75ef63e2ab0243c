use actix_web::web::{self, delete, get, post, put, resource};

use super::handlers::rest::credencial::{
    actualizar_credencial, actualizar_estados, crear_credencial, eliminar_credencial,
    listar_credenciales, obtener_credencial,
};

pub fn credencial_config(config: &mut web::ServiceConfig) {
    config
        .service(
            resource("/api/credenciales-pastorales")
                .route(get().to(listar_credenciales))
                .route(post().to(crear_credencial)),
        )
        // registrado antes de {id} para que "actualizar-estados" no matchee como id
        .service(
            resource("/api/credenciales-pastorales/actualizar-estados")
                .route(post().to(actualizar_estados)),
        )
        .service(
            resource("/api/credenciales-pastorales/{id}")
                .route(get().to(obtener_credencial))
                .route(put().to(actualizar_credencial))
                .route(delete().to(eliminar_credencial)),
        );
}
