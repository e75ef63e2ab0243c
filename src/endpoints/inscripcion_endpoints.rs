use actix_web::web::{self, delete, get, post, put, resource};

use super::handlers::rest::inscripcion::{
    actualizar_inscripcion, crear_inscripcion, eliminar_inscripcion, listar_inscripciones,
    listar_pagos_inscripcion, obtener_inscripcion,
};

pub fn inscripcion_config(config: &mut web::ServiceConfig) {
    config
        .service(
            resource("/api/inscripciones")
                .route(get().to(listar_inscripciones))
                .route(post().to(crear_inscripcion)),
        )
        .service(
            resource("/api/inscripciones/{id}")
                .route(get().to(obtener_inscripcion))
                .route(put().to(actualizar_inscripcion))
                .route(delete().to(eliminar_inscripcion)),
        )
        .service(
            resource("/api/inscripciones/{id}/pagos").route(get().to(listar_pagos_inscripcion)),
        );
}
