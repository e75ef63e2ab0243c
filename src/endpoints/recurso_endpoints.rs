use actix_web::web::{self, delete, get, post, put, resource};

use super::handlers::rest::recurso::{
    actualizar_convencion, actualizar_noticia, actualizar_pastor, crear_convencion,
    crear_galeria_item, crear_noticia, crear_notificacion, crear_pastor, eliminar_convencion,
    eliminar_galeria_item, eliminar_noticia, eliminar_notificacion, eliminar_pastor,
    listar_convenciones, listar_galeria, listar_noticias, listar_notificaciones, listar_pastores,
    marcar_notificacion_leida, obtener_convencion, obtener_galeria_item, obtener_noticia,
    obtener_notificacion, obtener_pastor,
};

pub fn recurso_config(config: &mut web::ServiceConfig) {
    config
        .service(
            resource("/api/pastores")
                .route(get().to(listar_pastores))
                .route(post().to(crear_pastor)),
        )
        .service(
            resource("/api/pastores/{id}")
                .route(get().to(obtener_pastor))
                .route(put().to(actualizar_pastor))
                .route(delete().to(eliminar_pastor)),
        )
        .service(
            resource("/api/convenciones")
                .route(get().to(listar_convenciones))
                .route(post().to(crear_convencion)),
        )
        .service(
            resource("/api/convenciones/{id}")
                .route(get().to(obtener_convencion))
                .route(put().to(actualizar_convencion))
                .route(delete().to(eliminar_convencion)),
        )
        .service(
            resource("/api/noticias")
                .route(get().to(listar_noticias))
                .route(post().to(crear_noticia)),
        )
        .service(
            resource("/api/noticias/{id}")
                .route(get().to(obtener_noticia))
                .route(put().to(actualizar_noticia))
                .route(delete().to(eliminar_noticia)),
        )
        .service(
            resource("/api/notificaciones")
                .route(get().to(listar_notificaciones))
                .route(post().to(crear_notificacion)),
        )
        .service(
            resource("/api/notificaciones/{id}/leida")
                .route(put().to(marcar_notificacion_leida)),
        )
        .service(
            resource("/api/notificaciones/{id}")
                .route(get().to(obtener_notificacion))
                .route(delete().to(eliminar_notificacion)),
        )
        .service(
            resource("/api/galeria")
                .route(get().to(listar_galeria))
                .route(post().to(crear_galeria_item)),
        )
        .service(
            resource("/api/galeria/{id}")
                .route(get().to(obtener_galeria_item))
                .route(delete().to(eliminar_galeria_item)),
        );
}
