use actix_web::{
    web::{Data, Json, Path, Query},
    HttpRequest, HttpResponse,
};
use r2d2::Pool;
use redis::Client;
use serde::Deserialize;

use crate::{
    config::JwtSecret,
    models::{
        recursos::{
            NuevaConvencion, NuevaNotificacion, NuevaNoticia, NuevoGaleriaItem, NuevoPastor,
        },
        StatusMessage,
    },
    repos::{
        auth::utils::requiere_jwt,
        recurso::{
            convencion::ConvencionRepo, galeria::GaleriaRepo, noticia::NoticiaRepo,
            notificacion::NotificacionRepo, pastor::PastorRepo,
        },
    },
};

fn error_interno(message: String) -> HttpResponse {
    HttpResponse::InternalServerError().json(StatusMessage { message })
}

fn no_encontrado(recurso: &str, id: &str) -> HttpResponse {
    HttpResponse::NotFound().json(StatusMessage {
        message: format!("No existe {} {}", recurso, id),
    })
}

// --- Pastores ---

pub async fn listar_pastores(pool: Data<Pool<Client>>) -> HttpResponse {
    let repo = PastorRepo { pool };
    match repo.listar() {
        Ok(pastores) => HttpResponse::Ok().json(pastores),
        Err(message) => error_interno(message),
    }
}

pub async fn obtener_pastor(id: Path<String>, pool: Data<Pool<Client>>) -> HttpResponse {
    let repo = PastorRepo { pool };
    match repo.obtener(&id) {
        Ok(Some(pastor)) => HttpResponse::Ok().json(pastor),
        Ok(None) => no_encontrado("el pastor", &id),
        Err(message) => error_interno(message),
    }
}

pub async fn crear_pastor(
    req: HttpRequest,
    secret: Data<JwtSecret>,
    body: Json<NuevoPastor>,
    pool: Data<Pool<Client>>,
) -> HttpResponse {
    if let Err(err) = requiere_jwt(&req, &secret.0) {
        return HttpResponse::Unauthorized().json(err);
    }

    let repo = PastorRepo { pool };
    match repo.crear(body.into_inner()) {
        Ok(pastor) => HttpResponse::Created().json(pastor),
        Err(message) => error_interno(message),
    }
}

pub async fn actualizar_pastor(
    req: HttpRequest,
    secret: Data<JwtSecret>,
    id: Path<String>,
    body: Json<NuevoPastor>,
    pool: Data<Pool<Client>>,
) -> HttpResponse {
    if let Err(err) = requiere_jwt(&req, &secret.0) {
        return HttpResponse::Unauthorized().json(err);
    }

    let repo = PastorRepo { pool };
    match repo.actualizar(&id, body.into_inner()) {
        Ok(Some(pastor)) => HttpResponse::Ok().json(pastor),
        Ok(None) => no_encontrado("el pastor", &id),
        Err(message) => error_interno(message),
    }
}

pub async fn eliminar_pastor(
    req: HttpRequest,
    secret: Data<JwtSecret>,
    id: Path<String>,
    pool: Data<Pool<Client>>,
) -> HttpResponse {
    if let Err(err) = requiere_jwt(&req, &secret.0) {
        return HttpResponse::Unauthorized().json(err);
    }

    let repo = PastorRepo { pool };
    match repo.eliminar(&id) {
        Ok(true) => HttpResponse::Ok().json(StatusMessage {
            message: "Pastor eliminado".to_string(),
        }),
        Ok(false) => no_encontrado("el pastor", &id),
        Err(message) => error_interno(message),
    }
}

// --- Convenciones ---

pub async fn listar_convenciones(pool: Data<Pool<Client>>) -> HttpResponse {
    let repo = ConvencionRepo { pool };
    match repo.listar() {
        Ok(convenciones) => HttpResponse::Ok().json(convenciones),
        Err(message) => error_interno(message),
    }
}

pub async fn obtener_convencion(id: Path<String>, pool: Data<Pool<Client>>) -> HttpResponse {
    let repo = ConvencionRepo { pool };
    match repo.obtener(&id) {
        Ok(Some(convencion)) => HttpResponse::Ok().json(convencion),
        Ok(None) => no_encontrado("la convención", &id),
        Err(message) => error_interno(message),
    }
}

pub async fn crear_convencion(
    req: HttpRequest,
    secret: Data<JwtSecret>,
    body: Json<NuevaConvencion>,
    pool: Data<Pool<Client>>,
) -> HttpResponse {
    if let Err(err) = requiere_jwt(&req, &secret.0) {
        return HttpResponse::Unauthorized().json(err);
    }

    let repo = ConvencionRepo { pool };
    match repo.crear(body.into_inner()) {
        Ok(convencion) => HttpResponse::Created().json(convencion),
        Err(message) => error_interno(message),
    }
}

pub async fn actualizar_convencion(
    req: HttpRequest,
    secret: Data<JwtSecret>,
    id: Path<String>,
    body: Json<NuevaConvencion>,
    pool: Data<Pool<Client>>,
) -> HttpResponse {
    if let Err(err) = requiere_jwt(&req, &secret.0) {
        return HttpResponse::Unauthorized().json(err);
    }

    let repo = ConvencionRepo { pool };
    match repo.actualizar(&id, body.into_inner()) {
        Ok(Some(convencion)) => HttpResponse::Ok().json(convencion),
        Ok(None) => no_encontrado("la convención", &id),
        Err(message) => error_interno(message),
    }
}

pub async fn eliminar_convencion(
    req: HttpRequest,
    secret: Data<JwtSecret>,
    id: Path<String>,
    pool: Data<Pool<Client>>,
) -> HttpResponse {
    if let Err(err) = requiere_jwt(&req, &secret.0) {
        return HttpResponse::Unauthorized().json(err);
    }

    let repo = ConvencionRepo { pool };
    match repo.eliminar(&id) {
        Ok(true) => HttpResponse::Ok().json(StatusMessage {
            message: "Convención eliminada".to_string(),
        }),
        Ok(false) => no_encontrado("la convención", &id),
        Err(message) => error_interno(message),
    }
}

// --- Noticias ---

#[derive(Deserialize)]
pub struct NoticiasQuery {
    pub publicadas: Option<bool>,
}

pub async fn listar_noticias(
    query: Query<NoticiasQuery>,
    pool: Data<Pool<Client>>,
) -> HttpResponse {
    let repo = NoticiaRepo { pool };
    match repo.listar(query.publicadas.unwrap_or(false)) {
        Ok(noticias) => HttpResponse::Ok().json(noticias),
        Err(message) => error_interno(message),
    }
}

pub async fn obtener_noticia(id: Path<String>, pool: Data<Pool<Client>>) -> HttpResponse {
    let repo = NoticiaRepo { pool };
    match repo.obtener(&id) {
        Ok(Some(noticia)) => HttpResponse::Ok().json(noticia),
        Ok(None) => no_encontrado("la noticia", &id),
        Err(message) => error_interno(message),
    }
}

pub async fn crear_noticia(
    req: HttpRequest,
    secret: Data<JwtSecret>,
    body: Json<NuevaNoticia>,
    pool: Data<Pool<Client>>,
) -> HttpResponse {
    if let Err(err) = requiere_jwt(&req, &secret.0) {
        return HttpResponse::Unauthorized().json(err);
    }

    let repo = NoticiaRepo { pool };
    match repo.crear(body.into_inner()) {
        Ok(noticia) => HttpResponse::Created().json(noticia),
        Err(message) => error_interno(message),
    }
}

pub async fn actualizar_noticia(
    req: HttpRequest,
    secret: Data<JwtSecret>,
    id: Path<String>,
    body: Json<NuevaNoticia>,
    pool: Data<Pool<Client>>,
) -> HttpResponse {
    if let Err(err) = requiere_jwt(&req, &secret.0) {
        return HttpResponse::Unauthorized().json(err);
    }

    let repo = NoticiaRepo { pool };
    match repo.actualizar(&id, body.into_inner()) {
        Ok(Some(noticia)) => HttpResponse::Ok().json(noticia),
        Ok(None) => no_encontrado("la noticia", &id),
        Err(message) => error_interno(message),
    }
}

pub async fn eliminar_noticia(
    req: HttpRequest,
    secret: Data<JwtSecret>,
    id: Path<String>,
    pool: Data<Pool<Client>>,
) -> HttpResponse {
    if let Err(err) = requiere_jwt(&req, &secret.0) {
        return HttpResponse::Unauthorized().json(err);
    }

    let repo = NoticiaRepo { pool };
    match repo.eliminar(&id) {
        Ok(true) => HttpResponse::Ok().json(StatusMessage {
            message: "Noticia eliminada".to_string(),
        }),
        Ok(false) => no_encontrado("la noticia", &id),
        Err(message) => error_interno(message),
    }
}

// --- Notificaciones ---

pub async fn listar_notificaciones(pool: Data<Pool<Client>>) -> HttpResponse {
    let repo = NotificacionRepo { pool };
    match repo.listar() {
        Ok(notificaciones) => HttpResponse::Ok().json(notificaciones),
        Err(message) => error_interno(message),
    }
}

pub async fn obtener_notificacion(id: Path<String>, pool: Data<Pool<Client>>) -> HttpResponse {
    let repo = NotificacionRepo { pool };
    match repo.obtener(&id) {
        Ok(Some(notificacion)) => HttpResponse::Ok().json(notificacion),
        Ok(None) => no_encontrado("la notificación", &id),
        Err(message) => error_interno(message),
    }
}

pub async fn crear_notificacion(
    req: HttpRequest,
    secret: Data<JwtSecret>,
    body: Json<NuevaNotificacion>,
    pool: Data<Pool<Client>>,
) -> HttpResponse {
    if let Err(err) = requiere_jwt(&req, &secret.0) {
        return HttpResponse::Unauthorized().json(err);
    }

    let repo = NotificacionRepo { pool };
    match repo.crear(body.into_inner()) {
        Ok(notificacion) => HttpResponse::Created().json(notificacion),
        Err(message) => error_interno(message),
    }
}

pub async fn marcar_notificacion_leida(
    req: HttpRequest,
    secret: Data<JwtSecret>,
    id: Path<String>,
    pool: Data<Pool<Client>>,
) -> HttpResponse {
    if let Err(err) = requiere_jwt(&req, &secret.0) {
        return HttpResponse::Unauthorized().json(err);
    }

    let repo = NotificacionRepo { pool };
    match repo.marcar_leida(&id) {
        Ok(Some(notificacion)) => HttpResponse::Ok().json(notificacion),
        Ok(None) => no_encontrado("la notificación", &id),
        Err(message) => error_interno(message),
    }
}

pub async fn eliminar_notificacion(
    req: HttpRequest,
    secret: Data<JwtSecret>,
    id: Path<String>,
    pool: Data<Pool<Client>>,
) -> HttpResponse {
    if let Err(err) = requiere_jwt(&req, &secret.0) {
        return HttpResponse::Unauthorized().json(err);
    }

    let repo = NotificacionRepo { pool };
    match repo.eliminar(&id) {
        Ok(true) => HttpResponse::Ok().json(StatusMessage {
            message: "Notificación eliminada".to_string(),
        }),
        Ok(false) => no_encontrado("la notificación", &id),
        Err(message) => error_interno(message),
    }
}

// --- Galería (los items; la subida del archivo vive en rest/file.rs) ---

#[derive(Deserialize)]
pub struct GaleriaQuery {
    pub convencion_id: Option<String>,
}

pub async fn listar_galeria(query: Query<GaleriaQuery>, pool: Data<Pool<Client>>) -> HttpResponse {
    let repo = GaleriaRepo { pool };
    match repo.listar(query.convencion_id.as_deref()) {
        Ok(items) => HttpResponse::Ok().json(items),
        Err(message) => error_interno(message),
    }
}

pub async fn obtener_galeria_item(id: Path<String>, pool: Data<Pool<Client>>) -> HttpResponse {
    let repo = GaleriaRepo { pool };
    match repo.obtener(&id) {
        Ok(Some(item)) => HttpResponse::Ok().json(item),
        Ok(None) => no_encontrado("el item de galería", &id),
        Err(message) => error_interno(message),
    }
}

pub async fn crear_galeria_item(
    req: HttpRequest,
    secret: Data<JwtSecret>,
    body: Json<NuevoGaleriaItem>,
    pool: Data<Pool<Client>>,
) -> HttpResponse {
    if let Err(err) = requiere_jwt(&req, &secret.0) {
        return HttpResponse::Unauthorized().json(err);
    }

    let repo = GaleriaRepo { pool };
    match repo.crear(body.into_inner()) {
        Ok(item) => HttpResponse::Created().json(item),
        Err(message) => error_interno(message),
    }
}

pub async fn eliminar_galeria_item(
    req: HttpRequest,
    secret: Data<JwtSecret>,
    id: Path<String>,
    pool: Data<Pool<Client>>,
) -> HttpResponse {
    if let Err(err) = requiere_jwt(&req, &secret.0) {
        return HttpResponse::Unauthorized().json(err);
    }

    let repo = GaleriaRepo { pool };
    match repo.eliminar(&id) {
        Ok(true) => HttpResponse::Ok().json(StatusMessage {
            message: "Item de galería eliminado".to_string(),
        }),
        Ok(false) => no_encontrado("el item de galería", &id),
        Err(message) => error_interno(message),
    }
}
