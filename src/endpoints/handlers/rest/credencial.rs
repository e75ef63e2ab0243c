use actix_web::{
    web::{Data, Json, Path, Query},
    HttpRequest, HttpResponse,
};
use r2d2::Pool;
use redis::Client;
use serde::{Deserialize, Serialize};

use crate::{
    config::{JwtSecret, VentanaPorVencer},
    models::{
        credencial::{EstadoCredencial, NuevaCredencial, ResumenActualizacion},
        StatusMessage,
    },
    repos::{
        auth::utils::requiere_jwt, credencial::CredencialRepo,
        recurso::notificacion::NotificacionRepo,
    },
};

fn repo(pool: Data<Pool<Client>>, ventana: Data<VentanaPorVencer>) -> CredencialRepo {
    CredencialRepo {
        pool,
        dias_por_vencer: ventana.0,
    }
}

#[derive(Deserialize)]
pub struct CredencialesQuery {
    pub estado: Option<String>,
    pub pastor_id: Option<String>,
}

pub async fn listar_credenciales(
    query: Query<CredencialesQuery>,
    pool: Data<Pool<Client>>,
    ventana: Data<VentanaPorVencer>,
) -> HttpResponse {
    let repo = repo(pool, ventana);

    let resultado = if let Some(pastor_id) = &query.pastor_id {
        repo.listar_por_pastor(pastor_id)
    } else if let Some(estado) = &query.estado {
        match EstadoCredencial::desde_str(estado) {
            Some(estado) => repo.listar_por_estado(estado),
            None => {
                return HttpResponse::BadRequest().json(StatusMessage {
                    message: format!("Estado desconocido: {}", estado),
                })
            }
        }
    } else {
        repo.listar()
    };

    match resultado {
        Ok(credenciales) => HttpResponse::Ok().json(credenciales),
        Err(message) => HttpResponse::InternalServerError().json(StatusMessage { message }),
    }
}

pub async fn obtener_credencial(
    id: Path<String>,
    pool: Data<Pool<Client>>,
    ventana: Data<VentanaPorVencer>,
) -> HttpResponse {
    match repo(pool, ventana).obtener(&id) {
        Ok(Some(credencial)) => HttpResponse::Ok().json(credencial),
        Ok(None) => HttpResponse::NotFound().json(StatusMessage {
            message: format!("No existe la credencial {}", id),
        }),
        Err(message) => HttpResponse::InternalServerError().json(StatusMessage { message }),
    }
}

pub async fn crear_credencial(
    req: HttpRequest,
    secret: Data<JwtSecret>,
    body: Json<NuevaCredencial>,
    pool: Data<Pool<Client>>,
    ventana: Data<VentanaPorVencer>,
) -> HttpResponse {
    if let Err(err) = requiere_jwt(&req, &secret.0) {
        return HttpResponse::Unauthorized().json(err);
    }

    match repo(pool, ventana).crear(body.into_inner()) {
        Ok(credencial) => HttpResponse::Created().json(credencial),
        Err(message) => HttpResponse::InternalServerError().json(StatusMessage { message }),
    }
}

pub async fn actualizar_credencial(
    req: HttpRequest,
    secret: Data<JwtSecret>,
    id: Path<String>,
    body: Json<NuevaCredencial>,
    pool: Data<Pool<Client>>,
    ventana: Data<VentanaPorVencer>,
) -> HttpResponse {
    if let Err(err) = requiere_jwt(&req, &secret.0) {
        return HttpResponse::Unauthorized().json(err);
    }

    match repo(pool, ventana).actualizar(&id, body.into_inner()) {
        Ok(Some(credencial)) => HttpResponse::Ok().json(credencial),
        Ok(None) => HttpResponse::NotFound().json(StatusMessage {
            message: format!("No existe la credencial {}", id),
        }),
        Err(message) => HttpResponse::InternalServerError().json(StatusMessage { message }),
    }
}

pub async fn eliminar_credencial(
    req: HttpRequest,
    secret: Data<JwtSecret>,
    id: Path<String>,
    pool: Data<Pool<Client>>,
    ventana: Data<VentanaPorVencer>,
) -> HttpResponse {
    if let Err(err) = requiere_jwt(&req, &secret.0) {
        return HttpResponse::Unauthorized().json(err);
    }

    match repo(pool, ventana).eliminar(&id) {
        Ok(true) => HttpResponse::Ok().json(StatusMessage {
            message: "Credencial eliminada".to_string(),
        }),
        Ok(false) => HttpResponse::NotFound().json(StatusMessage {
            message: format!("No existe la credencial {}", id),
        }),
        Err(message) => HttpResponse::InternalServerError().json(StatusMessage { message }),
    }
}

#[derive(Serialize)]
pub struct ActualizacionResponse {
    #[serde(flatten)]
    pub resumen: ResumenActualizacion,
    pub notificaciones_creadas: i32,
}

/// El botón "Actualizar Estados" del back-office: re-deriva todos los estados
/// y genera las notificaciones de las credenciales que empeoraron
pub async fn actualizar_estados(
    req: HttpRequest,
    secret: Data<JwtSecret>,
    pool: Data<Pool<Client>>,
    ventana: Data<VentanaPorVencer>,
) -> HttpResponse {
    if let Err(err) = requiere_jwt(&req, &secret.0) {
        return HttpResponse::Unauthorized().json(err);
    }

    let notificaciones = NotificacionRepo { pool: pool.clone() };
    let hoy = chrono::Utc::now().date_naive();

    let resumen = match repo(pool, ventana).actualizar_estados(hoy) {
        Ok(resumen) => resumen,
        Err(message) => {
            return HttpResponse::InternalServerError().json(StatusMessage { message })
        }
    };

    let notificaciones_creadas = match notificaciones.notificar_cambios_credencial(&resumen.cambios)
    {
        Ok(creadas) => creadas,
        Err(message) => {
            // El recálculo ya quedó aplicado, solo falló el fan-out
            log::error!("fallo creando notificaciones: {}", message);
            0
        }
    };

    HttpResponse::Ok().json(ActualizacionResponse {
        resumen,
        notificaciones_creadas,
    })
}
