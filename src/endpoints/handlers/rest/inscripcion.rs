use actix_web::{
    web::{Data, Json, Path, Query},
    HttpRequest, HttpResponse,
};
use r2d2::Pool;
use redis::Client;
use serde::{Deserialize, Serialize};

use crate::{
    config::JwtSecret,
    models::{
        pago::{ActualizacionInscripcion, Inscripcion, NuevaInscripcion, Pago},
        StatusMessage,
    },
    repos::{auth::utils::requiere_jwt, inscripcion::InscripcionRepo, pago::PagoRepo},
};

#[derive(Serialize)]
pub struct InscripcionCreada {
    pub inscripcion: Inscripcion,
    pub pagos: Vec<Pago>,
}

#[derive(Deserialize)]
pub struct InscripcionesQuery {
    pub convencion_id: Option<String>,
}

/// Alta pública: los invitados se inscriben desde el landing sin cuenta
pub async fn crear_inscripcion(
    body: Json<NuevaInscripcion>,
    pool: Data<Pool<Client>>,
) -> HttpResponse {
    let repo = InscripcionRepo { pool };
    match repo.crear(body.into_inner()) {
        Ok((inscripcion, pagos)) => {
            HttpResponse::Created().json(InscripcionCreada { inscripcion, pagos })
        }
        Err(message) => HttpResponse::BadRequest().json(StatusMessage { message }),
    }
}

pub async fn listar_inscripciones(
    query: Query<InscripcionesQuery>,
    pool: Data<Pool<Client>>,
) -> HttpResponse {
    let repo = InscripcionRepo { pool };
    let resultado = match &query.convencion_id {
        Some(convencion_id) => repo.listar_por_convencion(convencion_id),
        None => repo.listar(),
    };

    match resultado {
        Ok(inscripciones) => HttpResponse::Ok().json(inscripciones),
        Err(message) => HttpResponse::InternalServerError().json(StatusMessage { message }),
    }
}

pub async fn obtener_inscripcion(id: Path<String>, pool: Data<Pool<Client>>) -> HttpResponse {
    let repo = InscripcionRepo { pool };
    match repo.obtener(&id) {
        Ok(Some(inscripcion)) => HttpResponse::Ok().json(inscripcion),
        Ok(None) => HttpResponse::NotFound().json(StatusMessage {
            message: format!("No existe la inscripción {}", id),
        }),
        Err(message) => HttpResponse::InternalServerError().json(StatusMessage { message }),
    }
}

pub async fn actualizar_inscripcion(
    req: HttpRequest,
    secret: Data<JwtSecret>,
    id: Path<String>,
    body: Json<ActualizacionInscripcion>,
    pool: Data<Pool<Client>>,
) -> HttpResponse {
    if let Err(err) = requiere_jwt(&req, &secret.0) {
        return HttpResponse::Unauthorized().json(err);
    }

    let repo = InscripcionRepo { pool };
    match repo.actualizar(&id, body.into_inner()) {
        Ok(Some(inscripcion)) => HttpResponse::Ok().json(inscripcion),
        Ok(None) => HttpResponse::NotFound().json(StatusMessage {
            message: format!("No existe la inscripción {}", id),
        }),
        Err(message) => HttpResponse::InternalServerError().json(StatusMessage { message }),
    }
}

pub async fn listar_pagos_inscripcion(id: Path<String>, pool: Data<Pool<Client>>) -> HttpResponse {
    let repo = PagoRepo { pool };
    match repo.listar_por_inscripcion(&id) {
        Ok(pagos) => HttpResponse::Ok().json(pagos),
        Err(message) => HttpResponse::InternalServerError().json(StatusMessage { message }),
    }
}

pub async fn eliminar_inscripcion(
    req: HttpRequest,
    secret: Data<JwtSecret>,
    id: Path<String>,
    pool: Data<Pool<Client>>,
) -> HttpResponse {
    if let Err(err) = requiere_jwt(&req, &secret.0) {
        return HttpResponse::Unauthorized().json(err);
    }

    let repo = InscripcionRepo { pool };
    match repo.eliminar(&id) {
        Ok(true) => HttpResponse::Ok().json(StatusMessage {
            message: "Inscripción eliminada".to_string(),
        }),
        Ok(false) => HttpResponse::NotFound().json(StatusMessage {
            message: format!("No existe la inscripción {}", id),
        }),
        Err(message) => HttpResponse::InternalServerError().json(StatusMessage { message }),
    }
}
