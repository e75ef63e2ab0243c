use actix_web::{
    web::{Data, Json, Path},
    HttpResponse,
};
use r2d2::Pool;
use redis::Client;

use crate::{
    models::{
        mercado_pago::{
            referencia_externa, CrearPreferenciaBody, EstadoPagoResponse, ItemPreferencia,
            PreferenciaRequest, WebhookNotificacion,
        },
        StatusMessage,
    },
    repos::{
        inscripcion::InscripcionRepo,
        mercado_pago::{procesar_pago, procesar_por_preferencia, MercadoPagoClient},
        pago::PagoRepo,
    },
};

/// Crea la preferencia de checkout para una cuota. El external_reference
/// lleva inscripción y número de cuota para la conciliación posterior.
pub async fn crear_preferencia(
    body: Json<CrearPreferenciaBody>,
    mp: Data<MercadoPagoClient>,
    pool: Data<Pool<Client>>,
) -> HttpResponse {
    let data = body.into_inner();

    let inscripciones = InscripcionRepo { pool: pool.clone() };
    let pagos = PagoRepo { pool: pool.clone() };

    let inscripcion = match inscripciones.obtener(&data.inscripcion_id) {
        Ok(Some(inscripcion)) => inscripcion,
        Ok(None) => {
            return HttpResponse::NotFound().json(StatusMessage {
                message: format!("No existe la inscripción {}", data.inscripcion_id),
            })
        }
        Err(message) => {
            return HttpResponse::InternalServerError().json(StatusMessage { message })
        }
    };

    let pago = match pagos.buscar_por_cuota(&data.inscripcion_id, data.numero_cuota) {
        Ok(Some(pago)) => pago,
        Ok(None) => {
            return HttpResponse::NotFound().json(StatusMessage {
                message: format!("No existe la cuota {}", data.numero_cuota),
            })
        }
        Err(message) => {
            return HttpResponse::InternalServerError().json(StatusMessage { message })
        }
    };

    let preferencia = PreferenciaRequest {
        items: vec![ItemPreferencia {
            title: format!(
                "Cuota {}/{} - {}",
                pago.numero_cuota, inscripcion.cantidad_cuotas, inscripcion.nombre_completo
            ),
            quantity: 1,
            unit_price: pago.monto,
            currency_id: "ARS".to_string(),
        }],
        external_reference: referencia_externa(&data.inscripcion_id, data.numero_cuota),
        notification_url: None,
    };

    let respuesta = match mp.crear_preferencia(&preferencia).await {
        Ok(respuesta) => respuesta,
        Err(message) => return HttpResponse::BadGateway().json(StatusMessage { message }),
    };

    if let Err(message) =
        pagos.asignar_preferencia(&data.inscripcion_id, data.numero_cuota, &respuesta.id)
    {
        return HttpResponse::InternalServerError().json(StatusMessage { message });
    }

    HttpResponse::Ok().json(respuesta)
}

/// Lo que pollea la página de pago-pendiente después del redirect
pub async fn estado_pago(payment_id: Path<String>, mp: Data<MercadoPagoClient>) -> HttpResponse {
    match mp.obtener_pago(&payment_id).await {
        Ok(pago_mp) => HttpResponse::Ok().json(EstadoPagoResponse {
            status: pago_mp.status,
            status_detail: pago_mp.status_detail,
            external_reference: pago_mp.external_reference,
        }),
        Err(message) => HttpResponse::NotFound().json(StatusMessage { message }),
    }
}

/// Webhook de Mercado Pago. Siempre responde 200: ante un non-2xx el gateway
/// reintenta y el polling del cliente re-concilia de todos modos.
pub async fn webhook(
    body: Json<WebhookNotificacion>,
    mp: Data<MercadoPagoClient>,
    pool: Data<Pool<Client>>,
) -> HttpResponse {
    let notificacion = body.into_inner();

    if notificacion.tipo.as_deref() != Some("payment") {
        return HttpResponse::Ok().finish();
    }

    let payment_id = match notificacion.data {
        Some(data) => data.id,
        None => return HttpResponse::Ok().finish(),
    };

    let pagos = PagoRepo { pool: pool.clone() };
    let inscripciones = InscripcionRepo { pool: pool.clone() };

    if let Err(message) = procesar_pago(&mp, &pagos, &inscripciones, &payment_id).await {
        log::error!("webhook: fallo conciliando el pago {}: {}", payment_id, message);
    }

    HttpResponse::Ok().finish()
}

/// Nudge one-shot desde el cliente cuando vuelve del checkout con payment_id
pub async fn procesar(
    payment_id: Path<String>,
    mp: Data<MercadoPagoClient>,
    pool: Data<Pool<Client>>,
) -> HttpResponse {
    let pagos = PagoRepo { pool: pool.clone() };
    let inscripciones = InscripcionRepo { pool: pool.clone() };

    match procesar_pago(&mp, &pagos, &inscripciones, &payment_id).await {
        Ok(Some(pago)) => HttpResponse::Ok().json(pago),
        Ok(None) => HttpResponse::Ok().json(StatusMessage {
            message: "El pago no corresponde a ninguna cuota".to_string(),
        }),
        Err(message) => HttpResponse::BadGateway().json(StatusMessage { message }),
    }
}

/// Variante cuando el redirect solo trae preference_id
pub async fn procesar_preferencia(
    preference_id: Path<String>,
    mp: Data<MercadoPagoClient>,
    pool: Data<Pool<Client>>,
) -> HttpResponse {
    let pagos = PagoRepo { pool: pool.clone() };
    let inscripciones = InscripcionRepo { pool: pool.clone() };

    match procesar_por_preferencia(&mp, &pagos, &inscripciones, &preference_id).await {
        Ok(Some(pago)) => HttpResponse::Ok().json(pago),
        Ok(None) => HttpResponse::Ok().json(StatusMessage {
            message: "La preferencia todavía no tiene pagos".to_string(),
        }),
        Err(message) => HttpResponse::BadGateway().json(StatusMessage { message }),
    }
}
