use serde::{Deserialize, Serialize};

use crate::models::pago::EstadoPago;

// Tipos de wire de la API de Mercado Pago. Solo se declaran los campos
// que la conciliación usa, el resto del JSON se ignora.

#[derive(Clone, Serialize, Debug)]
pub struct ItemPreferencia {
    pub title: String,
    pub quantity: i32,
    pub unit_price: f64,
    pub currency_id: String,
}

#[derive(Clone, Serialize, Debug)]
pub struct PreferenciaRequest {
    pub items: Vec<ItemPreferencia>,
    pub external_reference: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notification_url: Option<String>,
}

#[derive(Clone, Serialize, Deserialize, Debug)]
pub struct PreferenciaResponse {
    pub id: String,
    pub init_point: String,
    pub sandbox_init_point: Option<String>,
}

#[derive(Clone, Deserialize, Debug)]
pub struct PagoMercadoPago {
    pub id: i64,
    pub status: String,
    pub status_detail: Option<String>,
    pub external_reference: Option<String>,
    pub transaction_amount: Option<f64>,
    pub payment_method_id: Option<String>,
    pub date_approved: Option<String>,
}

#[derive(Clone, Deserialize, Debug)]
pub struct BusquedaPagos {
    pub results: Vec<PagoMercadoPago>,
}

// Notificación webhook: {"type":"payment","action":"payment.updated","data":{"id":"123"}}
#[derive(Clone, Deserialize, Debug)]
pub struct WebhookNotificacion {
    #[serde(rename = "type")]
    pub tipo: Option<String>,
    pub action: Option<String>,
    pub data: Option<WebhookData>,
}

#[derive(Clone, Deserialize, Debug)]
pub struct WebhookData {
    pub id: String,
}

// Cuerpo de POST /api/pagos/preferencia
#[derive(Clone, Deserialize, Debug)]
pub struct CrearPreferenciaBody {
    pub inscripcion_id: String,
    pub numero_cuota: i32,
}

// Respuesta de GET /api/pagos/estado/{payment_id}, lo que el cliente pollea
#[derive(Clone, Serialize, Debug)]
pub struct EstadoPagoResponse {
    pub status: String,
    pub status_detail: Option<String>,
    pub external_reference: Option<String>,
}

/// Mapea el status de Mercado Pago a nuestro estado de cuota.
/// Cualquier estado intermedio (in_process, pending, authorized...) queda PENDIENTE.
pub fn estado_desde_mp(status: &str) -> EstadoPago {
    match status {
        "approved" => EstadoPago::Completado,
        "rejected" | "cancelled" => EstadoPago::Rechazado,
        _ => EstadoPago::Pendiente,
    }
}

/// external_reference = "{inscripcion_id}:{numero_cuota}"
pub fn referencia_externa(inscripcion_id: &str, numero_cuota: i32) -> String {
    format!("{}:{}", inscripcion_id, numero_cuota)
}

pub fn parsear_referencia_externa(referencia: &str) -> Option<(String, i32)> {
    let (inscripcion_id, cuota) = referencia.rsplit_once(':')?;
    let numero_cuota = cuota.parse::<i32>().ok()?;
    if inscripcion_id.is_empty() {
        return None;
    }
    Some((inscripcion_id.to_string(), numero_cuota))
}
