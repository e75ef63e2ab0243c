use crate::models::mercado_pago::{
    estado_desde_mp, BusquedaPagos, PagoMercadoPago, PreferenciaRequest, PreferenciaResponse,
};
use crate::models::pago::Pago;
use crate::repos::inscripcion::InscripcionRepo;
use crate::repos::pago::PagoRepo;

/// Cliente del API de Mercado Pago. La autoridad sobre el estado de un pago
/// es siempre el gateway, acá solo se espeja.
#[derive(Clone)]
pub struct MercadoPagoClient {
    http: reqwest::Client,
    base_url: String,
    access_token: String,
}

impl MercadoPagoClient {
    pub fn init(base_url: String, access_token: String) -> MercadoPagoClient {
        MercadoPagoClient {
            http: reqwest::Client::new(),
            base_url,
            access_token,
        }
    }

    pub async fn crear_preferencia(
        &self,
        preferencia: &PreferenciaRequest,
    ) -> Result<PreferenciaResponse, String> {
        let respuesta = self
            .http
            .post(format!("{}/checkout/preferences", self.base_url))
            .bearer_auth(&self.access_token)
            .json(preferencia)
            .send()
            .await
            .map_err(|_| "No se pudo contactar a Mercado Pago".to_string())?;

        if !respuesta.status().is_success() {
            return Err(format!(
                "Mercado Pago rechazó la preferencia: {}",
                respuesta.status()
            ));
        }

        respuesta
            .json::<PreferenciaResponse>()
            .await
            .map_err(|_| "Respuesta de preferencia inesperada".to_string())
    }

    pub async fn obtener_pago(&self, payment_id: &str) -> Result<PagoMercadoPago, String> {
        let respuesta = self
            .http
            .get(format!("{}/v1/payments/{}", self.base_url, payment_id))
            .bearer_auth(&self.access_token)
            .send()
            .await
            .map_err(|_| "No se pudo contactar a Mercado Pago".to_string())?;

        if !respuesta.status().is_success() {
            return Err(format!("Pago {} no encontrado en el gateway", payment_id));
        }

        respuesta
            .json::<PagoMercadoPago>()
            .await
            .map_err(|_| "Respuesta de pago inesperada".to_string())
    }

    pub async fn buscar_pagos_por_preferencia(
        &self,
        preference_id: &str,
    ) -> Result<Vec<PagoMercadoPago>, String> {
        let respuesta = self
            .http
            .get(format!("{}/v1/payments/search", self.base_url))
            .bearer_auth(&self.access_token)
            .query(&[("preference_id", preference_id), ("sort", "date_created"), ("criteria", "desc")])
            .send()
            .await
            .map_err(|_| "No se pudo contactar a Mercado Pago".to_string())?;

        if !respuesta.status().is_success() {
            return Err("La búsqueda de pagos falló en el gateway".to_string());
        }

        let busqueda = respuesta
            .json::<BusquedaPagos>()
            .await
            .map_err(|_| "Respuesta de búsqueda inesperada".to_string())?;

        Ok(busqueda.results)
    }
}

/// Conciliación one-shot por payment_id: lee el pago en el gateway, mapea el
/// estado y lo aplica sobre la cuota. Usado por el webhook y por el nudge
/// que dispara la página de pago-pendiente.
pub async fn procesar_pago(
    mp: &MercadoPagoClient,
    pagos: &PagoRepo,
    inscripciones: &InscripcionRepo,
    payment_id: &str,
) -> Result<Option<Pago>, String> {
    let pago_mp = mp.obtener_pago(payment_id).await?;
    aplicar_pago_gateway(pagos, inscripciones, &pago_mp)
}

/// Variante cuando el redirect solo trae preference_id: busca los pagos de
/// esa preferencia y concilia el más reciente.
pub async fn procesar_por_preferencia(
    mp: &MercadoPagoClient,
    pagos: &PagoRepo,
    inscripciones: &InscripcionRepo,
    preference_id: &str,
) -> Result<Option<Pago>, String> {
    let resultados = mp.buscar_pagos_por_preferencia(preference_id).await?;
    let pago_mp = match resultados.into_iter().next() {
        Some(pago_mp) => pago_mp,
        None => return Ok(None),
    };
    aplicar_pago_gateway(pagos, inscripciones, &pago_mp)
}

fn aplicar_pago_gateway(
    pagos: &PagoRepo,
    inscripciones: &InscripcionRepo,
    pago_mp: &PagoMercadoPago,
) -> Result<Option<Pago>, String> {
    let referencia = match &pago_mp.external_reference {
        Some(referencia) => referencia,
        // Pagos sin external_reference no son nuestros
        None => return Ok(None),
    };

    let estado = estado_desde_mp(&pago_mp.status);
    let actualizado = pagos.conciliar_desde_gateway(
        referencia,
        estado,
        &pago_mp.id.to_string(),
        pago_mp.payment_method_id.clone(),
        pago_mp.date_approved.clone(),
    )?;

    if let Some(pago) = &actualizado {
        if pago.estado == crate::models::pago::EstadoPago::Completado {
            inscripciones.confirmar_si_pagada(&pago.inscripcion_id)?;
        }
    }

    Ok(actualizado)
}
