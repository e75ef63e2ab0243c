use actix_web::web::Data;
use r2d2::Pool;
use redis::Client;

use crate::models::mercado_pago::parsear_referencia_externa;
use crate::models::pago::{EstadoPago, Pago};
use crate::repos::utils::{guardar_documento, leer_documento, listar_documentos};

pub struct PagoRepo {
    pub pool: Data<Pool<Client>>,
}

impl PagoRepo {
    fn clave(inscripcion_id: &str, pago_id: &str) -> String {
        format!("inscripciones:{}:pagos:{}", inscripcion_id, pago_id)
    }

    pub fn guardar(&self, pago: &Pago) -> Result<(), String> {
        let mut con = self.pool.get().map_err(|_| "No se pudo conectar al pool")?;
        guardar_documento(&mut con, Self::clave(&pago.inscripcion_id, &pago.id), pago)
    }

    pub fn obtener(&self, inscripcion_id: &str, pago_id: &str) -> Result<Option<Pago>, String> {
        let mut con = self.pool.get().map_err(|_| "No se pudo conectar al pool")?;
        leer_documento(&mut con, &Self::clave(inscripcion_id, pago_id))
    }

    pub fn listar_por_inscripcion(&self, inscripcion_id: &str) -> Result<Vec<Pago>, String> {
        let mut con = self.pool.get().map_err(|_| "No se pudo conectar al pool")?;
        let mut pagos = listar_documentos::<Pago>(
            &mut con,
            format!("inscripciones:{}:pagos:*", inscripcion_id),
        )?;
        pagos.sort_by_key(|pago| pago.numero_cuota);
        Ok(pagos)
    }

    pub fn buscar_por_cuota(
        &self,
        inscripcion_id: &str,
        numero_cuota: i32,
    ) -> Result<Option<Pago>, String> {
        let pagos = self.listar_por_inscripcion(inscripcion_id)?;
        Ok(pagos
            .into_iter()
            .find(|pago| pago.numero_cuota == numero_cuota))
    }

    pub fn buscar_por_preferencia(&self, preferencia_id: &str) -> Result<Option<Pago>, String> {
        let mut con = self.pool.get().map_err(|_| "No se pudo conectar al pool")?;
        let pagos = listar_documentos::<Pago>(&mut con, "inscripciones:*:pagos:*".to_string())?;
        Ok(pagos
            .into_iter()
            .find(|pago| pago.preferencia_id.as_deref() == Some(preferencia_id)))
    }

    /// Anota en la cuota la preferencia de checkout recién creada
    pub fn asignar_preferencia(
        &self,
        inscripcion_id: &str,
        numero_cuota: i32,
        preferencia_id: &str,
    ) -> Result<Pago, String> {
        let mut pago = self
            .buscar_por_cuota(inscripcion_id, numero_cuota)?
            .ok_or(format!(
                "No existe la cuota {} de la inscripción {}",
                numero_cuota, inscripcion_id
            ))?;

        pago.preferencia_id = Some(preferencia_id.to_string());
        self.guardar(&pago)?;
        Ok(pago)
    }

    /// Aplica el estado que reporta el gateway sobre la cuota referida por el
    /// external_reference. Un COMPLETADO nunca se degrada: la búsqueda de MP
    /// puede devolver snapshots in_process viejos de un pago ya aprobado.
    pub fn conciliar_desde_gateway(
        &self,
        referencia_externa: &str,
        estado: EstadoPago,
        payment_id: &str,
        metodo_pago: Option<String>,
        fecha_pago: Option<String>,
    ) -> Result<Option<Pago>, String> {
        let (inscripcion_id, numero_cuota) = match parsear_referencia_externa(referencia_externa) {
            Some(partes) => partes,
            // Referencia de una preferencia vieja o ajena, no es un error
            None => return Ok(None),
        };

        let pago = match self.buscar_por_cuota(&inscripcion_id, numero_cuota)? {
            Some(pago) => pago,
            None => return Ok(None),
        };

        if pago.estado == EstadoPago::Completado && estado != EstadoPago::Completado {
            log::info!(
                "ignorando downgrade {:?} para el pago {} ya completado",
                estado,
                pago.id
            );
            return Ok(Some(pago));
        }

        let mut pago = pago;
        pago.estado = estado;
        pago.referencia = Some(payment_id.to_string());
        if estado == EstadoPago::Completado {
            pago.metodo_pago = metodo_pago.or(pago.metodo_pago);
            pago.fecha_pago = fecha_pago.or(pago.fecha_pago);
        }

        self.guardar(&pago)?;
        Ok(Some(pago))
    }
}
