use actix_web::web::Data;
use r2d2::Pool;
use redis::Client;
use uuid::Uuid;

use crate::models::pago::{
    ActualizacionInscripcion, EstadoInscripcion, EstadoPago, Inscripcion, NuevaInscripcion, Pago,
};
use crate::repos::pago::PagoRepo;
use crate::repos::utils::{borrar_documento, guardar_documento, leer_documento, listar_documentos};

pub struct InscripcionRepo {
    pub pool: Data<Pool<Client>>,
}

impl InscripcionRepo {
    fn clave(id: &str) -> String {
        format!("inscripciones:{}:registro", id)
    }

    fn pago_repo(&self) -> PagoRepo {
        PagoRepo {
            pool: self.pool.clone(),
        }
    }

    /// Crea la inscripción junto con sus cuotas PENDIENTE. El monto se parte
    /// en partes iguales a centavos, el remanente cae en la última cuota.
    pub fn crear(&self, nueva: NuevaInscripcion) -> Result<(Inscripcion, Vec<Pago>), String> {
        if nueva.cantidad_cuotas < 1 {
            return Err("cantidad_cuotas debe ser al menos 1".to_string());
        }
        if nueva.monto_total <= 0.0 {
            return Err("monto_total debe ser positivo".to_string());
        }

        let mut con = self.pool.get().map_err(|_| "No se pudo conectar al pool")?;

        let inscripcion = Inscripcion {
            id: Uuid::new_v4().to_string(),
            convencion_id: nueva.convencion_id,
            nombre_completo: nueva.nombre_completo,
            email: nueva.email,
            telefono: nueva.telefono,
            iglesia: nueva.iglesia,
            monto_total: nueva.monto_total,
            cantidad_cuotas: nueva.cantidad_cuotas,
            fecha_registro: chrono::Utc::now().date_naive().format("%Y-%m-%d").to_string(),
            estado: EstadoInscripcion::Pendiente,
        };
        guardar_documento(&mut con, Self::clave(&inscripcion.id), &inscripcion)?;

        // Todo en centavos para que la suma cierre exacta
        let total_centavos = (nueva.monto_total * 100.0).round() as i64;
        let base_centavos = total_centavos / nueva.cantidad_cuotas as i64;
        let remanente = total_centavos - base_centavos * nueva.cantidad_cuotas as i64;

        let pago_repo = self.pago_repo();
        let mut pagos = Vec::new();
        for numero in 1..=nueva.cantidad_cuotas {
            let centavos = if numero == nueva.cantidad_cuotas {
                base_centavos + remanente
            } else {
                base_centavos
            };
            let pago = Pago {
                id: Uuid::new_v4().to_string(),
                inscripcion_id: inscripcion.id.clone(),
                numero_cuota: numero,
                monto: centavos as f64 / 100.0,
                estado: EstadoPago::Pendiente,
                metodo_pago: None,
                referencia: None,
                preferencia_id: None,
                comprobante_url: None,
                fecha_pago: None,
            };
            pago_repo.guardar(&pago)?;
            pagos.push(pago);
        }

        Ok((inscripcion, pagos))
    }

    pub fn obtener(&self, id: &str) -> Result<Option<Inscripcion>, String> {
        let mut con = self.pool.get().map_err(|_| "No se pudo conectar al pool")?;
        leer_documento(&mut con, &Self::clave(id))
    }

    pub fn guardar(&self, inscripcion: &Inscripcion) -> Result<(), String> {
        let mut con = self.pool.get().map_err(|_| "No se pudo conectar al pool")?;
        guardar_documento(&mut con, Self::clave(&inscripcion.id), inscripcion)
    }

    pub fn actualizar(
        &self,
        id: &str,
        datos: ActualizacionInscripcion,
    ) -> Result<Option<Inscripcion>, String> {
        let mut con = self.pool.get().map_err(|_| "No se pudo conectar al pool")?;
        let Some(mut inscripcion) = leer_documento::<Inscripcion>(&mut con, &Self::clave(id))?
        else {
            return Ok(None);
        };

        inscripcion.nombre_completo = datos.nombre_completo;
        inscripcion.email = datos.email;
        inscripcion.telefono = datos.telefono;
        inscripcion.iglesia = datos.iglesia;
        if let Some(estado) = datos.estado {
            inscripcion.estado = estado;
        }

        guardar_documento(&mut con, Self::clave(id), &inscripcion)?;
        Ok(Some(inscripcion))
    }

    pub fn listar(&self) -> Result<Vec<Inscripcion>, String> {
        let mut con = self.pool.get().map_err(|_| "No se pudo conectar al pool")?;
        listar_documentos(&mut con, "inscripciones:*:registro".to_string())
    }

    pub fn listar_por_convencion(&self, convencion_id: &str) -> Result<Vec<Inscripcion>, String> {
        let inscripciones = self.listar()?;
        Ok(inscripciones
            .into_iter()
            .filter(|inscripcion| inscripcion.convencion_id == convencion_id)
            .collect())
    }

    pub fn eliminar(&self, id: &str) -> Result<bool, String> {
        let mut con = self.pool.get().map_err(|_| "No se pudo conectar al pool")?;

        // Las cuotas cuelgan de la inscripción, se van con ella
        let pagos = self.pago_repo().listar_por_inscripcion(id)?;
        for pago in pagos {
            borrar_documento(&mut con, format!("inscripciones:{}:pagos:{}", id, pago.id))?;
        }
        borrar_documento(&mut con, Self::clave(id))
    }

    /// Si todas las cuotas quedaron COMPLETADO la inscripción pasa a CONFIRMADA
    pub fn confirmar_si_pagada(&self, id: &str) -> Result<Option<Inscripcion>, String> {
        let inscripcion = match self.obtener(id)? {
            Some(inscripcion) => inscripcion,
            None => return Ok(None),
        };

        if inscripcion.estado != EstadoInscripcion::Pendiente {
            return Ok(Some(inscripcion));
        }

        let pagos = self.pago_repo().listar_por_inscripcion(id)?;
        let completa = !pagos.is_empty()
            && pagos.iter().all(|pago| pago.estado == EstadoPago::Completado);

        if completa {
            let mut inscripcion = inscripcion;
            inscripcion.estado = EstadoInscripcion::Confirmada;
            self.guardar(&inscripcion)?;
            log::info!("inscripción {} confirmada, todas las cuotas pagadas", id);
            return Ok(Some(inscripcion));
        }

        Ok(Some(inscripcion))
    }
}
