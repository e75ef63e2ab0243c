use actix_web::web::Data;
use chrono::NaiveDate;
use r2d2::Pool;
use redis::Client;
use uuid::Uuid;

use crate::models::credencial::{
    CambioEstado, CredencialPastoral, EstadoCredencial, NuevaCredencial, ResumenActualizacion,
};
use crate::repos::utils::{borrar_documento, guardar_documento, leer_documento, listar_documentos};

pub struct CredencialRepo {
    pub pool: Data<Pool<Client>>,
    pub dias_por_vencer: i64,
}

impl CredencialRepo {
    fn clave(id: &str) -> String {
        format!("credenciales:{}", id)
    }

    pub fn crear(&self, nueva: NuevaCredencial) -> Result<CredencialPastoral, String> {
        let mut con = self.pool.get().map_err(|_| "No se pudo conectar al pool")?;

        let hoy = chrono::Utc::now().date_naive();
        let mut credencial = CredencialPastoral {
            id: Uuid::new_v4().to_string(),
            pastor_id: nueva.pastor_id,
            numero_credencial: nueva.numero_credencial,
            fecha_emision: nueva.fecha_emision,
            fecha_vencimiento: nueva.fecha_vencimiento,
            estado: EstadoCredencial::SinCredencial,
            activa: nueva.activa.unwrap_or(true),
            notas: nueva.notas,
        };
        credencial.estado = credencial.estado_derivado(hoy, self.dias_por_vencer);

        guardar_documento(&mut con, Self::clave(&credencial.id), &credencial)?;
        Ok(credencial)
    }

    pub fn actualizar(
        &self,
        id: &str,
        datos: NuevaCredencial,
    ) -> Result<Option<CredencialPastoral>, String> {
        let mut con = self.pool.get().map_err(|_| "No se pudo conectar al pool")?;
        let Some(anterior) = leer_documento::<CredencialPastoral>(&mut con, &Self::clave(id))?
        else {
            return Ok(None);
        };

        let hoy = chrono::Utc::now().date_naive();
        let mut credencial = CredencialPastoral {
            id: anterior.id,
            pastor_id: datos.pastor_id,
            numero_credencial: datos.numero_credencial,
            fecha_emision: datos.fecha_emision,
            fecha_vencimiento: datos.fecha_vencimiento,
            estado: anterior.estado,
            activa: datos.activa.unwrap_or(anterior.activa),
            notas: datos.notas,
        };
        credencial.estado = credencial.estado_derivado(hoy, self.dias_por_vencer);

        guardar_documento(&mut con, Self::clave(id), &credencial)?;
        Ok(Some(credencial))
    }

    pub fn guardar(&self, credencial: &CredencialPastoral) -> Result<(), String> {
        let mut con = self.pool.get().map_err(|_| "No se pudo conectar al pool")?;
        guardar_documento(&mut con, Self::clave(&credencial.id), credencial)
    }

    /// El estado guardado es solo un cache, al leer siempre se re-deriva
    pub fn obtener(&self, id: &str) -> Result<Option<CredencialPastoral>, String> {
        let mut con = self.pool.get().map_err(|_| "No se pudo conectar al pool")?;
        let hoy = chrono::Utc::now().date_naive();

        let credencial = leer_documento::<CredencialPastoral>(&mut con, &Self::clave(id))?;
        Ok(credencial.map(|mut credencial| {
            credencial.estado = credencial.estado_derivado(hoy, self.dias_por_vencer);
            credencial
        }))
    }

    pub fn listar(&self) -> Result<Vec<CredencialPastoral>, String> {
        let mut con = self.pool.get().map_err(|_| "No se pudo conectar al pool")?;
        let hoy = chrono::Utc::now().date_naive();

        let mut credenciales =
            listar_documentos::<CredencialPastoral>(&mut con, "credenciales:*".to_string())?;
        for credencial in credenciales.iter_mut() {
            credencial.estado = credencial.estado_derivado(hoy, self.dias_por_vencer);
        }
        Ok(credenciales)
    }

    pub fn listar_por_pastor(&self, pastor_id: &str) -> Result<Vec<CredencialPastoral>, String> {
        let credenciales = self.listar()?;
        Ok(credenciales
            .into_iter()
            .filter(|credencial| credencial.pastor_id == pastor_id)
            .collect())
    }

    pub fn listar_por_estado(
        &self,
        estado: EstadoCredencial,
    ) -> Result<Vec<CredencialPastoral>, String> {
        let credenciales = self.listar()?;
        Ok(credenciales
            .into_iter()
            .filter(|credencial| credencial.estado == estado)
            .collect())
    }

    pub fn eliminar(&self, id: &str) -> Result<bool, String> {
        let mut con = self.pool.get().map_err(|_| "No se pudo conectar al pool")?;
        borrar_documento(&mut con, Self::clave(id))
    }

    /// Acción admin "Actualizar Estados": re-deriva y reescribe el estado de
    /// todas las credenciales. Devuelve el conteo por estado y los cambios,
    /// para que el caller pueda generar las notificaciones.
    pub fn actualizar_estados(&self, hoy: NaiveDate) -> Result<ResumenActualizacion, String> {
        let mut con = self.pool.get().map_err(|_| "No se pudo conectar al pool")?;

        let credenciales =
            listar_documentos::<CredencialPastoral>(&mut con, "credenciales:*".to_string())?;

        let mut resumen = ResumenActualizacion {
            total: 0,
            vigentes: 0,
            por_vencer: 0,
            vencidas: 0,
            sin_credencial: 0,
            cambios: Vec::new(),
        };

        for mut credencial in credenciales {
            let anterior = credencial.estado;
            let nuevo = credencial.estado_derivado(hoy, self.dias_por_vencer);

            resumen.total += 1;
            match nuevo {
                EstadoCredencial::Vigente => resumen.vigentes += 1,
                EstadoCredencial::PorVencer => resumen.por_vencer += 1,
                EstadoCredencial::Vencida => resumen.vencidas += 1,
                EstadoCredencial::SinCredencial => resumen.sin_credencial += 1,
            }

            if anterior != nuevo {
                credencial.estado = nuevo;
                guardar_documento(&mut con, Self::clave(&credencial.id), &credencial)?;
                resumen.cambios.push(CambioEstado {
                    credencial_id: credencial.id.clone(),
                    pastor_id: credencial.pastor_id.clone(),
                    numero_credencial: credencial.numero_credencial.clone(),
                    anterior,
                    nuevo,
                });
            }
        }

        log::info!(
            "actualizar_estados: {} credenciales, {} cambios",
            resumen.total,
            resumen.cambios.len()
        );
        Ok(resumen)
    }
}
