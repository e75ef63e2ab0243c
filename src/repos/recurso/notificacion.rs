use actix_web::web::Data;
use r2d2::Pool;
use redis::Client;
use uuid::Uuid;

use crate::models::credencial::CambioEstado;
use crate::models::recursos::{Notificacion, NuevaNotificacion};
use crate::repos::utils::{borrar_documento, guardar_documento, leer_documento, listar_documentos};

pub struct NotificacionRepo {
    pub pool: Data<Pool<Client>>,
}

impl NotificacionRepo {
    fn clave(id: &str) -> String {
        format!("notificaciones:{}", id)
    }

    pub fn crear(&self, nueva: NuevaNotificacion) -> Result<Notificacion, String> {
        let mut con = self.pool.get().map_err(|_| "No se pudo conectar al pool")?;
        let notificacion = Notificacion {
            id: Uuid::new_v4().to_string(),
            titulo: nueva.titulo,
            mensaje: nueva.mensaje,
            tipo: nueva.tipo,
            destinatario_id: nueva.destinatario_id,
            fecha_creacion: chrono::Utc::now().date_naive().format("%Y-%m-%d").to_string(),
            leida: false,
        };
        guardar_documento(&mut con, Self::clave(&notificacion.id), &notificacion)?;
        Ok(notificacion)
    }

    pub fn obtener(&self, id: &str) -> Result<Option<Notificacion>, String> {
        let mut con = self.pool.get().map_err(|_| "No se pudo conectar al pool")?;
        leer_documento(&mut con, &Self::clave(id))
    }

    pub fn listar(&self) -> Result<Vec<Notificacion>, String> {
        let mut con = self.pool.get().map_err(|_| "No se pudo conectar al pool")?;
        let mut notificaciones =
            listar_documentos::<Notificacion>(&mut con, "notificaciones:*".to_string())?;
        notificaciones.sort_by(|a, b| b.fecha_creacion.cmp(&a.fecha_creacion));
        Ok(notificaciones)
    }

    pub fn marcar_leida(&self, id: &str) -> Result<Option<Notificacion>, String> {
        let mut con = self.pool.get().map_err(|_| "No se pudo conectar al pool")?;
        let Some(mut notificacion) = leer_documento::<Notificacion>(&mut con, &Self::clave(id))?
        else {
            return Ok(None);
        };
        notificacion.leida = true;
        guardar_documento(&mut con, Self::clave(id), &notificacion)?;
        Ok(Some(notificacion))
    }

    pub fn eliminar(&self, id: &str) -> Result<bool, String> {
        let mut con = self.pool.get().map_err(|_| "No se pudo conectar al pool")?;
        borrar_documento(&mut con, Self::clave(id))
    }

    /// Fan-out de la acción "Actualizar Estados": una notificación por cada
    /// credencial que entró a POR_VENCER o VENCIDA.
    pub fn notificar_cambios_credencial(&self, cambios: &[CambioEstado]) -> Result<i32, String> {
        use crate::models::credencial::EstadoCredencial;

        let mut creadas = 0;
        for cambio in cambios {
            let (titulo, mensaje) = match cambio.nuevo {
                EstadoCredencial::PorVencer => (
                    "Credencial por vencer".to_string(),
                    format!(
                        "La credencial {} está por vencer",
                        cambio.numero_credencial
                    ),
                ),
                EstadoCredencial::Vencida => (
                    "Credencial vencida".to_string(),
                    format!("La credencial {} venció", cambio.numero_credencial),
                ),
                _ => continue,
            };

            self.crear(NuevaNotificacion {
                titulo,
                mensaje,
                tipo: "CREDENCIAL".to_string(),
                destinatario_id: Some(cambio.pastor_id.clone()),
            })?;
            creadas += 1;
        }
        Ok(creadas)
    }
}
