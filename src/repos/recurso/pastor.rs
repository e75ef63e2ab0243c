use actix_web::web::Data;
use r2d2::Pool;
use redis::Client;
use uuid::Uuid;

use crate::models::recursos::{NuevoPastor, Pastor};
use crate::repos::utils::{borrar_documento, guardar_documento, leer_documento, listar_documentos};

pub struct PastorRepo {
    pub pool: Data<Pool<Client>>,
}

impl PastorRepo {
    fn clave(id: &str) -> String {
        format!("pastores:{}", id)
    }

    pub fn crear(&self, nuevo: NuevoPastor) -> Result<Pastor, String> {
        let mut con = self.pool.get().map_err(|_| "No se pudo conectar al pool")?;
        let pastor = Pastor {
            id: Uuid::new_v4().to_string(),
            nombre: nuevo.nombre,
            apellido: nuevo.apellido,
            email: nuevo.email,
            telefono: nuevo.telefono,
            iglesia: nuevo.iglesia,
            ciudad: nuevo.ciudad,
            fecha_ordenacion: nuevo.fecha_ordenacion,
            activo: nuevo.activo.unwrap_or(true),
            foto_url: nuevo.foto_url,
        };
        guardar_documento(&mut con, Self::clave(&pastor.id), &pastor)?;
        Ok(pastor)
    }

    pub fn actualizar(&self, id: &str, datos: NuevoPastor) -> Result<Option<Pastor>, String> {
        let mut con = self.pool.get().map_err(|_| "No se pudo conectar al pool")?;
        let existente = leer_documento::<Pastor>(&mut con, &Self::clave(id))?;
        let Some(anterior) = existente else {
            return Ok(None);
        };

        let pastor = Pastor {
            id: anterior.id,
            nombre: datos.nombre,
            apellido: datos.apellido,
            email: datos.email,
            telefono: datos.telefono,
            iglesia: datos.iglesia,
            ciudad: datos.ciudad,
            fecha_ordenacion: datos.fecha_ordenacion,
            activo: datos.activo.unwrap_or(anterior.activo),
            foto_url: datos.foto_url,
        };
        guardar_documento(&mut con, Self::clave(id), &pastor)?;
        Ok(Some(pastor))
    }

    pub fn obtener(&self, id: &str) -> Result<Option<Pastor>, String> {
        let mut con = self.pool.get().map_err(|_| "No se pudo conectar al pool")?;
        leer_documento(&mut con, &Self::clave(id))
    }

    pub fn listar(&self) -> Result<Vec<Pastor>, String> {
        let mut con = self.pool.get().map_err(|_| "No se pudo conectar al pool")?;
        let mut pastores = listar_documentos::<Pastor>(&mut con, "pastores:*".to_string())?;
        pastores.sort_by(|a, b| a.apellido.cmp(&b.apellido));
        Ok(pastores)
    }

    pub fn eliminar(&self, id: &str) -> Result<bool, String> {
        let mut con = self.pool.get().map_err(|_| "No se pudo conectar al pool")?;
        borrar_documento(&mut con, Self::clave(id))
    }
}
