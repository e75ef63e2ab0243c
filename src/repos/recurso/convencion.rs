use actix_web::web::Data;
use r2d2::Pool;
use redis::Client;
use uuid::Uuid;

use crate::models::recursos::{Convencion, NuevaConvencion};
use crate::repos::utils::{borrar_documento, guardar_documento, leer_documento, listar_documentos};

pub struct ConvencionRepo {
    pub pool: Data<Pool<Client>>,
}

impl ConvencionRepo {
    fn clave(id: &str) -> String {
        format!("convenciones:{}", id)
    }

    pub fn crear(&self, nueva: NuevaConvencion) -> Result<Convencion, String> {
        let mut con = self.pool.get().map_err(|_| "No se pudo conectar al pool")?;
        let convencion = Convencion {
            id: Uuid::new_v4().to_string(),
            nombre: nueva.nombre,
            descripcion: nueva.descripcion,
            fecha_inicio: nueva.fecha_inicio,
            fecha_fin: nueva.fecha_fin,
            lugar: nueva.lugar,
            costo_inscripcion: nueva.costo_inscripcion,
            cupo_maximo: nueva.cupo_maximo,
            activa: nueva.activa.unwrap_or(true),
        };
        guardar_documento(&mut con, Self::clave(&convencion.id), &convencion)?;
        Ok(convencion)
    }

    pub fn actualizar(
        &self,
        id: &str,
        datos: NuevaConvencion,
    ) -> Result<Option<Convencion>, String> {
        let mut con = self.pool.get().map_err(|_| "No se pudo conectar al pool")?;
        let Some(anterior) = leer_documento::<Convencion>(&mut con, &Self::clave(id))? else {
            return Ok(None);
        };

        let convencion = Convencion {
            id: anterior.id,
            nombre: datos.nombre,
            descripcion: datos.descripcion,
            fecha_inicio: datos.fecha_inicio,
            fecha_fin: datos.fecha_fin,
            lugar: datos.lugar,
            costo_inscripcion: datos.costo_inscripcion,
            cupo_maximo: datos.cupo_maximo,
            activa: datos.activa.unwrap_or(anterior.activa),
        };
        guardar_documento(&mut con, Self::clave(id), &convencion)?;
        Ok(Some(convencion))
    }

    pub fn obtener(&self, id: &str) -> Result<Option<Convencion>, String> {
        let mut con = self.pool.get().map_err(|_| "No se pudo conectar al pool")?;
        leer_documento(&mut con, &Self::clave(id))
    }

    pub fn listar(&self) -> Result<Vec<Convencion>, String> {
        let mut con = self.pool.get().map_err(|_| "No se pudo conectar al pool")?;
        let mut convenciones =
            listar_documentos::<Convencion>(&mut con, "convenciones:*".to_string())?;
        // Las más próximas primero, como las muestra el landing
        convenciones.sort_by(|a, b| a.fecha_inicio.cmp(&b.fecha_inicio));
        Ok(convenciones)
    }

    pub fn eliminar(&self, id: &str) -> Result<bool, String> {
        let mut con = self.pool.get().map_err(|_| "No se pudo conectar al pool")?;
        borrar_documento(&mut con, Self::clave(id))
    }
}
