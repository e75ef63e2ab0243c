use actix_web::web::Data;
use r2d2::Pool;
use redis::Client;
use uuid::Uuid;

use crate::models::recursos::{GaleriaItem, NuevoGaleriaItem};
use crate::repos::utils::{borrar_documento, guardar_documento, leer_documento, listar_documentos};

pub struct GaleriaRepo {
    pub pool: Data<Pool<Client>>,
}

impl GaleriaRepo {
    fn clave(id: &str) -> String {
        format!("galeria:{}", id)
    }

    pub fn crear(&self, nuevo: NuevoGaleriaItem) -> Result<GaleriaItem, String> {
        let mut con = self.pool.get().map_err(|_| "No se pudo conectar al pool")?;
        let item = GaleriaItem {
            id: Uuid::new_v4().to_string(),
            titulo: nuevo.titulo,
            convencion_id: nuevo.convencion_id,
            archivo_path: nuevo.archivo_path,
            fecha_subida: chrono::Utc::now().date_naive().format("%Y-%m-%d").to_string(),
        };
        guardar_documento(&mut con, Self::clave(&item.id), &item)?;
        Ok(item)
    }

    pub fn obtener(&self, id: &str) -> Result<Option<GaleriaItem>, String> {
        let mut con = self.pool.get().map_err(|_| "No se pudo conectar al pool")?;
        leer_documento(&mut con, &Self::clave(id))
    }

    pub fn listar(&self, convencion_id: Option<&str>) -> Result<Vec<GaleriaItem>, String> {
        let mut con = self.pool.get().map_err(|_| "No se pudo conectar al pool")?;
        let mut items = listar_documentos::<GaleriaItem>(&mut con, "galeria:*".to_string())?;
        if let Some(convencion_id) = convencion_id {
            items.retain(|item| item.convencion_id.as_deref() == Some(convencion_id));
        }
        items.sort_by(|a, b| b.fecha_subida.cmp(&a.fecha_subida));
        Ok(items)
    }

    pub fn eliminar(&self, id: &str) -> Result<bool, String> {
        let mut con = self.pool.get().map_err(|_| "No se pudo conectar al pool")?;
        borrar_documento(&mut con, Self::clave(id))
    }
}
