use actix_web::web::Data;
use r2d2::Pool;
use redis::Client;
use uuid::Uuid;

use crate::models::recursos::{Noticia, NuevaNoticia};
use crate::repos::utils::{borrar_documento, guardar_documento, leer_documento, listar_documentos};

pub struct NoticiaRepo {
    pub pool: Data<Pool<Client>>,
}

impl NoticiaRepo {
    fn clave(id: &str) -> String {
        format!("noticias:{}", id)
    }

    pub fn crear(&self, nueva: NuevaNoticia) -> Result<Noticia, String> {
        let mut con = self.pool.get().map_err(|_| "No se pudo conectar al pool")?;
        let noticia = Noticia {
            id: Uuid::new_v4().to_string(),
            titulo: nueva.titulo,
            contenido: nueva.contenido,
            autor: nueva.autor,
            fecha_publicacion: nueva.fecha_publicacion,
            imagen_url: nueva.imagen_url,
            publicada: nueva.publicada.unwrap_or(false),
        };
        guardar_documento(&mut con, Self::clave(&noticia.id), &noticia)?;
        Ok(noticia)
    }

    pub fn actualizar(&self, id: &str, datos: NuevaNoticia) -> Result<Option<Noticia>, String> {
        let mut con = self.pool.get().map_err(|_| "No se pudo conectar al pool")?;
        let Some(anterior) = leer_documento::<Noticia>(&mut con, &Self::clave(id))? else {
            return Ok(None);
        };

        let noticia = Noticia {
            id: anterior.id,
            titulo: datos.titulo,
            contenido: datos.contenido,
            autor: datos.autor,
            fecha_publicacion: datos.fecha_publicacion,
            imagen_url: datos.imagen_url,
            publicada: datos.publicada.unwrap_or(anterior.publicada),
        };
        guardar_documento(&mut con, Self::clave(id), &noticia)?;
        Ok(Some(noticia))
    }

    pub fn obtener(&self, id: &str) -> Result<Option<Noticia>, String> {
        let mut con = self.pool.get().map_err(|_| "No se pudo conectar al pool")?;
        leer_documento(&mut con, &Self::clave(id))
    }

    /// `solo_publicadas` es lo que usa el landing, el back-office lista todo
    pub fn listar(&self, solo_publicadas: bool) -> Result<Vec<Noticia>, String> {
        let mut con = self.pool.get().map_err(|_| "No se pudo conectar al pool")?;
        let mut noticias = listar_documentos::<Noticia>(&mut con, "noticias:*".to_string())?;
        if solo_publicadas {
            noticias.retain(|noticia| noticia.publicada);
        }
        noticias.sort_by(|a, b| b.fecha_publicacion.cmp(&a.fecha_publicacion));
        Ok(noticias)
    }

    pub fn eliminar(&self, id: &str) -> Result<bool, String> {
        let mut con = self.pool.get().map_err(|_| "No se pudo conectar al pool")?;
        borrar_documento(&mut con, Self::clave(id))
    }
}
