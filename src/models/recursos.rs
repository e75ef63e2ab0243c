use juniper::GraphQLObject;
use serde::{Deserialize, Serialize};

#[derive(Clone, Serialize, Deserialize, GraphQLObject, Debug)]
pub struct Pastor {
    pub id: String,
    pub nombre: String,
    pub apellido: String,
    pub email: String,
    pub telefono: Option<String>,
    pub iglesia: Option<String>,
    pub ciudad: Option<String>,
    pub fecha_ordenacion: Option<String>,
    pub activo: bool,
    pub foto_url: Option<String>,
}

#[derive(Clone, Deserialize, Debug)]
pub struct NuevoPastor {
    pub nombre: String,
    pub apellido: String,
    pub email: String,
    pub telefono: Option<String>,
    pub iglesia: Option<String>,
    pub ciudad: Option<String>,
    pub fecha_ordenacion: Option<String>,
    pub activo: Option<bool>,
    pub foto_url: Option<String>,
}

#[derive(Clone, Serialize, Deserialize, GraphQLObject, Debug)]
pub struct Convencion {
    pub id: String,
    pub nombre: String,
    pub descripcion: String,
    pub fecha_inicio: String,
    pub fecha_fin: String,
    pub lugar: String,
    pub costo_inscripcion: f64,
    pub cupo_maximo: i32,
    pub activa: bool,
}

#[derive(Clone, Deserialize, Debug)]
pub struct NuevaConvencion {
    pub nombre: String,
    pub descripcion: String,
    pub fecha_inicio: String,
    pub fecha_fin: String,
    pub lugar: String,
    pub costo_inscripcion: f64,
    pub cupo_maximo: i32,
    pub activa: Option<bool>,
}

#[derive(Clone, Serialize, Deserialize, GraphQLObject, Debug)]
pub struct Noticia {
    pub id: String,
    pub titulo: String,
    pub contenido: String,
    pub autor: String,
    pub fecha_publicacion: String,
    pub imagen_url: Option<String>,
    pub publicada: bool,
}

#[derive(Clone, Deserialize, Debug)]
pub struct NuevaNoticia {
    pub titulo: String,
    pub contenido: String,
    pub autor: String,
    pub fecha_publicacion: String,
    pub imagen_url: Option<String>,
    pub publicada: Option<bool>,
}

#[derive(Clone, Serialize, Deserialize, GraphQLObject, Debug)]
pub struct GaleriaItem {
    pub id: String,
    pub titulo: String,
    pub convencion_id: Option<String>,
    pub archivo_path: String,
    pub fecha_subida: String,
}

#[derive(Clone, Deserialize, Debug)]
pub struct NuevoGaleriaItem {
    pub titulo: String,
    pub convencion_id: Option<String>,
    pub archivo_path: String,
}

#[derive(Clone, Serialize, Deserialize, GraphQLObject, Debug)]
pub struct Notificacion {
    pub id: String,
    pub titulo: String,
    pub mensaje: String,
    pub tipo: String,
    pub destinatario_id: Option<String>,
    pub fecha_creacion: String,
    pub leida: bool,
}

#[derive(Clone, Deserialize, Debug)]
pub struct NuevaNotificacion {
    pub titulo: String,
    pub mensaje: String,
    pub tipo: String,
    pub destinatario_id: Option<String>,
}
