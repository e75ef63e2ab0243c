pub mod convencion;
pub mod galeria;
pub mod noticia;
pub mod notificacion;
pub mod pastor;
