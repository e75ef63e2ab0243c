pub mod auth;
pub mod credencial;
pub mod file;
pub mod inscripcion;
pub mod pago;
pub mod recurso;
