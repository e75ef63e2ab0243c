pub mod auth;
pub mod credencial;
pub mod file;
pub mod inscripcion;
pub mod mercado_pago;
pub mod pago;
pub mod recurso;
pub mod utils;
