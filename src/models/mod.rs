use serde::Serialize;

pub mod auth;
pub mod credencial;
pub mod file;
pub mod mercado_pago;
pub mod pago;
pub mod recursos;

// Cuerpo JSON estándar para errores y confirmaciones simples
#[derive(Clone, Serialize, Debug)]
pub struct StatusMessage {
    pub message: String,
}

#[derive(Clone, Serialize)]
pub struct GeneralInfo {
    pub api_version: String,
}
