use juniper::{GraphQLEnum, GraphQLObject};
use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, GraphQLEnum)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum EstadoPago {
    Pendiente,
    Completado,
    Rechazado,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, GraphQLEnum)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum EstadoInscripcion {
    Pendiente,
    Confirmada,
    Cancelada,
}

/// Cuota de pago de una inscripción. La referencia es el payment_id de
/// Mercado Pago una vez conciliado.
#[derive(Clone, Serialize, Deserialize, GraphQLObject, Debug)]
pub struct Pago {
    pub id: String,
    pub inscripcion_id: String,
    pub numero_cuota: i32,
    pub monto: f64,
    pub estado: EstadoPago,
    pub metodo_pago: Option<String>,
    pub referencia: Option<String>,
    pub preferencia_id: Option<String>,
    pub comprobante_url: Option<String>,
    pub fecha_pago: Option<String>,
}

#[derive(Clone, Serialize, Deserialize, GraphQLObject, Debug)]
pub struct Inscripcion {
    pub id: String,
    pub convencion_id: String,
    pub nombre_completo: String,
    pub email: String,
    pub telefono: Option<String>,
    pub iglesia: Option<String>,
    pub monto_total: f64,
    pub cantidad_cuotas: i32,
    pub fecha_registro: String,
    pub estado: EstadoInscripcion,
}

/// Campos editables de una inscripción. El monto y las cuotas quedan fijos
/// una vez generadas, y el estado solo lo toca el admin (p. ej. CANCELADA).
#[derive(Clone, Deserialize, Debug)]
pub struct ActualizacionInscripcion {
    pub nombre_completo: String,
    pub email: String,
    pub telefono: Option<String>,
    pub iglesia: Option<String>,
    pub estado: Option<EstadoInscripcion>,
}

#[derive(Clone, Deserialize, Debug)]
pub struct NuevaInscripcion {
    pub convencion_id: String,
    pub nombre_completo: String,
    pub email: String,
    pub telefono: Option<String>,
    pub iglesia: Option<String>,
    pub monto_total: f64,
    pub cantidad_cuotas: i32,
}

/// Vista agregada de lo pagado por una inscripción (para el back-office)
#[derive(Clone, Serialize, GraphQLObject, Debug)]
pub struct ResumenInscripcion {
    pub inscripcion_id: String,
    pub monto_total: f64,
    pub pagado: f64,
    pub saldo: f64,
    pub cuotas_pagadas: i32,
    pub cuotas_totales: i32,
}
