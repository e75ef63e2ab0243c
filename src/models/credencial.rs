use chrono::{Duration, NaiveDate};
use juniper::{GraphQLEnum, GraphQLObject};
use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, GraphQLEnum)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum EstadoCredencial {
    Vigente,
    PorVencer,
    Vencida,
    SinCredencial,
}

impl EstadoCredencial {
    pub fn as_str(&self) -> &'static str {
        match self {
            EstadoCredencial::Vigente => "VIGENTE",
            EstadoCredencial::PorVencer => "POR_VENCER",
            EstadoCredencial::Vencida => "VENCIDA",
            EstadoCredencial::SinCredencial => "SIN_CREDENCIAL",
        }
    }

    /// Para el query param ?estado= de la API REST
    pub fn desde_str(valor: &str) -> Option<EstadoCredencial> {
        match valor {
            "VIGENTE" => Some(EstadoCredencial::Vigente),
            "POR_VENCER" => Some(EstadoCredencial::PorVencer),
            "VENCIDA" => Some(EstadoCredencial::Vencida),
            "SIN_CREDENCIAL" => Some(EstadoCredencial::SinCredencial),
            _ => None,
        }
    }
}

/// Clasifica una credencial según su fecha de vencimiento respecto a `hoy`.
///
/// - Sin fecha => SIN_CREDENCIAL
/// - fecha < hoy => VENCIDA
/// - hoy <= fecha < hoy + ventana => POR_VENCER
/// - en otro caso => VIGENTE
///
/// Una credencial que vence hoy todavía no está vencida (VENCIDA es estricto).
pub fn clasificar_estado(
    fecha_vencimiento: Option<NaiveDate>,
    hoy: NaiveDate,
    dias_ventana: i64,
) -> EstadoCredencial {
    match fecha_vencimiento {
        None => EstadoCredencial::SinCredencial,
        Some(fecha) if fecha < hoy => EstadoCredencial::Vencida,
        Some(fecha) if fecha < hoy + Duration::days(dias_ventana) => EstadoCredencial::PorVencer,
        Some(_) => EstadoCredencial::Vigente,
    }
}

// Fechas como string %Y-%m-%d, igual que el resto de la API
#[derive(Clone, Serialize, Deserialize, GraphQLObject, Debug)]
pub struct CredencialPastoral {
    pub id: String,
    pub pastor_id: String,
    pub numero_credencial: String,
    pub fecha_emision: String,
    pub fecha_vencimiento: Option<String>,
    pub estado: EstadoCredencial,
    pub activa: bool,
    pub notas: Option<String>,
}

impl CredencialPastoral {
    /// El estado nunca se confía del documento guardado, siempre se re-deriva.
    /// Una fecha que no parsea se trata como credencial sin fecha.
    pub fn estado_derivado(&self, hoy: NaiveDate, dias_ventana: i64) -> EstadoCredencial {
        let fecha = match &self.fecha_vencimiento {
            Some(texto) => match NaiveDate::parse_from_str(texto, "%Y-%m-%d") {
                Ok(fecha) => Some(fecha),
                Err(_) => {
                    log::warn!(
                        "fecha_vencimiento inválida '{}' en credencial {}",
                        texto,
                        self.id
                    );
                    None
                }
            },
            None => None,
        };
        clasificar_estado(fecha, hoy, dias_ventana)
    }
}

#[derive(Clone, Deserialize, Debug)]
pub struct NuevaCredencial {
    pub pastor_id: String,
    pub numero_credencial: String,
    pub fecha_emision: String,
    pub fecha_vencimiento: Option<String>,
    pub activa: Option<bool>,
    pub notas: Option<String>,
}

/// Resultado de la acción admin "Actualizar Estados"
#[derive(Clone, Serialize, Debug)]
pub struct ResumenActualizacion {
    pub total: i32,
    pub vigentes: i32,
    pub por_vencer: i32,
    pub vencidas: i32,
    pub sin_credencial: i32,
    pub cambios: Vec<CambioEstado>,
}

#[derive(Clone, Serialize, Debug)]
pub struct CambioEstado {
    pub credencial_id: String,
    pub pastor_id: String,
    pub numero_credencial: String,
    pub anterior: EstadoCredencial,
    pub nuevo: EstadoCredencial,
}
