use crate::{
    endpoints::handlers::configs::schema::GeneralContext,
    models::{
        credencial::{CredencialPastoral, EstadoCredencial},
        pago::{EstadoPago, Inscripcion, Pago, ResumenInscripcion},
    },
};

pub struct AdminQuery {}

#[juniper::graphql_object(
    Context = GeneralContext,
)]
impl AdminQuery {
    /// Todas las credenciales con el estado derivado al momento de la consulta,
    /// opcionalmente filtradas por estado
    pub async fn credenciales(
        context: &GeneralContext,
        estado: Option<EstadoCredencial>,
    ) -> Result<Vec<CredencialPastoral>, String> {
        match estado {
            Some(estado) => context.credencial_repo().listar_por_estado(estado),
            None => context.credencial_repo().listar(),
        }
    }

    pub async fn credenciales_de_pastor(
        context: &GeneralContext,
        pastor_id: String,
    ) -> Result<Vec<CredencialPastoral>, String> {
        context.credencial_repo().listar_por_pastor(&pastor_id)
    }

    /// Cuotas de una inscripción, ordenadas por número
    pub async fn pagos_de_inscripcion(
        context: &GeneralContext,
        inscripcion_id: String,
    ) -> Result<Vec<Pago>, String> {
        context.pago_repo().listar_por_inscripcion(&inscripcion_id)
    }

    pub async fn inscripciones_de_convencion(
        context: &GeneralContext,
        convencion_id: String,
    ) -> Result<Vec<Inscripcion>, String> {
        context
            .inscripcion_repo()
            .listar_por_convencion(&convencion_id)
    }

    /// La vista de saldo que muestra el back-office por inscripción
    pub async fn resumen_inscripcion(
        context: &GeneralContext,
        inscripcion_id: String,
    ) -> Result<ResumenInscripcion, String> {
        let inscripcion = context
            .inscripcion_repo()
            .obtener(&inscripcion_id)?
            .ok_or(format!("No existe la inscripción {}", inscripcion_id))?;

        let pagos = context.pago_repo().listar_por_inscripcion(&inscripcion_id)?;

        let pagado: f64 = pagos
            .iter()
            .filter(|pago| pago.estado == EstadoPago::Completado)
            .map(|pago| pago.monto)
            .sum();
        let cuotas_pagadas = pagos
            .iter()
            .filter(|pago| pago.estado == EstadoPago::Completado)
            .count() as i32;

        Ok(ResumenInscripcion {
            inscripcion_id,
            monto_total: inscripcion.monto_total,
            pagado,
            saldo: inscripcion.monto_total - pagado,
            cuotas_pagadas,
            cuotas_totales: inscripcion.cantidad_cuotas,
        })
    }
}
