use actix_web::web::Data;
use juniper::{EmptyMutation, EmptySubscription, GraphQLType, GraphQLTypeAsync, RootNode};
use r2d2::Pool;
use redis::Client;

use crate::repos::credencial::CredencialRepo;
use crate::repos::inscripcion::InscripcionRepo;
use crate::repos::pago::PagoRepo;

// Contexto compartido por todas las queries GraphQL
#[derive(Clone)]
pub struct GeneralContext {
    pub pool: Data<Pool<Client>>,
    pub dias_por_vencer: i64,
}

impl GeneralContext {
    pub fn credencial_repo(&self) -> CredencialRepo {
        CredencialRepo {
            pool: self.pool.clone(),
            dias_por_vencer: self.dias_por_vencer,
        }
    }
    pub fn pago_repo(&self) -> PagoRepo {
        PagoRepo {
            pool: self.pool.clone(),
        }
    }
    pub fn inscripcion_repo(&self) -> InscripcionRepo {
        InscripcionRepo {
            pool: self.pool.clone(),
        }
    }
}

impl juniper::Context for GeneralContext {}

pub type GeneralSchema<T> =
    RootNode<'static, T, EmptyMutation<GeneralContext>, EmptySubscription<GeneralContext>>;

pub fn create_schema<GenericQuery>(query: GenericQuery) -> Data<GeneralSchema<GenericQuery>>
where
    GenericQuery: GraphQLTypeAsync<Context = GeneralContext, TypeInfo = ()>
        + GraphQLType<Context = GeneralContext>
        + Send
        + Sync,
    GenericQuery::TypeInfo: Send + Sync,
{
    let schema = RootNode::new(query, EmptyMutation::new(), EmptySubscription::new());

    // actix necesita el schema como app_data
    Data::new(schema)
}
