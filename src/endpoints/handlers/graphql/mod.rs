pub(crate) mod admin;

use actix_web::{web, HttpResponse};
use juniper::{http::GraphQLRequest, GraphQLType, GraphQLTypeAsync};
use r2d2::Pool;
use redis::Client;

use crate::config::VentanaPorVencer;

use super::configs::schema::{GeneralContext, GeneralSchema};

// Handler genérico: arma el contexto por request y ejecuta contra el schema
pub async fn graphql<GenericQuery>(
    pool: web::Data<Pool<Client>>,
    ventana: web::Data<VentanaPorVencer>,
    data: web::Json<GraphQLRequest>,
    schema: web::Data<GeneralSchema<GenericQuery>>,
) -> HttpResponse
where
    GenericQuery: GraphQLTypeAsync<Context = GeneralContext>
        + GraphQLType<Context = GeneralContext>
        + Send
        + Sync,
    GenericQuery::TypeInfo: Send + Sync,
{
    let context = GeneralContext {
        pool,
        dias_por_vencer: ventana.0,
    };

    let res = data.execute(&schema, &context).await;

    HttpResponse::Ok().json(res)
}
