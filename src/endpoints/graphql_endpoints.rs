use actix_web::{web, HttpResponse};
use juniper::http::graphiql::graphiql_source;

use super::handlers::{
    configs::schema::create_schema,
    graphql::{admin::AdminQuery, graphql},
};

pub fn graphql_config(config: &mut web::ServiceConfig) {
    let admin_schema = create_schema(AdminQuery {});
    config
        .app_data(admin_schema)
        .service(web::resource("/graphql").route(web::post().to(graphql::<AdminQuery>)))
        .service(web::resource("/graphiql").route(web::get().to(graphiql)));
}

// Página para probar queries a mano
async fn graphiql() -> HttpResponse {
    let html = graphiql_source("/graphql", None);

    HttpResponse::Ok()
        .content_type("text/html; charset=utf-8")
        .body(html)
}
