use actix_web::web::{self, get, post, resource, Data};

use super::handlers::rest::pago::{
    crear_preferencia, estado_pago, procesar, procesar_preferencia, webhook,
};
use crate::repos::mercado_pago::MercadoPagoClient;

pub fn pago_endpoints(config: &mut web::ServiceConfig, mp_client: MercadoPagoClient) {
    config
        .app_data(Data::new(mp_client))
        .service(resource("/api/pagos/preferencia").route(post().to(crear_preferencia)))
        .service(resource("/api/pagos/estado/{payment_id}").route(get().to(estado_pago)))
        .service(resource("/api/pagos/webhook").route(post().to(webhook)))
        .service(resource("/api/pagos/procesar/{payment_id}").route(post().to(procesar)))
        .service(
            resource("/api/pagos/procesar-por-preferencia/{preference_id}")
                .route(post().to(procesar_preferencia)),
        );
}
