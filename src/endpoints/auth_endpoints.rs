use actix_web::web::{self, get, post, resource};

use super::handlers::rest::auth::{
    google_authorize, google_callback, google_nativo, login, registro,
};

pub fn auth_config(config: &mut web::ServiceConfig) {
    config
        .service(resource("/api/auth/registro").route(post().to(registro)))
        .service(resource("/api/auth/login").route(get().to(login)))
        .service(resource("/api/auth/google").route(post().to(google_nativo)))
        .service(resource("/api/auth/google/authorize").route(get().to(google_authorize)))
        .service(resource("/api/auth/google/callback").route(get().to(google_callback)));
}
