use actix_web::{
    web::{Data, Json, Query},
    HttpResponse,
};
use r2d2::Pool;
use redis::Client;

use crate::{
    config::{GoogleOAuth, JwtSecret},
    models::{
        auth::{GoogleCallbackQuery, GoogleTokenBody, LoginInfo, RegistroInfo},
        StatusMessage,
    },
    repos::auth::{
        crear_usuario, google,
        login_usuario, usuario_desde_google,
    },
};

pub async fn registro(
    body: Json<RegistroInfo>,
    pool: Data<Pool<Client>>,
    secret: Data<JwtSecret>,
) -> HttpResponse {
    let data = body.into_inner();

    match crear_usuario(
        &pool,
        data.usuario,
        data.clave,
        data.nombre_completo,
        &secret.0,
    ) {
        Ok(token_info) => HttpResponse::Ok().json(token_info),
        Err(err) => HttpResponse::BadRequest().json(err),
    }
}

pub async fn login(
    query: Query<LoginInfo>,
    pool: Data<Pool<Client>>,
    secret: Data<JwtSecret>,
) -> HttpResponse {
    let data = query.into_inner();

    match login_usuario(&pool, data.usuario, data.clave, &secret.0) {
        Ok(token_info) => HttpResponse::Ok().json(token_info),
        Err(err) => HttpResponse::Unauthorized().json(err),
    }
}

/// Flujo nativo: el SDK del móvil ya obtuvo el id_token, acá solo se valida
pub async fn google_nativo(
    body: Json<GoogleTokenBody>,
    http: Data<reqwest::Client>,
    oauth: Data<GoogleOAuth>,
    pool: Data<Pool<Client>>,
    secret: Data<JwtSecret>,
) -> HttpResponse {
    let info = match google::verificar_id_token(&http, &body.id_token, &oauth.client_id).await {
        Ok(info) => info,
        Err(message) => return HttpResponse::Unauthorized().json(StatusMessage { message }),
    };

    let nombre = info.name.unwrap_or_else(|| info.email.clone());
    match usuario_desde_google(&pool, info.email, nombre, &secret.0) {
        Ok(token_info) => HttpResponse::Ok().json(token_info),
        Err(err) => HttpResponse::BadRequest().json(err),
    }
}

/// Flujo proxy: redirige al consentimiento de Google
pub async fn google_authorize(oauth: Data<GoogleOAuth>) -> HttpResponse {
    HttpResponse::Found()
        .insert_header((
            "Location",
            google::url_autorizacion(&oauth.client_id, &oauth.redirect_uri),
        ))
        .finish()
}

pub async fn google_callback(
    query: Query<GoogleCallbackQuery>,
    http: Data<reqwest::Client>,
    oauth: Data<GoogleOAuth>,
    pool: Data<Pool<Client>>,
    secret: Data<JwtSecret>,
) -> HttpResponse {
    let id_token = match google::intercambiar_codigo(
        &http,
        &oauth.client_id,
        &oauth.client_secret,
        &oauth.redirect_uri,
        &query.code,
    )
    .await
    {
        Ok(id_token) => id_token,
        Err(message) => return HttpResponse::Unauthorized().json(StatusMessage { message }),
    };

    let info = match google::verificar_id_token(&http, &id_token, &oauth.client_id).await {
        Ok(info) => info,
        Err(message) => return HttpResponse::Unauthorized().json(StatusMessage { message }),
    };

    let nombre = info.name.unwrap_or_else(|| info.email.clone());
    match usuario_desde_google(&pool, info.email, nombre, &secret.0) {
        Ok(token_info) => HttpResponse::Ok().json(token_info),
        Err(err) => HttpResponse::BadRequest().json(err),
    }
}
