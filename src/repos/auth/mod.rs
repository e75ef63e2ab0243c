use actix_web::web::Data;
use r2d2::Pool;
use redis::{cmd, Client, Commands};
use self::utils::{emitir_jwt, hashing_composite_key};

use crate::models::{auth::TokenInfo, StatusMessage};

pub mod google;
pub mod utils;

/// Alta de usuario del back-office. El access_token se deriva de las
/// credenciales y la referencia en la db es el hash del token.
pub fn crear_usuario(
    pool: &Data<Pool<Client>>,
    usuario: String,
    clave: String,
    nombre_completo: String,
    jwt_secret: &str,
) -> Result<TokenInfo, StatusMessage> {
    let mut con = pool.get().map_err(|_| StatusMessage {
        message: "No se pudo conectar al pool".to_string(),
    })?;

    let access_token = hashing_composite_key(&[&usuario, &clave]);
    let db_key = hashing_composite_key(&[&access_token]);

    // El marcador de usuario en uso es lo único indexado por nombre
    match cmd("GET")
        .arg(format!("usuarios_en_uso:{}", &usuario))
        .query::<String>(&mut con)
    {
        // Err = la clave no existe todavía, el nombre está libre
        Err(_) => {
            let _: () = con
                .set(format!("usuarios_en_uso:{}", &usuario), "")
                .map_err(|_| StatusMessage {
                    message: "No se pudo registrar el usuario".to_string(),
                })?;

            let _: () = con
                .set(
                    format!("usuarios:{}:nombre_completo", &db_key),
                    &nombre_completo,
                )
                .map_err(|_| StatusMessage {
                    message: "No se pudo registrar el usuario".to_string(),
                })?;

            // Nadie nace admin
            let _: () = con
                .set(format!("usuarios:{}:es_admin", &db_key), false)
                .map_err(|_| StatusMessage {
                    message: "No se pudo registrar el usuario".to_string(),
                })?;

            let jwt = emitir_jwt(jwt_secret, &db_key, &nombre_completo)
                .map_err(|message| StatusMessage { message })?;

            Ok(TokenInfo {
                access_token,
                jwt,
                nombre_completo,
            })
        }

        Ok(_) => Err(StatusMessage {
            message: "El usuario ya existe".to_string(),
        }),
    }
}

pub fn login_usuario(
    pool: &Data<Pool<Client>>,
    usuario: String,
    clave: String,
    jwt_secret: &str,
) -> Result<TokenInfo, StatusMessage> {
    let mut con = pool.get().map_err(|_| StatusMessage {
        message: "No se pudo conectar al pool".to_string(),
    })?;

    let access_token = hashing_composite_key(&[&usuario, &clave]);
    let db_key = hashing_composite_key(&[&access_token]);

    match con.get::<String, String>(format!("usuarios:{}:nombre_completo", &db_key)) {
        Ok(nombre_completo) => {
            let jwt = emitir_jwt(jwt_secret, &db_key, &nombre_completo)
                .map_err(|message| StatusMessage { message })?;

            Ok(TokenInfo {
                access_token,
                jwt,
                nombre_completo,
            })
        }
        Err(_) => Err(StatusMessage {
            message: "Usuario o contraseña incorrectos".to_string(),
        }),
    }
}

/// Upsert para los flujos de Google: la identidad viene verificada por el
/// tokeninfo endpoint, acá solo se materializa el usuario.
pub fn usuario_desde_google(
    pool: &Data<Pool<Client>>,
    email: String,
    nombre_completo: String,
    jwt_secret: &str,
) -> Result<TokenInfo, StatusMessage> {
    let mut con = pool.get().map_err(|_| StatusMessage {
        message: "No se pudo conectar al pool".to_string(),
    })?;

    let access_token = hashing_composite_key(&[&"google".to_string(), &email]);
    let db_key = hashing_composite_key(&[&access_token]);

    let ya_existe: bool = con
        .exists(format!("usuarios:{}:nombre_completo", &db_key))
        .map_err(|_| StatusMessage {
            message: "No se pudo verificar el usuario".to_string(),
        })?;

    if !ya_existe {
        let _: () = con
            .set(
                format!("usuarios:{}:nombre_completo", &db_key),
                &nombre_completo,
            )
            .map_err(|_| StatusMessage {
                message: "No se pudo registrar el usuario".to_string(),
            })?;

        let _: () = con
            .set(format!("usuarios:{}:es_admin", &db_key), false)
            .map_err(|_| StatusMessage {
                message: "No se pudo registrar el usuario".to_string(),
            })?;
    }

    let jwt = emitir_jwt(jwt_secret, &db_key, &nombre_completo)
        .map_err(|message| StatusMessage { message })?;

    Ok(TokenInfo {
        access_token,
        jwt,
        nombre_completo,
    })
}
