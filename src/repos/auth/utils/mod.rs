use actix_web::HttpRequest;
use chrono::Utc;
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use sha2::{Digest, Sha256};

use crate::models::{auth::Claims, StatusMessage};

/// Dada una lista de argumentos devuelve la llave compuesta hasheada en hex
pub fn hashing_composite_key(args: &[&String]) -> String {
    let mut acumulado = String::new();

    for arg in args {
        acumulado = format!("{}{}", &acumulado, arg);
    }

    let hashed = Sha256::digest(acumulado);

    // X mayúscula = hexadecimal en mayúsculas
    format!("{:X}", hashed)
}

const JWT_VIGENCIA_SEGUNDOS: i64 = 60 * 60 * 24;

/// Emite el JWT HS256 que esperan los guards de mutación
pub fn emitir_jwt(secret: &str, sub: &str, nombre: &str) -> Result<String, String> {
    let ahora = Utc::now().timestamp();
    let claims = Claims {
        sub: sub.to_owned(),
        nombre: nombre.to_owned(),
        iat: ahora,
        exp: ahora + JWT_VIGENCIA_SEGUNDOS,
    };

    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(secret.as_bytes()),
    )
    .map_err(|_| "No se pudo firmar el token".to_string())
}

pub fn validar_jwt(secret: &str, token: &str) -> Result<Claims, String> {
    decode::<Claims>(
        token,
        &DecodingKey::from_secret(secret.as_bytes()),
        &Validation::default(),
    )
    .map(|data| data.claims)
    .map_err(|_| "Token inválido o expirado".to_string())
}

/// Guard para los handlers de mutación: exige `Authorization: Bearer <jwt>`
pub fn requiere_jwt(req: &HttpRequest, secret: &str) -> Result<Claims, StatusMessage> {
    let header = req
        .headers()
        .get("Authorization")
        .and_then(|valor| valor.to_str().ok())
        .ok_or(StatusMessage {
            message: "Falta el header Authorization".to_string(),
        })?;

    let token = header.strip_prefix("Bearer ").ok_or(StatusMessage {
        message: "El header Authorization debe ser Bearer".to_string(),
    })?;

    validar_jwt(secret, token).map_err(|message| StatusMessage { message })
}
