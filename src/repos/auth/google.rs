use crate::models::auth::{GoogleTokenInfo, GoogleTokenResponse};

const TOKENINFO_URL: &str = "https://oauth2.googleapis.com/tokeninfo";
const TOKEN_URL: &str = "https://oauth2.googleapis.com/token";
const AUTH_URL: &str = "https://accounts.google.com/o/oauth2/v2/auth";

/// Valida un id_token contra el endpoint tokeninfo de Google y verifica
/// que fue emitido para nuestro client_id.
pub async fn verificar_id_token(
    http: &reqwest::Client,
    id_token: &str,
    client_id: &str,
) -> Result<GoogleTokenInfo, String> {
    let respuesta = http
        .get(TOKENINFO_URL)
        .query(&[("id_token", id_token)])
        .send()
        .await
        .map_err(|_| "No se pudo contactar a Google".to_string())?;

    if !respuesta.status().is_success() {
        return Err("id_token rechazado por Google".to_string());
    }

    let info = respuesta
        .json::<GoogleTokenInfo>()
        .await
        .map_err(|_| "Respuesta de tokeninfo inesperada".to_string())?;

    if info.aud != client_id {
        return Err("El id_token no corresponde a esta aplicación".to_string());
    }

    Ok(info)
}

/// URL de consentimiento para el flujo authorize/callback
pub fn url_autorizacion(client_id: &str, redirect_uri: &str) -> String {
    format!(
        "{}?client_id={}&redirect_uri={}&response_type=code&scope=openid%20email%20profile",
        AUTH_URL, client_id, redirect_uri
    )
}

/// Intercambia el code del callback por un id_token
pub async fn intercambiar_codigo(
    http: &reqwest::Client,
    client_id: &str,
    client_secret: &str,
    redirect_uri: &str,
    code: &str,
) -> Result<String, String> {
    let parametros = [
        ("code", code),
        ("client_id", client_id),
        ("client_secret", client_secret),
        ("redirect_uri", redirect_uri),
        ("grant_type", "authorization_code"),
    ];

    let respuesta = http
        .post(TOKEN_URL)
        .form(&parametros)
        .send()
        .await
        .map_err(|_| "No se pudo contactar a Google".to_string())?;

    if !respuesta.status().is_success() {
        return Err("Google rechazó el code de autorización".to_string());
    }

    let token = respuesta
        .json::<GoogleTokenResponse>()
        .await
        .map_err(|_| "Respuesta del token endpoint inesperada".to_string())?;

    Ok(token.id_token)
}
