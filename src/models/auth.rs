use serde::{Deserialize, Serialize};

#[derive(Clone, Deserialize, Debug)]
pub struct RegistroInfo {
    pub usuario: String,
    pub clave: String,
    pub nombre_completo: String,
}

#[derive(Clone, Deserialize, Debug)]
pub struct LoginInfo {
    pub usuario: String,
    pub clave: String,
}

// El access_token es la llave compuesta de las credenciales, el jwt es
// lo que esperan los guards de mutación
#[derive(Clone, Serialize, Debug)]
pub struct TokenInfo {
    pub access_token: String,
    pub jwt: String,
    pub nombre_completo: String,
}

/// Claims del JWT (HS256)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    pub sub: String,
    pub nombre: String,
    pub exp: i64,
    pub iat: i64,
}

// --- Google OAuth ---

#[derive(Clone, Deserialize, Debug)]
pub struct GoogleTokenBody {
    pub id_token: String,
}

// Lo que devuelve https://oauth2.googleapis.com/tokeninfo
#[derive(Clone, Deserialize, Debug)]
pub struct GoogleTokenInfo {
    pub aud: String,
    pub sub: String,
    pub email: String,
    pub name: Option<String>,
}

#[derive(Clone, Deserialize, Debug)]
pub struct GoogleCallbackQuery {
    pub code: String,
    pub state: Option<String>,
}

#[derive(Clone, Deserialize, Debug)]
pub struct GoogleTokenResponse {
    pub id_token: String,
}
