// Tests de la parte pura de auth: hashing de llaves compuestas y JWT.
// El alta/login contra Redis vive en tests/repos_redis.rs.

use actix_web::test::TestRequest;
use chrono::Utc;
use convencion_api::models::auth::Claims;
use convencion_api::repos::auth::utils::{
    emitir_jwt, hashing_composite_key, requiere_jwt, validar_jwt,
};
use jsonwebtoken::{encode, EncodingKey, Header};

const SECRET: &str = "secreto-de-test";

#[test]
fn el_hash_es_deterministico_y_hex() {
    let usuario = "pastor_perez".to_string();
    let clave = "clave123".to_string();

    let primero = hashing_composite_key(&[&usuario, &clave]);
    let segundo = hashing_composite_key(&[&usuario, &clave]);

    assert_eq!(primero, segundo);
    assert_eq!(primero.len(), 64, "SHA256 en hex son 64 caracteres");
    assert!(primero.chars().all(|c| c.is_ascii_hexdigit()));
}

#[test]
fn credenciales_distintas_dan_llaves_distintas() {
    let usuario = "pastor_perez".to_string();
    let clave_a = "clave123".to_string();
    let clave_b = "clave124".to_string();

    assert_ne!(
        hashing_composite_key(&[&usuario, &clave_a]),
        hashing_composite_key(&[&usuario, &clave_b])
    );
}

#[test]
fn jwt_ida_y_vuelta() {
    let token = emitir_jwt(SECRET, "db_key_abc", "Juan Pérez").unwrap();
    let claims = validar_jwt(SECRET, &token).unwrap();

    assert_eq!(claims.sub, "db_key_abc");
    assert_eq!(claims.nombre, "Juan Pérez");
    assert!(claims.exp > claims.iat);
}

#[test]
fn jwt_con_otro_secreto_no_valida() {
    let token = emitir_jwt(SECRET, "db_key_abc", "Juan Pérez").unwrap();
    assert!(validar_jwt("otro-secreto", &token).is_err());
}

#[test]
fn jwt_expirado_no_valida() {
    let ahora = Utc::now().timestamp();
    let claims = Claims {
        sub: "db_key_abc".to_string(),
        nombre: "Juan Pérez".to_string(),
        iat: ahora - 7200,
        exp: ahora - 3600,
    };
    let token = encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(SECRET.as_bytes()),
    )
    .unwrap();

    assert!(validar_jwt(SECRET, &token).is_err());
}

#[test]
fn el_guard_exige_el_header() {
    let req = TestRequest::default().to_http_request();
    assert!(requiere_jwt(&req, SECRET).is_err());
}

#[test]
fn el_guard_exige_el_esquema_bearer() {
    let token = emitir_jwt(SECRET, "db_key_abc", "Juan Pérez").unwrap();
    let req = TestRequest::default()
        .insert_header(("Authorization", token))
        .to_http_request();
    assert!(
        requiere_jwt(&req, SECRET).is_err(),
        "Sin el prefijo Bearer no debe pasar"
    );
}

#[test]
fn el_guard_acepta_un_bearer_valido() {
    let token = emitir_jwt(SECRET, "db_key_abc", "Juan Pérez").unwrap();
    let req = TestRequest::default()
        .insert_header(("Authorization", format!("Bearer {}", token)))
        .to_http_request();

    let claims = requiere_jwt(&req, SECRET).expect("El guard debía aceptar el token");
    assert_eq!(claims.sub, "db_key_abc");
}
