use redis::{from_redis_value, Commands, Connection, JsonCommands, Value as RedisValue};
use serde::de::DeserializeOwned;
use serde_json::from_str;

// JSON.GET con path "$" devuelve el documento envuelto en un array,
// de ahí el Vec<T> intermedio en todo lo que sigue.

/// Lee un documento JSON por clave exacta. Clave inexistente => Ok(None).
pub fn leer_documento<T: DeserializeOwned>(
    con: &mut Connection,
    clave: &str,
) -> Result<Option<T>, String> {
    let raw = con
        .json_get::<&str, &str, RedisValue>(clave, "$")
        .map_err(|_| format!("Error leyendo la clave {}", clave))?;
    if let RedisValue::Nil = raw {
        return Ok(None);
    }
    let nested = from_redis_value::<String>(&raw).map_err(|_| "Error parseando valor de redis")?;
    let documentos =
        from_str::<Vec<T>>(&nested).map_err(|_| format!("Error deserializando {}", clave))?;
    Ok(documentos.into_iter().next())
}

/// Escanea todas las claves que matchean el patrón y deserializa cada documento.
/// Documentos con forma inesperada se ignoran.
pub fn listar_documentos<T: DeserializeOwned>(
    con: &mut Connection,
    patron: String,
) -> Result<Vec<T>, String> {
    let claves: Vec<String> = {
        let iter = con
            .scan_match::<String, String>(patron)
            .map_err(|_| "Error escaneando claves")?;
        iter.collect()
    };

    let mut documentos = Vec::new();
    for clave in claves.iter() {
        let raw = con
            .json_get::<String, &str, RedisValue>(clave.clone(), "$")
            .map_err(|_| format!("Error leyendo la clave {}", clave))?;
        let nested =
            from_redis_value::<String>(&raw).map_err(|_| "Error parseando valor de redis")?;
        let parseados = match from_str::<Vec<T>>(&nested) {
            Ok(parseados) => parseados,
            Err(_) => continue,
        };
        if parseados.len() != 1 {
            continue;
        }
        if let Some(documento) = parseados.into_iter().next() {
            documentos.push(documento);
        }
    }
    Ok(documentos)
}

pub fn guardar_documento<T: serde::Serialize>(
    con: &mut Connection,
    clave: String,
    documento: &T,
) -> Result<(), String> {
    con.json_set::<_, _, _, ()>(clave, "$", documento)
        .map_err(|_| "Error guardando documento".to_string())
}

/// DEL devuelve cuántas claves borró, con eso sabemos si existía.
pub fn borrar_documento(con: &mut Connection, clave: String) -> Result<bool, String> {
    let borradas: i32 = con
        .del(clave)
        .map_err(|_| "Error borrando documento".to_string())?;
    Ok(borradas > 0)
}
