// Tests de integración contra un Redis local (redis://127.0.0.1/). Se corren
// con `cargo test -- --ignored` y limpian sus claves con un guard.

use actix_web::web::Data;
use r2d2::Pool;
use rand::Rng;
use redis::{Client, Commands};

use convencion_api::models::credencial::{EstadoCredencial, NuevaCredencial};
use convencion_api::models::pago::{EstadoPago, NuevaInscripcion};
use convencion_api::repos::credencial::CredencialRepo;
use convencion_api::repos::inscripcion::InscripcionRepo;
use convencion_api::repos::pago::PagoRepo;

// Sufijo aleatorio para que corridas repetidas no pisen las mismas claves
fn sufijo_de_test() -> u32 {
    rand::rng().random_range(100_000..999_999)
}

fn pool_de_test() -> Data<Pool<Client>> {
    let client = Client::open("redis://127.0.0.1/").expect("No se pudo conectar a Redis");
    let pool = Pool::builder()
        .build(client)
        .expect("No se pudo crear el pool de Redis");
    Data::new(pool)
}

/// Guarda claves creadas por tests y las borra automáticamente al hacer `drop`
struct TestRedisGuard {
    pool: Data<Pool<Client>>,
    keys: Vec<String>,
}

impl TestRedisGuard {
    fn new(pool: Data<Pool<Client>>) -> Self {
        TestRedisGuard {
            pool,
            keys: Vec::new(),
        }
    }

    fn register_key(&mut self, key: String) {
        self.keys.push(key);
    }
}

impl Drop for TestRedisGuard {
    fn drop(&mut self) {
        if let Ok(mut con) = self.pool.get() {
            for key in &self.keys {
                let _: () = con.del(key).unwrap_or(());
            }
        }
    }
}

#[test]
#[ignore = "requiere un Redis local corriendo"]
fn el_listado_deriva_el_estado_aunque_el_documento_mienta() {
    let pool = pool_de_test();
    let mut guard = TestRedisGuard::new(pool.clone());

    let repo = CredencialRepo {
        pool: pool.clone(),
        dias_por_vencer: 30,
    };

    let sufijo = sufijo_de_test();
    let credencial = repo
        .crear(NuevaCredencial {
            pastor_id: format!("pastor_guard_{}", sufijo),
            numero_credencial: format!("CP-GUARD-{}", sufijo),
            fecha_emision: "2020-01-01".to_string(),
            fecha_vencimiento: Some("2020-12-31".to_string()),
            activa: Some(true),
            notas: None,
        })
        .expect("No se pudo crear la credencial de prueba");
    guard.register_key(format!("credenciales:{}", credencial.id));

    let leida = repo
        .obtener(&credencial.id)
        .expect("Fallo la lectura")
        .expect("La credencial debía existir");
    assert_eq!(leida.estado, EstadoCredencial::Vencida);
}

#[test]
#[ignore = "requiere un Redis local corriendo"]
fn actualizar_estados_reporta_los_cambios() {
    let pool = pool_de_test();
    let mut guard = TestRedisGuard::new(pool.clone());

    let repo = CredencialRepo {
        pool: pool.clone(),
        dias_por_vencer: 30,
    };

    let hoy = chrono::Utc::now().date_naive();
    let sufijo = sufijo_de_test();
    let credencial = repo
        .crear(NuevaCredencial {
            pastor_id: format!("pastor_cambios_{}", sufijo),
            numero_credencial: format!("CP-CAMBIOS-{}", sufijo),
            fecha_emision: "2020-01-01".to_string(),
            fecha_vencimiento: Some(
                (hoy + chrono::Duration::days(10)).format("%Y-%m-%d").to_string(),
            ),
            activa: Some(true),
            notas: None,
        })
        .expect("No se pudo crear la credencial de prueba");
    guard.register_key(format!("credenciales:{}", credencial.id));

    // vista desde 20 días en el futuro la credencial ya venció
    let resumen = repo
        .actualizar_estados(hoy + chrono::Duration::days(20))
        .expect("Fallo el recálculo");

    let cambio = resumen
        .cambios
        .iter()
        .find(|cambio| cambio.credencial_id == credencial.id)
        .expect("El recálculo debía reportar el cambio");
    assert_eq!(cambio.anterior, EstadoCredencial::PorVencer);
    assert_eq!(cambio.nuevo, EstadoCredencial::Vencida);
}

#[test]
#[ignore = "requiere un Redis local corriendo"]
fn las_cuotas_suman_el_monto_total_exacto() {
    let pool = pool_de_test();
    let mut guard = TestRedisGuard::new(pool.clone());

    let repo = InscripcionRepo { pool: pool.clone() };
    let (inscripcion, pagos) = repo
        .crear(NuevaInscripcion {
            convencion_id: "conv_test".to_string(),
            nombre_completo: "Prueba Cuotas".to_string(),
            email: "cuotas@test.com".to_string(),
            telefono: None,
            iglesia: None,
            monto_total: 100.0,
            cantidad_cuotas: 3,
        })
        .expect("No se pudo crear la inscripción");

    guard.register_key(format!("inscripciones:{}:registro", inscripcion.id));
    for pago in &pagos {
        guard.register_key(format!(
            "inscripciones:{}:pagos:{}",
            inscripcion.id, pago.id
        ));
    }

    assert_eq!(pagos.len(), 3);
    let centavos: i64 = pagos
        .iter()
        .map(|pago| (pago.monto * 100.0).round() as i64)
        .sum();
    assert_eq!(centavos, 10000, "Las cuotas deben sumar el total exacto");
}

#[test]
#[ignore = "requiere un Redis local corriendo"]
fn la_conciliacion_no_degrada_un_pago_completado() {
    let pool = pool_de_test();
    let mut guard = TestRedisGuard::new(pool.clone());

    let inscripciones = InscripcionRepo { pool: pool.clone() };
    let pagos = PagoRepo { pool: pool.clone() };

    let (inscripcion, cuotas) = inscripciones
        .crear(NuevaInscripcion {
            convencion_id: "conv_test".to_string(),
            nombre_completo: "Prueba Downgrade".to_string(),
            email: "downgrade@test.com".to_string(),
            telefono: None,
            iglesia: None,
            monto_total: 50.0,
            cantidad_cuotas: 1,
        })
        .expect("No se pudo crear la inscripción");

    guard.register_key(format!("inscripciones:{}:registro", inscripcion.id));
    for cuota in &cuotas {
        guard.register_key(format!(
            "inscripciones:{}:pagos:{}",
            inscripcion.id, cuota.id
        ));
    }

    let referencia = format!("{}:1", inscripcion.id);

    // primero llega el approved
    let aprobado = pagos
        .conciliar_desde_gateway(&referencia, EstadoPago::Completado, "111", None, None)
        .expect("Fallo la conciliación")
        .expect("La cuota debía existir");
    assert_eq!(aprobado.estado, EstadoPago::Completado);

    // después un snapshot viejo in_process: no debe pisar el COMPLETADO
    let resultado = pagos
        .conciliar_desde_gateway(&referencia, EstadoPago::Pendiente, "111", None, None)
        .expect("Fallo la conciliación")
        .expect("La cuota debía existir");
    assert_eq!(
        resultado.estado,
        EstadoPago::Completado,
        "Un COMPLETADO nunca vuelve a PENDIENTE"
    );
}
