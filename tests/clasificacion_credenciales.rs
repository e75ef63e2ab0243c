// Tests de la clasificación de credenciales por fecha de vencimiento.
// No tocan Redis: la clasificación es una función pura de la fecha.

use chrono::{Duration, NaiveDate};
use convencion_api::models::credencial::{
    clasificar_estado, CredencialPastoral, EstadoCredencial,
};

const VENTANA: i64 = 30;

fn hoy_fijo() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 8, 30).unwrap()
}

fn credencial_con_fecha(fecha_vencimiento: Option<&str>) -> CredencialPastoral {
    CredencialPastoral {
        id: "cred_test".to_string(),
        pastor_id: "pastor_test".to_string(),
        numero_credencial: "CP-0001".to_string(),
        fecha_emision: "2024-01-01".to_string(),
        fecha_vencimiento: fecha_vencimiento.map(|fecha| fecha.to_string()),
        estado: EstadoCredencial::Vigente,
        activa: true,
        notas: None,
    }
}

#[test]
fn vencida_si_la_fecha_ya_paso() {
    let hoy = hoy_fijo();
    let ayer = hoy - Duration::days(1);
    assert_eq!(
        clasificar_estado(Some(ayer), hoy, VENTANA),
        EstadoCredencial::Vencida,
        "Una fecha de ayer debe clasificar VENCIDA"
    );
}

#[test]
fn la_que_vence_hoy_todavia_no_esta_vencida() {
    let hoy = hoy_fijo();
    assert_eq!(
        clasificar_estado(Some(hoy), hoy, VENTANA),
        EstadoCredencial::PorVencer,
        "VENCIDA es estricto, vencer hoy es POR_VENCER"
    );
}

#[test]
fn por_vencer_dentro_de_la_ventana() {
    let hoy = hoy_fijo();
    assert_eq!(
        clasificar_estado(Some(hoy + Duration::days(10)), hoy, VENTANA),
        EstadoCredencial::PorVencer
    );
    // el último día dentro de la ventana
    assert_eq!(
        clasificar_estado(Some(hoy + Duration::days(29)), hoy, VENTANA),
        EstadoCredencial::PorVencer
    );
}

#[test]
fn vigente_fuera_de_la_ventana() {
    let hoy = hoy_fijo();
    // justo en el borde: hoy + 30 ya no está dentro de la ventana
    assert_eq!(
        clasificar_estado(Some(hoy + Duration::days(30)), hoy, VENTANA),
        EstadoCredencial::Vigente
    );
    assert_eq!(
        clasificar_estado(Some(hoy + Duration::days(40)), hoy, VENTANA),
        EstadoCredencial::Vigente
    );
}

#[test]
fn sin_fecha_es_sin_credencial() {
    assert_eq!(
        clasificar_estado(None, hoy_fijo(), VENTANA),
        EstadoCredencial::SinCredencial
    );
}

/// El estado solo se mueve hacia "más vencida" a medida que avanza el tiempo
#[test]
fn la_clasificacion_es_monotona_en_el_tiempo() {
    fn rango(estado: EstadoCredencial) -> i32 {
        match estado {
            EstadoCredencial::Vigente => 0,
            EstadoCredencial::PorVencer => 1,
            EstadoCredencial::Vencida => 2,
            EstadoCredencial::SinCredencial => panic!("no aplica con fecha fija"),
        }
    }

    let fecha = hoy_fijo() + Duration::days(45);
    let mut rango_anterior = -1;
    for dias in 0..120 {
        let hoy = hoy_fijo() + Duration::days(dias);
        let rango_actual = rango(clasificar_estado(Some(fecha), hoy, VENTANA));
        assert!(
            rango_actual >= rango_anterior,
            "El estado retrocedió al avanzar el tiempo (día {})",
            dias
        );
        rango_anterior = rango_actual;
    }
}

#[test]
fn estado_derivado_ignora_el_estado_guardado() {
    let hoy = hoy_fijo();
    let mut credencial = credencial_con_fecha(Some("2020-01-01"));
    // el documento dice VIGENTE pero la fecha manda
    credencial.estado = EstadoCredencial::Vigente;
    assert_eq!(
        credencial.estado_derivado(hoy, VENTANA),
        EstadoCredencial::Vencida
    );
}

#[test]
fn fecha_invalida_clasifica_sin_credencial() {
    let credencial = credencial_con_fecha(Some("31/12/2026"));
    assert_eq!(
        credencial.estado_derivado(hoy_fijo(), VENTANA),
        EstadoCredencial::SinCredencial,
        "Una fecha que no parsea no debe tirar el recálculo completo"
    );
}

#[test]
fn cada_fecha_cae_en_exactamente_un_estado() {
    let hoy = hoy_fijo();
    for dias in -400..400 {
        let fecha = hoy + Duration::days(dias);
        let estado = clasificar_estado(Some(fecha), hoy, VENTANA);
        let esperado = if dias < 0 {
            EstadoCredencial::Vencida
        } else if dias < VENTANA {
            EstadoCredencial::PorVencer
        } else {
            EstadoCredencial::Vigente
        };
        assert_eq!(estado, esperado, "fecha hoy{:+} días", dias);
    }
}
