// Tests del mapeo de estados de Mercado Pago y del parseo de los payloads
// del gateway. La conciliación contra Redis vive en tests/repos_redis.rs.

use convencion_api::models::mercado_pago::{
    estado_desde_mp, parsear_referencia_externa, referencia_externa, PagoMercadoPago,
    PreferenciaRequest, WebhookNotificacion,
};
use convencion_api::models::pago::EstadoPago;

#[test]
fn approved_mapea_a_completado() {
    assert_eq!(estado_desde_mp("approved"), EstadoPago::Completado);
}

#[test]
fn rechazos_y_cancelaciones_mapean_a_rechazado() {
    assert_eq!(estado_desde_mp("rejected"), EstadoPago::Rechazado);
    assert_eq!(estado_desde_mp("cancelled"), EstadoPago::Rechazado);
}

#[test]
fn todo_estado_intermedio_queda_pendiente() {
    for status in ["pending", "in_process", "authorized", "in_mediation", ""] {
        assert_eq!(
            estado_desde_mp(status),
            EstadoPago::Pendiente,
            "status {:?} debía quedar PENDIENTE",
            status
        );
    }
}

#[test]
fn referencia_externa_ida_y_vuelta() {
    let referencia = referencia_externa("insc-123", 2);
    assert_eq!(referencia, "insc-123:2");

    let (inscripcion_id, numero_cuota) = parsear_referencia_externa(&referencia).unwrap();
    assert_eq!(inscripcion_id, "insc-123");
    assert_eq!(numero_cuota, 2);
}

#[test]
fn referencias_ajenas_no_parsean() {
    // pagos de preferencias viejas o de otro sistema
    assert!(parsear_referencia_externa("orden-999").is_none());
    assert!(parsear_referencia_externa("insc-1:dos").is_none());
    assert!(parsear_referencia_externa(":3").is_none());
    assert!(parsear_referencia_externa("").is_none());
}

#[test]
fn el_payload_del_webhook_parsea() {
    let cuerpo = r#"{
        "action": "payment.updated",
        "api_version": "v1",
        "data": { "id": "123456789" },
        "date_created": "2026-08-30T10:00:00Z",
        "type": "payment"
    }"#;

    let notificacion: WebhookNotificacion = serde_json::from_str(cuerpo).unwrap();
    assert_eq!(notificacion.tipo.as_deref(), Some("payment"));
    assert_eq!(notificacion.data.unwrap().id, "123456789");
}

#[test]
fn el_pago_del_gateway_parsea_ignorando_campos_extra() {
    let cuerpo = r#"{
        "id": 987654321,
        "status": "approved",
        "status_detail": "accredited",
        "external_reference": "insc-123:1",
        "transaction_amount": 1500.0,
        "payment_method_id": "visa",
        "date_approved": "2026-08-30T10:05:00.000-04:00",
        "payer": { "email": "alguien@ejemplo.com" },
        "installments": 1
    }"#;

    let pago: PagoMercadoPago = serde_json::from_str(cuerpo).unwrap();
    assert_eq!(pago.id, 987654321);
    assert_eq!(estado_desde_mp(&pago.status), EstadoPago::Completado);
    assert_eq!(pago.external_reference.as_deref(), Some("insc-123:1"));
}

#[test]
fn la_preferencia_omite_notification_url_vacia() {
    use convencion_api::models::mercado_pago::ItemPreferencia;

    let preferencia = PreferenciaRequest {
        items: vec![ItemPreferencia {
            title: "Cuota 1/3 - Prueba".to_string(),
            quantity: 1,
            unit_price: 500.0,
            currency_id: "ARS".to_string(),
        }],
        external_reference: "insc-123:1".to_string(),
        notification_url: None,
    };

    let json = serde_json::to_value(&preferencia).unwrap();
    assert!(json.get("notification_url").is_none());
    assert_eq!(json["external_reference"], "insc-123:1");
    assert_eq!(json["items"][0]["unit_price"], 500.0);
}
