use actix_cors::Cors;
use actix_web::{web::Data, App, HttpServer};
use aws_config::{BehaviorVersion, Region, SdkConfig};
use aws_sdk_s3::Client as S3Client;
use convencion_api::config::{Env, GoogleOAuth, JwtSecret, VentanaPorVencer};
use convencion_api::endpoints::file_endpoints::file_endpoints;
use convencion_api::endpoints::handlers::configs::connection_pool::get_pool_connection;
use convencion_api::endpoints::pago_endpoints::pago_endpoints;
use convencion_api::endpoints::{
    auth_endpoints::auth_config, credencial_endpoints::credencial_config,
    graphql_endpoints::graphql_config, health_config, inscripcion_endpoints::inscripcion_config,
    recurso_endpoints::recurso_config,
};
use convencion_api::repos::mercado_pago::MercadoPagoClient;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Cargar variables de entorno desde .env
    dotenv::dotenv().ok();
    let config = Env::env_init();

    let port = config.port;
    let host = config.host;
    let bucket_name = config.bucket_name;

    env_logger::init();

    let s3_config: SdkConfig = if config.tls_on == 0 {
        aws_config::defaults(BehaviorVersion::latest())
            .region(Region::new(config.aws_region))
            .load()
            .await
    } else {
        aws_config::load_from_env().await
    };
    let s3_client = S3Client::new(&s3_config);

    let pool = Data::new(get_pool_connection());
    let mp_client = MercadoPagoClient::init(config.mp_base_url, config.mp_access_token);
    let http_client = reqwest::Client::new();
    let jwt_secret = JwtSecret(config.jwt_secret);
    let ventana = VentanaPorVencer(config.dias_por_vencer);
    let google_oauth = GoogleOAuth {
        client_id: config.google_client_id,
        client_secret: config.google_client_secret,
        redirect_uri: config.google_redirect_uri,
    };

    HttpServer::new(move || {
        let cors = Cors::default()
            .allow_any_origin()
            .allow_any_method()
            .allow_any_header()
            .max_age(3600);

        App::new()
            .app_data(pool.clone())
            .app_data(Data::new(jwt_secret.clone()))
            .app_data(Data::new(ventana))
            .app_data(Data::new(google_oauth.clone()))
            .app_data(Data::new(http_client.clone()))
            .configure(graphql_config)
            .configure(|config| {
                file_endpoints(config, s3_client.to_owned(), bucket_name.to_owned())
            })
            .configure(|config| pago_endpoints(config, mp_client.to_owned()))
            .configure(health_config)
            .configure(auth_config)
            .configure(credencial_config)
            .configure(inscripcion_config)
            .configure(recurso_config)
            .wrap(cors)
    })
    .bind((host, port))?
    .run()
    .await
}
