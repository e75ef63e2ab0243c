use envconfig::Envconfig;

#[derive(Envconfig, Debug)]
pub struct Env {
    #[envconfig(from = "HOST")]
    pub host: String,

    #[envconfig(from = "PORT")]
    pub port: u16,

    #[envconfig(from = "REDIS_URL")]
    pub redis_url: String,

    #[envconfig(from = "BUCKET_NAME")]
    pub bucket_name: String,

    #[envconfig(from = "AWS_REGION")]
    pub aws_region: String,

    #[envconfig(from = "TLS_ON")]
    pub tls_on: usize,

    #[envconfig(from = "JWT_SECRET")]
    pub jwt_secret: String,

    #[envconfig(from = "MP_ACCESS_TOKEN")]
    pub mp_access_token: String,

    #[envconfig(from = "MP_BASE_URL", default = "https://api.mercadopago.com")]
    pub mp_base_url: String,

    // Ventana en días para marcar una credencial como POR_VENCER
    #[envconfig(from = "DIAS_POR_VENCER", default = "30")]
    pub dias_por_vencer: i64,

    #[envconfig(from = "GOOGLE_CLIENT_ID", default = "")]
    pub google_client_id: String,

    #[envconfig(from = "GOOGLE_CLIENT_SECRET", default = "")]
    pub google_client_secret: String,

    #[envconfig(from = "GOOGLE_REDIRECT_URI", default = "")]
    pub google_redirect_uri: String,
}

impl Env {
    pub fn env_init() -> Env {
        Env::init_from_env().unwrap()
    }
}

// Newtypes para app_data: varios valores son String y actix los
// distingue solo por tipo

#[derive(Clone)]
pub struct JwtSecret(pub String);

#[derive(Clone, Copy)]
pub struct VentanaPorVencer(pub i64);

#[derive(Clone)]
pub struct GoogleOAuth {
    pub client_id: String,
    pub client_secret: String,
    pub redirect_uri: String,
}
