use crate::config::Env;
use r2d2::Pool;
use redis::Client;

pub fn get_pool_connection() -> Pool<Client> {
    let config: Env = Env::env_init();

    let client = Client::open(config.redis_url).expect("No se pudo conectar a redis");

    match Pool::builder().build(client) {
        Ok(pool) => pool,
        Err(e) => panic!("No se pudo crear el pool: {:}", e),
    }
}
