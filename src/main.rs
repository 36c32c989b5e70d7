use std::env;
use std::sync::Arc;

use dotenvy::dotenv;
use order_aggregator::infrastructure::{DieselOrderStore, MongoCustomerStore};
use order_aggregator::{build_server, connect_mongo, create_pool, run_migrations, AggregationService};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenv().ok();
    env_logger::init_from_env(env_logger::Env::default().default_filter_or("info"));

    let database_url = env::var("DATABASE_URL").expect("DATABASE_URL must be set");
    let mongodb_uri =
        env::var("MONGODB_URI").unwrap_or_else(|_| "mongodb://localhost:27017".to_string());
    let mongodb_database = env::var("MONGODB_DATABASE").unwrap_or_else(|_| "store".to_string());
    let host = env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string());
    let port: u16 = env::var("PORT")
        .unwrap_or_else(|_| "5000".to_string())
        .parse()
        .expect("PORT must be a valid number");

    let pool = create_pool(&database_url);
    run_migrations(&pool);

    let mongo = connect_mongo(&mongodb_uri, &mongodb_database)
        .await
        .expect("Failed to connect to MongoDB");

    let service = AggregationService::new(
        Arc::new(DieselOrderStore::new(pool)),
        Arc::new(MongoCustomerStore::new(mongo)),
    );

    log::info!("Starting server at http://{}:{}", host, port);

    build_server(service, &host, port)?.await
}
