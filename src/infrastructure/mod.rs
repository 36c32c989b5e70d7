pub mod customer_store;
pub mod models;
pub mod order_store;

pub use customer_store::MongoCustomerStore;
pub use order_store::DieselOrderStore;
