pub mod dish_client;
pub mod order_client;

pub use dish_client::DishClient;
pub use order_client::OrderClient;
