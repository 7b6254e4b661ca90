pub mod redis_list_store;

pub use redis_list_store::RedisListStore;
