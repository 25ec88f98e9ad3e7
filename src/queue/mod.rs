//! 작업 큐 (Redis)

pub mod redis;

pub use self::redis::RedisClient;
