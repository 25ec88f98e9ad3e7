//! # Background Worker
//!
//! ```text
//! VerificationDispatchHook ──LPUSH──▶ [queue:send_verify_email] ──BRPOP──▶ TaskProcessor ──▶ EmailSender
//!                                              ▲                                │
//!                                              └──────── retry (attempts+1) ────┘
//! ```

pub mod distributor;
pub mod processor;

pub use distributor::{RedisTaskDistributor, TaskDistributor};
pub use processor::{ProcessOutcome, TaskProcessor};
