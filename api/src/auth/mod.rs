pub mod client;
pub mod middleware;
pub mod session;

pub use client::{LoginFailure, LoginPayload, LoginSuccess, SessionUser};
