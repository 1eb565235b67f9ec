//! vend-adapter-postgres - PostgreSQL 适配器

mod connection;
mod health;
mod migration;

pub use connection::*;
pub use health::*;
pub use migration::*;
