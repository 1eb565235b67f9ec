//! Persistence implementations

mod memory;
mod postgres;

pub use memory::InMemoryProductRepository;
pub use postgres::PostgresProductRepository;
