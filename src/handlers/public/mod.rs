// handlers/public/mod.rs - Public handlers (no authentication required)
//
// Security Level: None
// Routes: GET /, GET /health

pub mod health;
pub mod root;

pub use health::health;
pub use root::root;
