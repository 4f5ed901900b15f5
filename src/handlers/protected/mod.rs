// handlers/protected/mod.rs - Protected handlers
//
// Security Level: bearer token when security.require_auth is set, otherwise
// the caller names itself with userId
// Route Prefix: /trips

pub mod trips;

pub use trips::*;
