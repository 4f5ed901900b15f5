// handlers/mod.rs - Two-tier handler layout
//
// Public (no auth) → Protected (bearer auth when security.require_auth is set)
pub mod public;    // Service descriptor and health probe
pub mod protected; // Trips with their itinerary and expenses
