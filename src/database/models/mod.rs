pub mod expense;
pub mod itinerary_item;
pub mod trip;

pub use expense::{CategoryTotal, Expense};
pub use itinerary_item::ItineraryItem;
pub use trip::{Trip, TripSummary};
