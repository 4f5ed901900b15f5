pub mod error;
pub mod expense_service;
pub mod itinerary_service;
pub mod ownership;
pub mod trip_service;

pub use error::{ServiceError, ValidationFailure};
pub use expense_service::{ExpenseLedger, ExpenseService, NewExpense};
pub use itinerary_service::{ItineraryItemChanges, ItineraryService, NewItineraryItem};
pub use ownership::{lock_owned_trip, OwnedTrip};
pub use trip_service::{TripDetails, TripService};
