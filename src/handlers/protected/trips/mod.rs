pub mod expense;
pub mod itinerary;
pub mod trip;
pub mod utils;

// Re-export handler functions for use in routing
pub use trip::list as trip_list;
pub use trip::get as trip_get;
pub use trip::create as trip_create;
pub use trip::update as trip_update;
pub use trip::delete as trip_delete;

pub use itinerary::list as itinerary_list;
pub use itinerary::add as itinerary_add;
pub use itinerary::update as itinerary_update;
pub use itinerary::delete as itinerary_delete;

pub use expense::list as expense_list;
pub use expense::add as expense_add;
pub use expense::delete as expense_delete;
