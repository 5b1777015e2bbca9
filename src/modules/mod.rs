pub mod account;
pub mod booking;
pub mod home;
pub mod menu;
pub mod resource;

mod router;
pub use router::get_router;
