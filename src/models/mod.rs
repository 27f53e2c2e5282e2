pub mod booking;
pub mod seat;
pub mod sequence;

pub use booking::Booking;
pub use seat::SeatCode;
pub use sequence::{Priority, SequenceRow};
