pub mod event;
pub mod event_type;
pub mod perimeter;
pub mod position;
pub mod shift;
pub mod worker;
