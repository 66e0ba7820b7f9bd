mod event;
pub use event::Event;

mod event_data;
pub use event_data::*;
