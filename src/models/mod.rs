pub mod category;
pub mod event_record;
pub mod new_event;
pub mod temporal_match;

pub use category::Category;
pub use event_record::EventRecord;
pub use new_event::NewEvent;
pub use temporal_match::TemporalMatch;
