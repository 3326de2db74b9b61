pub mod instrument;
pub mod mention;
pub mod post;

pub use instrument::InstrumentInfo;
pub use mention::{MentionRecord, SortKey};
pub use post::{Listing, Post, PostQuery, TimeWindow};
