//! Reusable UI components

mod job_card;
mod job_list;
mod loading;

pub use job_card::*;
pub use job_list::*;
pub use loading::*;
