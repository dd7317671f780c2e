pub mod state;

pub use state::{SaveAffordance, SaveTicket, SearchOutcome, SearchPageState, SearchTicket};
