pub mod checks;
pub mod utils;

pub use utils::page::{Page, PageError, PageMetadata};
pub use utils::report::{Audit, Impact, Issue, IssueType, Priority, Suggestion};
pub use utils::signals::{FixedSignals, SignalSource, SimulatedSignals};
