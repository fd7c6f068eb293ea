//! Business logic between the wizard state machine and the wire layer:
//! request assembly, response interpretation, and the derived views over
//! generated schedules.

pub mod carousel;
pub mod crn;
pub mod request_builder;
pub mod response_parser;

pub use carousel::ScheduleCarousel;
pub use crn::{crn_entries, format_clipboard, CrnEntry};
pub use request_builder::{build, validate, ValidationError, WEIGHT_EPSILON};
pub use response_parser::{parse, ClassEvent, MalformedResponse, ScheduleSet, SolverOutcome};
