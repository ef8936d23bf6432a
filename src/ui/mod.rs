pub mod input;
pub mod outcome;
pub mod render;
pub mod samples;
pub mod session;
pub mod shell;


pub use input::{read_upload, DocumentSource};
pub use outcome::{Outcome, SummaryReport};
pub use render::{ErrorBanner, SampleList, SessionView};
pub use samples::Sample;
pub use session::Session;
pub use shell::{Param, ShellCommand};
