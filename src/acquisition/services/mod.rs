//! Application services for source acquisition.

mod archives;
mod dispatcher;

pub use archives::collect_dependency_archives;
pub use dispatcher::{
    AcquisitionDispatcher, AcquisitionError, AcquisitionResult, DEFAULT_ARCHIVE_EXTENSION,
};
