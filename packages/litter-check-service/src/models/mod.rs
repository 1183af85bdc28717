pub mod location;
pub mod requests;
pub mod verdict;

// Re-export commonly used types
pub use location::{LocationPoint, LocationRegistry, OTHER_LOCATION};
pub use requests::{RejectionResponse, Submission, VerifyLitterRequest};
pub use verdict::Verdict;
