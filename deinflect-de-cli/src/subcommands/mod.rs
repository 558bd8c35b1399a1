mod candidates;
pub use candidates::CandidatesApp;

mod describe;
pub use describe::DescribeApp;

mod tag;
pub use tag::TagApp;
