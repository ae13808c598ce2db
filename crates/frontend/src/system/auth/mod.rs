pub mod guard;
pub mod session;
pub mod storage;

pub use guard::RequireSession;
pub use session::ApplicantSession;
