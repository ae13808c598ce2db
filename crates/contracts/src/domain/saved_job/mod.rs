pub mod aggregate;

pub use aggregate::SavedJob;
