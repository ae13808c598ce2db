mod page;

pub use page::SavedJobDetailsPage;
