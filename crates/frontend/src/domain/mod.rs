pub mod saved_jobs;
