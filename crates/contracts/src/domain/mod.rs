pub mod saved_job;
