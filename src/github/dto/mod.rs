pub mod repo_record;
