pub mod tally_models;
pub mod vote_record_models;
