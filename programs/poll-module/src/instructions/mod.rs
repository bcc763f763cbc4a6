pub mod close_poll;
pub mod initialize;
pub mod initialize_publication_action;
pub mod process_publication_action;
pub mod register_identity;
