pub mod record_id;
pub mod secret;
