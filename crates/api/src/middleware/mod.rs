pub mod client_ip;
pub mod error_handling;
pub mod validated_json;
