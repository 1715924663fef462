pub mod cors;
pub mod secure_headers;
