// Authentication helpers
// Bearer tokens carry the caller's identity and role claims

pub mod jwt;
