mod sign_in_with_google;

pub use sign_in_with_google::*;
