mod google_sign_in;
mod verify_session;

pub use google_sign_in::*;
pub use verify_session::*;
