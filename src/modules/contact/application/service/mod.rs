pub mod contact_details_service;
pub mod contact_message_service;

pub use contact_details_service::ContactDetailsService;
pub use contact_message_service::ContactMessageService;
