pub mod contact_details;
