pub mod site_version;
