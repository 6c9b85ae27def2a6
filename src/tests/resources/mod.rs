mod catalog_tests;
mod credential_tests;
mod ip_tests;
mod power_tests;
