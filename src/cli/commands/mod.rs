pub mod commit;
pub mod version;
