pub mod io_struct;
pub mod policy;
pub mod relay_state;
pub mod server;
