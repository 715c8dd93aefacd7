mod shell;
pub use shell::Shell;

mod pages;
pub use pages::{List, NewAppointment, Profile, Schedule};
