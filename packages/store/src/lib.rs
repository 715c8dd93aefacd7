pub mod config;
pub mod form;
pub mod models;
pub mod rows;
pub mod schedule;

pub use config::BookingConfig;
pub use form::{AppointmentDraft, FormError};
pub use models::{
    Appointment, AppointmentKind, AppointmentPatch, AppointmentStatus, NewAppointment,
    NewService, Role, Service, ServicePatch, User,
};
pub use schedule::MonthGrid;
