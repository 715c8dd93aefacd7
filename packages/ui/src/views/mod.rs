mod modal_overlay;
pub use modal_overlay::ModalOverlay;

mod schedule;
pub use schedule::ScheduleView;

mod agenda_list;
pub use agenda_list::AgendaListView;

mod profile;
pub use profile::ProfileView;
