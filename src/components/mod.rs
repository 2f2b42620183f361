pub mod login_dialog;
pub mod note_detail;
pub mod notes_chart;
pub mod notes_list;

pub use login_dialog::LoginDialog;
pub use note_detail::NoteDetail;
pub use notes_chart::NotesChart;
pub use notes_list::NotesList;
