mod shell;
pub use shell::{NotFound, Shell};

mod home;
pub use home::Home;

mod login;
pub use login::Login;

mod register;
pub use register::Register;

mod films;
pub use films::{EditFilm, FilmDetail, Films, NewFilm};

mod sync;
pub use sync::SyncFilms;
