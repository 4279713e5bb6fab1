use dioxus::prelude::*;

mod modal_overlay;
pub use modal_overlay::ModalOverlay;

mod home;
pub use home::HomeView;

mod login;
pub use login::LoginView;

mod register;
pub use register::RegisterView;

mod film_list;
pub use film_list::{filter_films, FilmFilter, FilmListView};

mod film_detail;
pub use film_detail::{film_stats, FilmDetailView};

mod film_form;
pub use film_form::{parse_list, FilmForm, FilmFormView, FormError};

mod sync;
pub use sync::{SyncSummary, SyncView};

#[component]
pub fn Loading() -> Element {
    rsx! {
        div {
            class: "loading",
            div { class: "spinner" }
            p { "Loading..." }
        }
    }
}
