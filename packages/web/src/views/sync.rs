use dioxus::prelude::*;
use ui::views::SyncView;
use ui::RequireAuth;

#[component]
pub fn SyncFilms() -> Element {
    rsx! {
        RequireAuth {
            admin: true,
            SyncView {}
        }
    }
}
