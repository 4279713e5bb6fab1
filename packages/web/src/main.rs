use api::ApiClient;
use dioxus::prelude::*;
use store::ClientConfig;

use ui::{AuthProvider, DialogProvider, DialogTimings, Destination};
use views::{EditFilm, FilmDetail, Films, Home, Login, NewFilm, NotFound, Register, Shell, SyncFilms};

mod views;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[layout(Shell)]
        #[route("/")]
        Home {},
        #[route("/login")]
        Login {},
        #[route("/register")]
        Register {},
        #[route("/films")]
        Films {},
        #[route("/films/new")]
        NewFilm {},
        #[route("/films/:id")]
        FilmDetail { id: String },
        #[route("/films/:id/edit")]
        EditFilm { id: String },
        #[route("/sync")]
        SyncFilms {},
        #[route("/:..segments")]
        NotFound { segments: Vec<String> },
}

impl From<Destination> for Route {
    fn from(to: Destination) -> Self {
        match to {
            Destination::Home => Route::Home {},
            Destination::Login => Route::Login {},
            Destination::Register => Route::Register {},
            Destination::Films => Route::Films {},
            Destination::FilmDetail(id) => Route::FilmDetail { id },
            Destination::NewFilm => Route::NewFilm {},
            Destination::EditFilm(id) => Route::EditFilm { id },
            Destination::Sync => Route::SyncFilms {},
        }
    }
}

const MAIN_CSS: Asset = asset!("/assets/main.css");
const CONFIG: &str = include_str!("../starwars.toml");

fn main() {
    dioxus::logger::initialize_default();
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    let config = use_hook(|| ClientConfig::load_embedded(CONFIG).with_build_env());
    let client = use_hook(|| {
        let session = ui::make_session(&config.session);
        tracing::info!(api = %config.api.base_url, signed_in = session.is_authenticated(), "starting");
        ApiClient::new(config.api.base_url.clone(), session)
    });
    let timings = DialogTimings::from(&config.timings);

    use_context_provider(|| config.clone());
    use_context_provider(|| client.clone());

    rsx! {
        // Global app resources
        document::Link { rel: "stylesheet", href: MAIN_CSS }

        AuthProvider {
            DialogProvider {
                timings,
                Router::<Route> {}
            }
        }
    }
}
