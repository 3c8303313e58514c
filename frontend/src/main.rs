mod app;
mod dom;
mod fetch;

use seed::App;

fn main() {
    let songs = dom::read_song_items();
    App::start(
        "app",
        move |url, orders| app::init(url, orders, songs),
        app::update,
        app::view,
    );
}
