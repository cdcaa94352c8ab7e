mod components;
mod content;
mod hooks;
mod services;
mod state;

use components::App;

fn main() {
    yew::Renderer::<App>::new().render();
}
