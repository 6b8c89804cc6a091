use ui::App;

fn main() {
    ui::logs::init_logging();
    yew::Renderer::<App>::new().render();
}
