mod app;
mod effects;
mod logging;

fn main() -> std::io::Result<()> {
    app::run()
}
