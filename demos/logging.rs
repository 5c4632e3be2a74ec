use vtablet::{Attr, LogSink, TabletConfig, VirtualTablet};

fn main() {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::TRACE)
        .init();

    let tablet = VirtualTablet::new(TabletConfig::default(), Box::new(LogSink::new()));
    let surface = tablet.surface();

    surface.write(Attr::X, "1024");
    surface.write(Attr::Y, "2048");
    surface.write(Attr::Maxy, "8192");
}
