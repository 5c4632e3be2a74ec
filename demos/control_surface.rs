use vtablet::{Attr, RecordingSink, TabletConfig, VirtualTablet};

fn main() {
    let sink = RecordingSink::new();
    let tablet = VirtualTablet::new(TabletConfig::default(), Box::new(sink.clone()));
    let surface = tablet.surface();

    // Dump the six attributes the way an operator would see them
    for attr in Attr::ALL {
        println!("{} = {}", attr.name(), surface.read(attr));
    }

    // Out-of-range position write: stored value is clamped
    surface.write(Attr::X, "5000");
    println!("x after writing 5000: {}", surface.read(Attr::X));

    // Shrink the x range; the stale position stays until the next write
    surface.write(Attr::Maxx, "2000");
    println!("x after shrinking maxx: {}", surface.read(Attr::X));
    surface.write(Attr::X, "4096");
    println!("x after rewriting: {}", surface.read(Attr::X));

    // Everything the host input subsystem would have received
    for event in sink.take() {
        println!("sink: {event:?}");
    }
}
