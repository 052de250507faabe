//! Broadcast walkthrough: two announcers, one removed between updates.
//!
//! Run with `cargo run -p vigil --example observer`. The registry's debug
//! logs are printed to stderr next to the announcements on stdout.

use std::sync::Arc;
use vigil::prelude::*;

fn main() -> Result<(), vigil::VigilError> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let sink: SharedSink = Arc::new(StdoutSink);
    let subject = Subject::new();

    let observer1 = Subscriber::new(Announcer::new("Observer 1", sink.clone()));
    let observer2 = Subscriber::new(Announcer::new("Observer 2", sink));

    subject.add(&observer1);
    subject.add(&observer2);
    subject.notify(&"New data is available!")?;

    subject.remove(&observer1);
    subject.notify(&"Another update!")?;

    Ok(())
}
