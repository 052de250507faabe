//! Dispatch walkthrough: a cursor switching between the three tools.
//!
//! Run with `cargo run -p vigil --example state`.

use vigil::prelude::*;

fn main() {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let mut cursor = Dispatcher::builder(Tool::Selection)
        .sink(StdoutSink)
        .build();

    cursor.primary_action();
    cursor.secondary_action();

    for tool in [Tool::Pen, Tool::Eraser] {
        cursor.set_behavior(tool);
        cursor.primary_action();
        cursor.secondary_action();
    }
}
