//! Scroll a list row into view and watch the transition settle.
//!
//! Run with: cargo run -p scrollin --example scroll_demo

use scrollin::prelude::*;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "debug".into()),
        )
        .init();

    let doc = Document::new();
    register_scrollable_filter(&doc);

    // A 240 px list pane holding forty 32 px rows.
    let pane = doc
        .append(
            doc.root(),
            element()
                .id("list")
                .overflow_y("auto")
                .scroll_size(320.0, 40.0 * 32.0)
                .client_size(320.0, 240.0),
        )
        .expect("append list pane");

    for index in 0..40 {
        doc.append(
            pane,
            element()
                .id(format!("row-{index}"))
                .outer_size(320.0, 32.0)
                .offset(0.0, index as f32 * 32.0),
        )
        .expect("append row");
    }

    println!(
        "scrollable elements: {:?}",
        doc.elements_matching(SCROLLABLE_FILTER)
            .iter()
            .filter_map(|el| doc.string_id(el))
            .collect::<Vec<_>>()
    );

    doc.select_id("row-30").scroll_in(
        ScrollOptions::new()
            .behavior("smooth")
            .block(BlockAlign::Middle)
            .margin(8.0),
    );

    // Drive the frame loop at ~60 fps until the transition settles.
    let mut frames = 0;
    loop {
        let active = doc.tick(16.0);
        frames += 1;
        if !active {
            break;
        }
    }

    println!(
        "settled after {} frames at scroll-top {:.1}",
        frames,
        doc.scroll_position(pane, Axis::Vertical)
    );
}
