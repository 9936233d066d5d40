//! DMX playback inspector
//!
//! Loads a recording into a layer slot, composites one tick and prints the
//! lit channels. Useful for checking a recording outside a hosting shell.

use std::path::PathBuf;

use clap::Parser;

use dmx_playback::{DmxPlaybackSource, LoadOutcome, CHANNEL_COUNT};

/// Inspect a DMX recording through the playback engine.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// Recording CSV file
    recording: PathBuf,

    /// Layer to load into (1-based)
    #[arg(long, default_value_t = 1)]
    layer: usize,

    /// Slot to load into (1-based)
    #[arg(long, default_value_t = 1)]
    slot: usize,

    /// Scrub position in [0, 1]
    #[arg(long, default_value_t = 0.0)]
    scrub: f32,

    /// Layer opacity in [0, 1]
    #[arg(long, default_value_t = 1.0)]
    opacity: f32,
}

fn main() {
    // Initialize logging
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp_millis()
        .init();

    let args = Args::parse();

    let mut source = DmxPlaybackSource::new();
    match source.load_recording(args.layer, args.slot, &args.recording) {
        LoadOutcome::Loaded(frames) => log::info!("{} frames loaded", frames),
        LoadOutcome::Cleared => {
            log::warn!("nothing to play from {:?}", args.recording);
            return;
        }
    }

    if let Some(layer) = source.composition_mut().layer_mut(args.layer) {
        layer.set_active_slot(args.slot);
        layer.set_scrub(args.scrub);
        layer.set_opacity(args.opacity);
    }

    let channels = source.render_tick().unpack();

    let mut lit = 0;
    for channel in 1..=CHANNEL_COUNT as u16 {
        if channels.is_present(channel) {
            println!("channel {:3}: {}", channel, channels.value(channel));
            lit += 1;
        }
    }
    println!("{} of {} channels lit", lit, CHANNEL_COUNT);
}
