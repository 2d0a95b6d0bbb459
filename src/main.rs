//! Orrery — token holder constellation explorer. Runs the wallet_atlas app.

use bevy::prelude::*;
use wallet_atlas::prelude::WalletAtlasBuilder;

fn main() {
    let _ = dotenvy::dotenv();

    WalletAtlasBuilder::new()
        .window_title("Orrery")
        .window_resolution(1280., 720.)
        .clear_color(Color::srgb(0.02, 0.02, 0.05))
        .build()
        .run();
}
