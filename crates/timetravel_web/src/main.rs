//! Browser entry point: installs logging and mounts the game into `#root`.

use timetravel_web::{MOUNT_POINT, mount};

fn main() {
    console_error_panic_hook::set_once();
    tracing_wasm::set_as_global_default();

    if let Err(e) = mount(MOUNT_POINT) {
        tracing::error!(error = %e, "Failed to mount game");
    }
}
