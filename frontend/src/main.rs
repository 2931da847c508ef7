use habit_tracker_frontend::{config, router};
use leptos::spawn_local;

fn main() {
    console_error_panic_hook::set_once();
    let level = if cfg!(debug_assertions) {
        log::Level::Debug
    } else {
        log::Level::Info
    };
    let _ = console_log::init_with_level(level);

    let perf = web_sys::window().and_then(|w| w.performance());
    let t0 = perf.as_ref().map(|p| p.now());
    log::info!("Starting HabitTracker: initializing runtime config");

    spawn_local(async move {
        config::init().await;
        match (perf.as_ref(), t0) {
            (Some(p), Some(start)) => {
                log::info!("Runtime config initialized ({:.0} ms)", p.now() - start)
            }
            _ => log::info!("Runtime config initialized"),
        }
        router::mount_app();
    });
}
