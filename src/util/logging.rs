//! Browser logging setup.
//!
//! Routes the `log` facade to the devtools console and installs the panic
//! hook. Outside `hydrate` this is a no-op; native builds bring their own
//! logger.

/// Install the console logger and panic hook. Safe to call more than once.
pub fn init() {
    #[cfg(feature = "hydrate")]
    {
        console_error_panic_hook::set_once();
        if let Err(err) = console_log::init_with_level(log::Level::Debug) {
            log::debug!("console logger already installed: {err}");
        }
    }
}
