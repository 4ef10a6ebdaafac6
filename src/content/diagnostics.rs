use std::sync::Arc;

use super::ContentError;

/// Receives content loading failures. Nothing reported here is shown to
/// the visitor.
pub trait Diagnostics {
    fn report(&self, level: log::Level, error: &ContentError);
}

/// Forwards to the `log` facade, which is wired to the browser console in
/// the hydrate entry point.
#[derive(Clone, Copy, Debug, Default)]
pub struct LogDiagnostics;

impl Diagnostics for LogDiagnostics {
    fn report(&self, level: log::Level, error: &ContentError) {
        log::log!(target: "content", level, "Error fetching data: {error}");
    }
}

/// Cloneable, thread-safe handle to a [`Diagnostics`] sink, so one can be
/// handed to components as a prop or through context.
#[derive(Clone)]
pub struct SharedDiagnostics(Arc<dyn Diagnostics + Send + Sync>);

impl SharedDiagnostics {
    pub fn new(diagnostics: impl Diagnostics + Send + Sync + 'static) -> Self {
        Self(Arc::new(diagnostics))
    }
}

impl Default for SharedDiagnostics {
    fn default() -> Self {
        Self::new(LogDiagnostics)
    }
}

impl Diagnostics for SharedDiagnostics {
    fn report(&self, level: log::Level, error: &ContentError) {
        self.0.report(level, error);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    #[derive(Clone, Default)]
    struct Collected(Arc<Mutex<Vec<String>>>);

    impl Diagnostics for Collected {
        fn report(&self, level: log::Level, error: &ContentError) {
            if let Ok(mut lines) = self.0.lock() {
                lines.push(format!("{level}: {error}"));
            }
        }
    }

    #[test]
    fn shared_handle_forwards_to_the_wrapped_sink() {
        let collected = Collected::default();
        let shared = SharedDiagnostics::new(collected.clone());

        shared.clone().report(
            log::Level::Error,
            &ContentError::Transport("offline".to_string()),
        );

        assert_eq!(
            collected.0.lock().unwrap().as_slice(),
            ["ERROR: Request failed: offline"]
        );
    }
}
