use std::time::Duration;

/// Tunables shared by the builder and respond surfaces.
#[derive(Debug, Clone)]
pub struct UiOptions {
    pub tick_rate: Duration,
    pub confirm_quit: bool,
    pub show_help: bool,
    /// How long a save or submit may stay in flight before it is
    /// settled as timed out.
    pub call_timeout: Duration,
}

impl Default for UiOptions {
    fn default() -> Self {
        Self {
            tick_rate: Duration::from_millis(250),
            confirm_quit: true,
            show_help: true,
            call_timeout: Duration::from_secs(10),
        }
    }
}

impl UiOptions {
    pub fn with_tick_rate(mut self, tick_rate: Duration) -> Self {
        self.tick_rate = tick_rate;
        self
    }

    pub fn with_confirm_quit(mut self, confirm: bool) -> Self {
        self.confirm_quit = confirm;
        self
    }

    pub fn with_help(mut self, show: bool) -> Self {
        self.show_help = show;
        self
    }

    pub fn with_call_timeout(mut self, timeout: Duration) -> Self {
        self.call_timeout = timeout;
        self
    }
}
