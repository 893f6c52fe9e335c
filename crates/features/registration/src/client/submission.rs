use recruit_domain::config::FormConfig;
use std::borrow::Cow;
use std::time::Duration;
use tokio::sync::watch;

const DEFAULT_LINES: &[&str] = &[
    "> Initializing registration sequence...",
    "> Validating member credentials...",
    "> Encrypting payload...",
    "> Establishing secure uplink...",
    "> Transmitting data to club servers...",
    "> Awaiting confirmation...",
];

/// Cosmetic progress lines played while a submission is in flight.
///
/// The script only decorates the wait; it never decides the outcome.
#[derive(Debug, Clone)]
pub struct LogScript {
    lines: Vec<Cow<'static, str>>,
    interval: Duration,
}

impl Default for LogScript {
    fn default() -> Self {
        Self::from_config(&FormConfig::default())
    }
}

impl LogScript {
    pub fn new<I, S>(lines: I, interval: Duration) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<Cow<'static, str>>,
    {
        Self { lines: lines.into_iter().map(Into::into).collect(), interval }
    }

    #[must_use]
    pub fn from_config(config: &FormConfig) -> Self {
        Self::new(DEFAULT_LINES.iter().copied(), Duration::from_millis(config.log_interval_ms))
    }

    #[must_use]
    pub fn lines(&self) -> &[Cow<'static, str>] {
        &self.lines
    }

    #[must_use]
    pub const fn interval(&self) -> Duration {
        self.interval
    }

    /// Appends one line per interval to the in-progress log.
    pub(crate) async fn play(&self, status: &watch::Sender<SubmissionState>) {
        for line in &self.lines {
            tokio::time::sleep(self.interval).await;
            status.send_modify(|state| state.push_log(line.clone().into_owned()));
        }
    }
}

/// Where the current submission attempt stands.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum SubmissionState {
    #[default]
    Idle,
    InProgress { log: Vec<String> },
    Success { message: String, log: Vec<String> },
    Failed { message: String, log: Vec<String> },
}

impl SubmissionState {
    #[must_use]
    pub const fn is_in_progress(&self) -> bool {
        matches!(self, Self::InProgress { .. })
    }

    #[must_use]
    pub fn log(&self) -> &[String] {
        match self {
            Self::Idle => &[],
            Self::InProgress { log } | Self::Success { log, .. } | Self::Failed { log, .. } => log,
        }
    }

    /// Only an in-progress log grows; terminal states are frozen.
    fn push_log(&mut self, line: String) {
        if let Self::InProgress { log } = self {
            log.push(line);
        }
    }

    pub(crate) fn take_log(&mut self) -> Vec<String> {
        match self {
            Self::Idle => Vec::new(),
            Self::InProgress { log } | Self::Success { log, .. } | Self::Failed { log, .. } => {
                std::mem::take(log)
            },
        }
    }
}

/// How a submission attempt ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmissionOutcome {
    Success { message: String },
    Failed { message: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_script_uses_form_timing() {
        let script = LogScript::default();
        assert_eq!(script.lines().len(), 6);
        assert_eq!(script.interval(), Duration::from_millis(400));
    }

    #[test]
    fn terminal_logs_do_not_grow() {
        let mut state = SubmissionState::Failed { message: "no".into(), log: vec!["a".into()] };
        state.push_log("b".into());
        assert_eq!(state.log(), ["a".to_owned()]);

        let mut state = SubmissionState::InProgress { log: Vec::new() };
        state.push_log("b".into());
        assert_eq!(state.log(), ["b".to_owned()]);
    }

    #[tokio::test(start_paused = true)]
    async fn play_appends_one_line_per_interval() {
        let script = LogScript::new(["one", "two"], Duration::from_millis(100));
        let (tx, rx) = watch::channel(SubmissionState::InProgress { log: Vec::new() });

        let started = tokio::time::Instant::now();
        script.play(&tx).await;

        assert_eq!(started.elapsed(), Duration::from_millis(200));
        assert_eq!(rx.borrow().log(), ["one".to_owned(), "two".to_owned()]);
    }
}
