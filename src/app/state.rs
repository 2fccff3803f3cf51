use crate::config::AppConfig;
use crate::quotes::{Quote, Topic};
use chrono::Local;
use std::time::{Duration, Instant};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Info,
    Error,
}

/// One line of transient feedback shown below the quote panel.
#[derive(Debug, Clone)]
pub struct Notice {
    pub timestamp: String,
    pub text: String,
    pub kind: NoticeKind,
    raised_at: Instant,
}

pub struct AppState {
    pub config: AppConfig,
    pub topic: Topic,
    pub current_quote: Option<Quote>,
    pub notice: Option<Notice>,
    pub should_quit: bool,
    pub dirty: bool,
    timestamp_format: String,
}

impl AppState {
    pub fn new(config: AppConfig) -> Self {
        let timestamp_format = config.ui.timestamp_format.clone();
        let topic = config.ui.default_topic;
        Self {
            config,
            topic,
            current_quote: None,
            notice: None,
            should_quit: false,
            dirty: true,
            timestamp_format,
        }
    }

    pub fn has_quote(&self) -> bool {
        self.current_quote.is_some()
    }

    /// Installs a new current quote. The previous quote is only ever replaced
    /// by a successful fetch, never cleared by a failed one.
    pub fn set_quote(&mut self, quote: Quote) {
        self.current_quote = Some(quote);
        self.dirty = true;
    }

    pub fn info_notice(&mut self, text: impl Into<String>) {
        self.raise_notice(text.into(), NoticeKind::Info);
    }

    pub fn error_notice(&mut self, text: impl Into<String>) {
        self.raise_notice(text.into(), NoticeKind::Error);
    }

    fn raise_notice(&mut self, text: String, kind: NoticeKind) {
        self.notice = Some(Notice {
            timestamp: Local::now().format(&self.timestamp_format).to_string(),
            text,
            kind,
            raised_at: Instant::now(),
        });
        self.dirty = true;
    }

    pub fn dismiss_notice(&mut self) {
        if self.notice.take().is_some() {
            self.dirty = true;
        }
    }

    /// Drops informational notices after `ui.notice_secs`. Error notices stay
    /// until dismissed or replaced.
    pub fn expire_notice(&mut self) {
        let expired = match &self.notice {
            Some(notice) if notice.kind == NoticeKind::Info => {
                notice.raised_at.elapsed() >= Duration::from_secs(self.config.ui.notice_secs)
            }
            _ => false,
        };
        if expired {
            self.notice = None;
            self.dirty = true;
        }
    }

    pub fn select_topic(&mut self, topic: Topic) {
        if self.topic != topic {
            self.topic = topic;
            self.dirty = true;
        }
    }

    pub fn next_topic(&mut self) {
        self.topic = self.topic.next();
        self.dirty = true;
    }

    pub fn prev_topic(&mut self) {
        self.topic = self.topic.prev();
        self.dirty = true;
    }
}
