//! Notification state shared across the page.
//!
//! DESIGN
//! ======
//! One toast slot, newest wins. Each notice carries a sequence number so a
//! delayed auto-dismiss can tell whether it is about to clear its own
//! notice or a newer one that replaced it.

#[cfg(test)]
#[path = "ui_test.rs"]
mod ui_test;

/// Visual flavor of a notice.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Error,
}

/// A one-shot user-facing notification.
#[derive(Clone, Debug, PartialEq)]
pub struct Notice {
    pub kind: NoticeKind,
    pub text: String,
}

/// Page-level UI state: the current toast and its sequence counter.
#[derive(Clone, Debug, Default)]
pub struct UiState {
    /// Currently displayed notice, if any.
    pub notice: Option<Notice>,
    /// Monotonic counter, bumped on every push.
    pub notice_seq: u64,
}

impl UiState {
    /// Show a notice, replacing any current one. Returns the sequence
    /// number assigned to it, for use as a dismiss token.
    pub fn push_notice(&mut self, kind: NoticeKind, text: String) -> u64 {
        self.notice_seq += 1;
        self.notice = Some(Notice { kind, text });
        self.notice_seq
    }

    /// Clear the notice identified by `seq`. A stale token is ignored so a
    /// slow timer cannot dismiss a newer notice.
    pub fn dismiss_notice(&mut self, seq: u64) {
        if self.notice_seq == seq {
            self.notice = None;
        }
    }
}
