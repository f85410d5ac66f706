//! 状态栏状态：加载提示与错误信息

use std::time::Instant;

use securities_core::types::Notification;

#[derive(Debug, Default)]
pub struct StatusState {
    /// 当前提示及其显示时间
    notification: Option<(Notification, Instant)>,
    /// 最近一次错误
    pub error: Option<String>,
    /// 普通状态消息
    pub message: Option<String>,
}

impl StatusState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn notify(&mut self, notification: Option<Notification>, now: Instant) {
        self.notification = notification.map(|n| (n, now));
    }

    /// 当前应显示的提示文本，超时后换成升级文本
    pub fn notification_text(&self, now: Instant) -> Option<&str> {
        let (notification, shown_at) = self.notification.as_ref()?;
        match &notification.escalation {
            Some((after, escalated)) if now.duration_since(*shown_at) >= *after => {
                Some(escalated.as_str())
            }
            _ => Some(notification.message.as_str()),
        }
    }

    pub fn set_error(&mut self, message: impl Into<String>) {
        self.error = Some(message.into());
    }

    pub fn set_message(&mut self, message: impl Into<String>) {
        self.message = Some(message.into());
    }

    pub fn clear(&mut self) {
        self.error = None;
        self.message = None;
    }
}
