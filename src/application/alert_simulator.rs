use gloo::timers::callback::Interval;
use std::rc::Rc;

use crate::domain::analysis::roll_alert;
use crate::domain::logging::LogComponent;
use crate::domain::random::RandomSource;
use crate::log_debug;

use super::NotificationService;

/// Periodically rolls for a fake market alert. Stops when dropped.
pub struct AlertSimulator {
    _interval: Interval,
}

impl AlertSimulator {
    pub fn start(
        notifications: NotificationService,
        rng: Rc<dyn RandomSource>,
        period_ms: u32,
        probability: f64,
    ) -> Self {
        log_debug!(
            LogComponent::Application("AlertSimulator"),
            "rolling every {} ms at p={}",
            period_ms,
            probability
        );
        let interval = Interval::new(period_ms, move || {
            if let Some(draft) = roll_alert(rng.as_ref(), probability) {
                notifications.add(draft);
            }
        });
        Self { _interval: interval }
    }
}
