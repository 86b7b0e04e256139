//! # Navigation & Alerts
//!
//! The two outward signals the core emits. Routing mechanics and alert rendering belong
//! to the host application; it plugs them in through [`Navigator`] and [`AlertSink`].

use crate::model::FoodId;
use std::sync::{Arc, Mutex, PoisonError};
use tracing::{info, warn};

/// A screen the core asks to move to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    FoodDetail(FoodId),
    Orders,
    Home,
}

pub trait Navigator: Send + Sync {
    fn navigate(&self, route: Route);

    fn navigate_to_detail(&self, food_id: FoodId) {
        self.navigate(Route::FoodDetail(food_id));
    }

    fn navigate_to_orders(&self) {
        self.navigate(Route::Orders);
    }

    fn navigate_home(&self) {
        self.navigate(Route::Home);
    }
}

/// A user-facing alert: a title and a message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Alert {
    pub title: &'static str,
    pub message: &'static str,
}

/// The only alert the core raises, whatever made the order fail.
pub const ORDER_FAILED_ALERT: Alert = Alert {
    title: "Error placing order",
    message: "An error occurred while trying to place the order, please try again",
};

pub trait AlertSink: Send + Sync {
    fn alert(&self, alert: Alert);
}

pub type SharedNavigator = Arc<dyn Navigator>;
pub type SharedAlerts = Arc<dyn AlertSink>;

/// Logs navigation requests.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingNavigator;

impl Navigator for TracingNavigator {
    fn navigate(&self, route: Route) {
        info!(?route, "Navigate");
    }
}

/// Logs alerts.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingAlerts;

impl AlertSink for TracingAlerts {
    fn alert(&self, alert: Alert) {
        warn!(title = alert.title, message = alert.message, "Alert");
    }
}

/// Keeps every route it is asked for, in order.
#[derive(Debug, Default)]
pub struct RecordingNavigator {
    routes: Mutex<Vec<Route>>,
}

impl RecordingNavigator {
    pub fn routes(&self) -> Vec<Route> {
        self.routes
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

impl Navigator for RecordingNavigator {
    fn navigate(&self, route: Route) {
        self.routes
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(route);
    }
}

/// Keeps every alert it receives, in order.
#[derive(Debug, Default)]
pub struct RecordingAlerts {
    alerts: Mutex<Vec<Alert>>,
}

impl RecordingAlerts {
    pub fn alerts(&self) -> Vec<Alert> {
        self.alerts
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

impl AlertSink for RecordingAlerts {
    fn alert(&self, alert: Alert) {
        self.alerts
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(alert);
    }
}
