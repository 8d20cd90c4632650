//! Application layer
//!
//! Contains use cases and service orchestration.
//! Services coordinate between domain entities, ports, and external systems.

pub mod analytics_service;

pub use analytics_service::{
    AnalyticsService, BurndownPoint, BurndownSeries, ProjectMonitoringStats, ProjectsAnalytics,
    UserWorkload,
};
