use neo_core::alerts::Alert;
use neo_core::pipeline::AlertNotifier;

/// Reports every alert of a run as a `warn` event.
pub struct TracingNotifier;

impl AlertNotifier for TracingNotifier {
    fn notify(&self, alerts: &[Alert]) {
        tracing::warn!(count = alerts.len(), "proximity alerts triggered");
        for alert in alerts {
            tracing::warn!(
                asteroid_id = %alert.neo.id,
                asteroid = %alert.neo.name,
                hazardous = alert.neo.hazardous,
                distance_km = alert.current_distance_km,
                threshold_km = alert.watch_entry.alert_distance_km,
                "asteroid inside alert distance"
            );
        }
    }
}
