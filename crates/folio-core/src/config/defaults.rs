//! Serde default functions for config fields.

pub(super) fn default_name() -> String {
    "folio".to_string()
}

pub(super) fn default_log_level() -> String {
    "warn".to_string()
}

pub(super) fn default_min_latency_ms() -> u64 {
    800
}

pub(super) fn default_max_latency_ms() -> u64 {
    1200
}

pub(super) fn default_lab_latency_ms() -> u64 {
    800
}
