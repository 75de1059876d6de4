//! Configuración central de la aplicación demo.
//! Carga variables de entorno (.env) y expone una estructura inmutable
//! (`CONFIG`): flag verbose del run y filtro de logging para tracing.

use once_cell::sync::Lazy;
use std::env;

/// Configuración global de la aplicación.
pub struct AppConfig {
    /// Emite diagnóstico verbose del engine (plan, saltos, resumen final).
    pub verbose: bool,
    /// Filtro de tracing (formato EnvFilter), p.ej. "info,build_core=debug".
    pub log_filter: String,
    /// Umbral mínimo de hallazgos para habilitar la etapa de borrador.
    pub min_findings: usize,
}

/// Instancia global perezosa de configuración, evaluada una sola vez.
pub static CONFIG: Lazy<AppConfig> = Lazy::new(|| {
    let verbose = env::var("BUILDFLOW_VERBOSE").map(|v| v != "0").unwrap_or(true);
    let log_filter = env::var("BUILDFLOW_LOG").unwrap_or_else(|_| "info".to_string());
    let min_findings = env::var("BUILDFLOW_MIN_FINDINGS").ok()
        .and_then(|v| v.parse().ok()).unwrap_or(1);
    AppConfig { verbose,
                log_filter,
                min_findings }
});
