//! Constantes del motor core.
//!
//! Este módulo agrupa valores estáticos que forman parte del contrato
//! observable del motor: la clave de metadata con la que se etiquetan los
//! artifacts producidos y la versión lógica del engine. Cambiar la clave de
//! metadata rompe el reconocimiento de artifacts pre-existentes entre runs.

/// Clave de metadata bajo la que el engine graba el identificador del
/// artifact producido. La misma clave se lee al cargar artifacts
/// pre-existentes al inicio de un run: un artifact sin esta clave se ignora.
pub const ARTIFACT_ID_KEY: &str = "artifactGraph.id";

/// Versión lógica del motor. Mantener estable mientras no haya cambios
/// incompatibles en el contrato de eventos o de metadata.
pub const ENGINE_VERSION: &str = "G1.0";
