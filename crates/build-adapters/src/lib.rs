//! build-adapters: Grafo concreto de redacción sobre el core neutro
//!
//! Este crate provee:
//! - Artifacts tipados para un agente de redacción (brief → investigación →
//!   esquema → borrador → resumen), sin semántica en el core.
//! - Builders concretos que ejercen cada rasgo del motor: fuente sin inputs,
//!   multi-output, joins multi-input y emisiones de progreso intercaladas.
//! - Condiciones de calidad que vetan la etapa de borrador.
//!
//! Todo es determinista y sin IO externo: la costura async de cada builder
//! queda donde iría una llamada a modelo.

pub mod artifacts;
pub mod builders;
pub mod conditions;
