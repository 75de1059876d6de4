//! Macros utilitarias para reducir boilerplate al definir Artifacts tipados
//! y Builders.
//!
//! Exportadas en la raíz del crate para poder usarlas como:
//!   use build_core::{builder, typed_artifact};

/// Declara un payload tipado ligado a un id del grafo.
///
/// Forma:
/// - typed_artifact!(Name["artifact.id"] { field1: Ty1, field2: Ty2 });
///
/// El `schema_version` lo gestiona `ArtifactSpec` (insertado al producir,
/// verificado al decodificar); el struct no necesita declararlo.
#[macro_export]
macro_rules! typed_artifact {
    ($name:ident [$id:literal] { $($fname:ident : $fty:ty),+ $(,)? }) => {
        #[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
        pub struct $name { $(pub $fname: $fty,)+ }
        impl $crate::model::ArtifactSpec for $name {
            const ID: &'static str = $id;
        }
    };
}

/// Declara un Builder a partir de specs tipados de entrada/salida.
///
/// Formas soportadas:
/// - builder!(Name { name: "n", inputs: [..], outputs: [..], run(me, ctx, sink) {..} });
/// - la variante con `fields { .. }` genera un struct con campos y `new`.
///
/// Los ids declarados se derivan de los `ArtifactSpec` listados; el cuerpo de
/// `run` es async y puede emitir por el sink tantas veces como necesite.
#[macro_export]
macro_rules! builder {
    // ---------------- Builder con fields ----------------
    (
        $name:ident {
            name: $bname:literal,
            inputs: [$($inp:ty),* $(,)?],
            outputs: [$($out:ty),+ $(,)?],
            fields { $($fname:ident : $fty:ty),+ $(,)? }
            , run($self_i:ident, $ctx_i:ident, $sink_i:ident) $body:block
        }
    ) => {
        #[derive(Clone, Debug)]
        pub struct $name { $(pub $fname: $fty),+ }
        impl $name { pub fn new($($fname : $fty),+) -> Self { Self { $($fname),+ } } }
        #[async_trait::async_trait]
        impl $crate::builder::BuilderDefinition for $name {
            fn name(&self) -> &str { $bname }
            fn inputs(&self) -> Vec<$crate::model::ArtifactId> {
                vec![$(<$inp as $crate::model::ArtifactSpec>::artifact_id()),*]
            }
            fn outputs(&self) -> Vec<$crate::model::ArtifactId> {
                vec![$(<$out as $crate::model::ArtifactSpec>::artifact_id()),+]
            }
            async fn build(&self,
                           $ctx_i: $crate::model::BuildContext,
                           $sink_i: $crate::builder::BuildSink)
                           -> Result<(), $crate::errors::GraphEngineError> {
                let $self_i = self;
                $body
            }
        }
    };

    // ---------------- Builder unit (sin fields) ----------------
    (
        $name:ident {
            name: $bname:literal,
            inputs: [$($inp:ty),* $(,)?],
            outputs: [$($out:ty),+ $(,)?],
            run($self_i:ident, $ctx_i:ident, $sink_i:ident) $body:block
        }
    ) => {
        #[derive(Clone, Debug)]
        pub struct $name;
        impl $name { pub fn new() -> Self { Self } }
        #[async_trait::async_trait]
        impl $crate::builder::BuilderDefinition for $name {
            fn name(&self) -> &str { $bname }
            fn inputs(&self) -> Vec<$crate::model::ArtifactId> {
                vec![$(<$inp as $crate::model::ArtifactSpec>::artifact_id()),*]
            }
            fn outputs(&self) -> Vec<$crate::model::ArtifactId> {
                vec![$(<$out as $crate::model::ArtifactSpec>::artifact_id()),+]
            }
            async fn build(&self,
                           $ctx_i: $crate::model::BuildContext,
                           $sink_i: $crate::builder::BuildSink)
                           -> Result<(), $crate::errors::GraphEngineError> {
                let $self_i = self;
                $body
            }
        }
    };
}
