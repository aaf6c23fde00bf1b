use thiserror::Error;

/// A mismatch between a WGSL program and the interface its pipeline feeds it.
#[derive(Debug, Error)]
pub enum ContractError {
    #[error("{shader}: WGSL failed to parse\n{message}")]
    Parse {
        shader: &'static str,
        message: String,
    },

    #[error("{shader}: no {stage:?} entry point named `{entry}`")]
    MissingEntryPoint {
        shader: &'static str,
        stage: naga::ShaderStage,
        entry: &'static str,
    },

    #[error("{shader}: attribute at location {location} is not read by the vertex stage")]
    UnconsumedAttribute { shader: &'static str, location: u32 },

    #[error("{shader}: vertex input at location {location} is not fed by any buffer")]
    UnfedInput { shader: &'static str, location: u32 },

    #[error(
        "{shader}: location {location} supplies {supplied} f32 components, \
         the vertex stage declares {declared}"
    )]
    ComponentMismatch {
        shader: &'static str,
        location: u32,
        supplied: u32,
        declared: u32,
    },

    #[error("{shader}: expected {expected} at group {group}, binding {binding}")]
    MissingBinding {
        shader: &'static str,
        group: u32,
        binding: u32,
        expected: &'static str,
    },

    #[error("{shader}: resource at group {group}, binding {binding} has no slot in the pipeline layout")]
    UnexpectedBinding {
        shader: &'static str,
        group: u32,
        binding: u32,
    },
}
