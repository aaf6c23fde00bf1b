//! Static checks between the bundled WGSL and the pipeline interface.
//!
//! wgpu only reports a layout mismatch when the pipeline is created, and then
//! as a validation panic. Parsing the program with naga first turns the same
//! mistakes into a [`ContractError`] naming the location or binding at fault.

mod error;

use std::collections::BTreeMap;

pub use error::ContractError;

use crate::binding::{IMAGE_BINDING, SAMPLER_BINDING, TEXTURE_GROUP};
use crate::pipeline::PipelineVariant;
use crate::shader::ShaderProgram;

/// Checks the bundled program of `variant` against its own buffers and groups.
pub fn verify(variant: PipelineVariant) -> Result<(), ContractError> {
    verify_program(
        &variant.shader(),
        &variant.vertex_buffers(),
        variant.binds_texture(),
    )
}

/// Checks `program` against `buffers` and, when `binds_texture` is set, the
/// texture group.
///
/// Every attribute must be read by the vertex entry point with the same
/// number of `f32` components, and every location the entry point reads must
/// be fed. Resource bindings must be exactly the texture group's image and
/// sampler, or nothing at all.
pub fn verify_program(
    program: &ShaderProgram,
    buffers: &[wgpu::VertexBufferLayout<'_>],
    binds_texture: bool,
) -> Result<(), ContractError> {
    let shader = program.label;

    let module = naga::front::wgsl::parse_str(program.source).map_err(|e| ContractError::Parse {
        shader,
        message: e.emit_to_string(program.source),
    })?;

    let vertex = entry_point(&module, naga::ShaderStage::Vertex, program.vertex_entry, shader)?;
    entry_point(&module, naga::ShaderStage::Fragment, program.fragment_entry, shader)?;

    let declared = vertex_inputs(&module, vertex);
    let supplied: BTreeMap<u32, u32> = buffers
        .iter()
        .flat_map(|buffer| buffer.attributes)
        .map(|attr| (attr.shader_location, (attr.format.size() / 4) as u32))
        .collect();

    for (&location, &supplied_components) in &supplied {
        match declared.get(&location) {
            None => return Err(ContractError::UnconsumedAttribute { shader, location }),
            Some(&declared_components) if declared_components != supplied_components => {
                return Err(ContractError::ComponentMismatch {
                    shader,
                    location,
                    supplied: supplied_components,
                    declared: declared_components,
                });
            }
            Some(_) => {}
        }
    }
    if let Some(&location) = declared.keys().find(|l| !supplied.contains_key(l)) {
        return Err(ContractError::UnfedInput { shader, location });
    }

    check_resources(&module, shader, binds_texture)?;

    log::debug!(
        "{shader}: {} vertex inputs, texture group {}",
        declared.len(),
        if binds_texture { "bound" } else { "unused" }
    );
    Ok(())
}

fn entry_point<'m>(
    module: &'m naga::Module,
    stage: naga::ShaderStage,
    entry: &'static str,
    shader: &'static str,
) -> Result<&'m naga::EntryPoint, ContractError> {
    module
        .entry_points
        .iter()
        .find(|ep| ep.stage == stage && ep.name == entry)
        .ok_or(ContractError::MissingEntryPoint {
            shader,
            stage,
            entry,
        })
}

/// Location -> `f32` component count of every vertex input, whether declared
/// as a bare argument or as a struct member. Non-float inputs count as 0.
fn vertex_inputs(module: &naga::Module, entry: &naga::EntryPoint) -> BTreeMap<u32, u32> {
    let mut inputs = BTreeMap::new();

    for arg in &entry.function.arguments {
        match &arg.binding {
            Some(naga::Binding::Location { location, .. }) => {
                inputs.insert(*location, float_components(module, arg.ty));
            }
            Some(_) => {}
            None => {
                if let naga::TypeInner::Struct { members, .. } = &module.types[arg.ty].inner {
                    for member in members {
                        if let Some(naga::Binding::Location { location, .. }) = &member.binding {
                            inputs.insert(*location, float_components(module, member.ty));
                        }
                    }
                }
            }
        }
    }

    inputs
}

fn float_components(module: &naga::Module, ty: naga::Handle<naga::Type>) -> u32 {
    const F32: naga::Scalar = naga::Scalar::F32;

    match module.types[ty].inner {
        naga::TypeInner::Scalar(scalar) if scalar == F32 => 1,
        naga::TypeInner::Vector { size, scalar } if scalar == F32 => size as u32,
        _ => 0,
    }
}

fn check_resources(
    module: &naga::Module,
    shader: &'static str,
    binds_texture: bool,
) -> Result<(), ContractError> {
    let expected: &[u32] = if binds_texture {
        &[IMAGE_BINDING, SAMPLER_BINDING]
    } else {
        &[]
    };

    for (_, var) in module.global_variables.iter() {
        let Some(rb) = &var.binding else { continue };
        if rb.group != TEXTURE_GROUP || !expected.contains(&rb.binding) {
            return Err(ContractError::UnexpectedBinding {
                shader,
                group: rb.group,
                binding: rb.binding,
            });
        }
    }

    if !binds_texture {
        return Ok(());
    }

    let image_ok = resource_at(module, IMAGE_BINDING).is_some_and(|ty| {
        matches!(
            ty,
            naga::TypeInner::Image {
                dim: naga::ImageDimension::D2,
                arrayed: false,
                class: naga::ImageClass::Sampled {
                    kind: naga::ScalarKind::Float,
                    multi: false,
                },
            }
        )
    });
    if !image_ok {
        return Err(ContractError::MissingBinding {
            shader,
            group: TEXTURE_GROUP,
            binding: IMAGE_BINDING,
            expected: "texture_2d<f32>",
        });
    }

    let sampler_ok = resource_at(module, SAMPLER_BINDING)
        .is_some_and(|ty| matches!(ty, naga::TypeInner::Sampler { comparison: false }));
    if !sampler_ok {
        return Err(ContractError::MissingBinding {
            shader,
            group: TEXTURE_GROUP,
            binding: SAMPLER_BINDING,
            expected: "sampler",
        });
    }

    Ok(())
}

fn resource_at(module: &naga::Module, binding: u32) -> Option<&naga::TypeInner> {
    module.global_variables.iter().find_map(|(_, var)| {
        let rb = var.binding.as_ref()?;
        (rb.group == TEXTURE_GROUP && rb.binding == binding).then(|| &module.types[var.ty].inner)
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bundled_programs_match_their_variants() {
        for variant in PipelineVariant::ALL {
            verify(variant).unwrap_or_else(|e| panic!("{variant:?}: {e}"));
        }
    }

    #[test]
    fn struct_and_bare_inputs_are_both_collected() {
        let source = "
            struct In { @location(0) p: vec3<f32>, @location(3) c: vec4<f32> }
            @vertex
            fn vs(v: In, @location(1) uv: vec2<f32>, @builtin(vertex_index) i: u32) -> @builtin(position) vec4<f32> {
                return vec4<f32>(v.p, 1.0);
            }
        ";
        let module = naga::front::wgsl::parse_str(source).unwrap();
        let inputs = vertex_inputs(&module, &module.entry_points[0]);
        assert_eq!(inputs, BTreeMap::from([(0, 3), (1, 2), (3, 4)]));
    }
}
