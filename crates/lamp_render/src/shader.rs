//! Embedded sprite shader and its interface reflection.
//!
//! The WGSL source is parsed and validated with naga before wgpu ever sees it,
//! so compile errors surface with the full annotated diagnostic. Reflection then
//! resolves the named vertex inputs and resources the pipeline binds against,
//! and a missing name is reported as such.

use std::collections::HashMap;

use crate::error::{RenderError, ShaderStage};

pub const SPRITE_SHADER: &str = include_str!("shaders/sprite.wgsl");

pub const VERTEX_ENTRY: &str = "vs_main";
pub const FRAGMENT_ENTRY: &str = "fs_main";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResourceSlot {
    pub group: u32,
    pub binding: u32,
}

/// Resolved locations of everything the sprite pipeline binds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShaderInterface {
    pub position: u32,
    pub tex_coord: u32,
    pub color: u32,
    pub mvp: ResourceSlot,
    pub tex: ResourceSlot,
    pub tex_sampler: ResourceSlot,
}

impl ShaderInterface {
    pub fn vertex_locations(&self) -> [u32; 3] {
        [self.position, self.tex_coord, self.color]
    }
}

pub fn reflect(source: &str) -> Result<ShaderInterface, RenderError> {
    let module = naga::front::wgsl::parse_str(source).map_err(|err| RenderError::Shader {
        stage: ShaderStage::Parse,
        log: err.emit_to_string(source),
    })?;

    let mut validator = naga::valid::Validator::new(
        naga::valid::ValidationFlags::all(),
        naga::valid::Capabilities::empty(),
    );
    validator
        .validate(&module)
        .map_err(|err| RenderError::Shader {
            stage: ShaderStage::Validate,
            log: err.emit_to_string(source),
        })?;

    let entry = module
        .entry_points
        .iter()
        .find(|ep| ep.stage == naga::ShaderStage::Vertex && ep.name == VERTEX_ENTRY)
        .ok_or(RenderError::NoVertexEntryPoint)?;

    let inputs = vertex_input_locations(&module, &entry.function);
    let attribute = |name: &'static str| {
        inputs
            .get(name)
            .copied()
            .ok_or(RenderError::MissingAttribute(name))
    };

    let resources: HashMap<&str, ResourceSlot> = module
        .global_variables
        .iter()
        .filter_map(|(_, var)| {
            let name = var.name.as_deref()?;
            let binding = var.binding.as_ref()?;
            Some((
                name,
                ResourceSlot {
                    group: binding.group,
                    binding: binding.binding,
                },
            ))
        })
        .collect();
    let uniform = |name: &'static str| {
        resources
            .get(name)
            .copied()
            .ok_or(RenderError::MissingUniform(name))
    };

    Ok(ShaderInterface {
        position: attribute("Position")?,
        tex_coord: attribute("TexCoord")?,
        color: attribute("Color")?,
        mvp: uniform("mvp")?,
        tex: uniform("tex")?,
        tex_sampler: uniform("tex_sampler")?,
    })
}

/// Vertex inputs may be bare arguments or members of a struct argument.
fn vertex_input_locations(module: &naga::Module, function: &naga::Function) -> HashMap<String, u32> {
    let mut locations = HashMap::new();
    for arg in &function.arguments {
        match &arg.binding {
            Some(naga::Binding::Location { location, .. }) => {
                if let Some(name) = &arg.name {
                    locations.insert(name.clone(), *location);
                }
            }
            Some(naga::Binding::BuiltIn(_)) => {}
            None => {
                if let naga::TypeInner::Struct { members, .. } = &module.types[arg.ty].inner {
                    for member in members {
                        if let (Some(name), Some(naga::Binding::Location { location, .. })) =
                            (&member.name, &member.binding)
                        {
                            locations.insert(name.clone(), *location);
                        }
                    }
                }
            }
        }
    }
    locations
}
