use std::fs;
use std::path::Path;

use anyhow::{Context, Result};

/// WGSL sources for a vertex/fragment pair.
///
/// The vertex stage must export `vs_main` and the fragment stage `fs_main`.
#[derive(Debug, Clone)]
pub struct ShaderSources {
    pub vertex: String,
    pub fragment: String,
}

/// Compiled shader stages.
pub struct ShaderModules {
    pub vertex: wgpu::ShaderModule,
    pub fragment: wgpu::ShaderModule,
}

impl ShaderSources {
    pub const VERTEX_ENTRY: &'static str = "vs_main";
    pub const FRAGMENT_ENTRY: &'static str = "fs_main";

    /// Reads both stages from disk. A missing, unreadable or blank file is an
    /// error naming the offending path.
    pub fn from_files(vertex: impl AsRef<Path>, fragment: impl AsRef<Path>) -> Result<Self> {
        let vertex = read_source(vertex.as_ref())?;
        let fragment = read_source(fragment.as_ref())?;
        Ok(Self { vertex, fragment })
    }

    /// Reads `<dir>/<name>.vert.wgsl` and `<dir>/<name>.frag.wgsl`.
    pub fn from_dir(dir: impl AsRef<Path>, name: &str) -> Result<Self> {
        let dir = dir.as_ref();
        Self::from_files(
            dir.join(format!("{name}.vert.wgsl")),
            dir.join(format!("{name}.frag.wgsl")),
        )
    }

    pub fn compile(&self, device: &wgpu::Device) -> ShaderModules {
        let vertex = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("cyclogon vertex shader"),
            source: wgpu::ShaderSource::Wgsl(self.vertex.as_str().into()),
        });
        let fragment = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("cyclogon fragment shader"),
            source: wgpu::ShaderSource::Wgsl(self.fragment.as_str().into()),
        });
        ShaderModules { vertex, fragment }
    }
}

/// Runs `build` inside a validation error scope on `device`.
///
/// Invalid WGSL or a pipeline that does not match its shaders comes back as
/// an `Err` naming `what` instead of reaching the device's uncaptured-error
/// handler, which panics.
pub fn validated<T>(device: &wgpu::Device, what: &str, build: impl FnOnce() -> T) -> Result<T> {
    let scope = device.push_error_scope(wgpu::ErrorFilter::Validation);
    let value = build();
    scope_result(what, pollster::block_on(scope.pop()))?;
    Ok(value)
}

fn scope_result(what: &str, error: Option<wgpu::Error>) -> Result<()> {
    match error {
        None => Ok(()),
        Some(err) => anyhow::bail!("{what} failed validation: {err}"),
    }
}

fn read_source(path: &Path) -> Result<String> {
    let src = fs::read_to_string(path)
        .with_context(|| format!("failed to read shader {}", path.display()))?;
    anyhow::ensure!(!src.trim().is_empty(), "shader {} is empty", path.display());
    log::debug!("loaded shader {} ({} bytes)", path.display(), src.len());
    Ok(src)
}
