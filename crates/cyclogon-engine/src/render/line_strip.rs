use anyhow::{Context, Result};
use bytemuck::{Pod, Zeroable};
use wgpu::util::DeviceExt;

use crate::coords::OrthoProjection;
use crate::render::{validated, RenderCtx, RenderTarget, ShaderSources};

/// Index-aligned vertex data for one strip: vertex `i` is drawn at
/// `positions[i]` with `colors[i]`.
#[derive(Debug, Copy, Clone)]
pub struct StripVertices<'a> {
    positions: &'a [[f32; 3]],
    colors: &'a [[f32; 3]],
}

impl<'a> StripVertices<'a> {
    pub fn new(positions: &'a [[f32; 3]], colors: &'a [[f32; 3]]) -> Result<Self> {
        anyhow::ensure!(
            positions.len() == colors.len(),
            "strip has {} positions but {} colors",
            positions.len(),
            colors.len()
        );
        u32::try_from(positions.len()).context("strip has more vertices than a draw call allows")?;
        Ok(Self { positions, colors })
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.positions.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }
}

/// Draws a static, per-vertex colored line strip under a fixed orthographic
/// projection.
///
/// Vertex data and the transform are uploaded once in [`new`](Self::new);
/// each frame only binds them and issues one draw. Dropping the renderer
/// releases every buffer and the pipeline.
pub struct LineStripRenderer {
    pipeline: wgpu::RenderPipeline,
    bind_group: wgpu::BindGroup,
    _transform_ubo: wgpu::Buffer,

    // `None` for an empty strip; wgpu does not bind zero-sized slices.
    vertex_buffers: Option<VertexBuffers>,
    vertex_count: u32,
}

struct VertexBuffers {
    positions: wgpu::Buffer,
    colors: wgpu::Buffer,
}

impl LineStripRenderer {
    pub fn new(
        ctx: &RenderCtx<'_>,
        shaders: &ShaderSources,
        projection: OrthoProjection,
        vertices: StripVertices<'_>,
    ) -> Result<Self> {
        let vertex_count = u32::try_from(vertices.len())?;

        let transform_ubo = ctx.device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("cyclogon transform ubo"),
            contents: bytemuck::bytes_of(&TransformUniform::from(projection)),
            usage: wgpu::BufferUsages::UNIFORM,
        });

        let bind_group_layout =
            ctx.device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
                label: Some("cyclogon transform bgl"),
                entries: &[wgpu::BindGroupLayoutEntry {
                    binding: 0,
                    visibility: wgpu::ShaderStages::VERTEX,
                    ty: wgpu::BindingType::Buffer {
                        ty: wgpu::BufferBindingType::Uniform,
                        has_dynamic_offset: false,
                        min_binding_size: wgpu::BufferSize::new(
                            std::mem::size_of::<TransformUniform>() as u64,
                        ),
                    },
                    count: None,
                }],
            });

        let bind_group = ctx.device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("cyclogon transform bind group"),
            layout: &bind_group_layout,
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: transform_ubo.as_entire_binding(),
            }],
        });

        let pipeline_layout =
            ctx.device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
                label: Some("cyclogon line strip pipeline layout"),
                bind_group_layouts: &[&bind_group_layout],
                immediate_size: 0,
            });

        let pipeline = validated(ctx.device, "line strip pipeline", || {
            let modules = shaders.compile(ctx.device);
            ctx.device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
                label: Some("cyclogon line strip pipeline"),
                layout: Some(&pipeline_layout),
                vertex: wgpu::VertexState {
                    module: &modules.vertex,
                    entry_point: Some(ShaderSources::VERTEX_ENTRY),
                    compilation_options: Default::default(),
                    buffers: &[position_layout(), color_layout()],
                },
                fragment: Some(wgpu::FragmentState {
                    module: &modules.fragment,
                    entry_point: Some(ShaderSources::FRAGMENT_ENTRY),
                    compilation_options: Default::default(),
                    targets: &[Some(wgpu::ColorTargetState {
                        format: ctx.surface_format,
                        blend: Some(wgpu::BlendState::REPLACE),
                        write_mask: wgpu::ColorWrites::ALL,
                    })],
                }),
                primitive: wgpu::PrimitiveState {
                    topology: wgpu::PrimitiveTopology::LineStrip,
                    strip_index_format: None,
                    front_face: wgpu::FrontFace::Ccw,
                    cull_mode: None,
                    polygon_mode: wgpu::PolygonMode::Fill,
                    unclipped_depth: false,
                    conservative: false,
                },
                depth_stencil: None,
                multisample: wgpu::MultisampleState {
                    count: ctx.sample_count,
                    mask: !0,
                    alpha_to_coverage_enabled: false,
                },
                multiview_mask: None,
                cache: None,
            })
        })?;

        let vertex_buffers = if vertices.is_empty() {
            log::warn!("line strip has no vertices; nothing will be drawn");
            None
        } else {
            Some(VertexBuffers {
                positions: ctx.device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
                    label: Some("cyclogon position vbo"),
                    contents: bytemuck::cast_slice(vertices.positions),
                    usage: wgpu::BufferUsages::VERTEX,
                }),
                colors: ctx.device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
                    label: Some("cyclogon color vbo"),
                    contents: bytemuck::cast_slice(vertices.colors),
                    usage: wgpu::BufferUsages::VERTEX,
                }),
            })
        };

        log::debug!("line strip uploaded: {vertex_count} vertices");

        Ok(Self {
            pipeline,
            bind_group,
            _transform_ubo: transform_ubo,
            vertex_buffers,
            vertex_count,
        })
    }

    #[inline]
    pub fn vertex_count(&self) -> u32 {
        self.vertex_count
    }

    /// Records one pass drawing the whole strip on top of the target's
    /// current contents.
    pub fn render(&self, target: &mut RenderTarget<'_>) {
        let Some(buffers) = self.vertex_buffers.as_ref() else { return };

        let attachment = target.color_attachment(wgpu::LoadOp::Load);
        let mut rpass = target.encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
            label: Some("cyclogon line strip pass"),
            color_attachments: &[Some(attachment)],
            depth_stencil_attachment: None,
            timestamp_writes: None,
            occlusion_query_set: None,
            multiview_mask: None,
        });

        rpass.set_pipeline(&self.pipeline);
        rpass.set_bind_group(0, &self.bind_group, &[]);
        rpass.set_vertex_buffer(0, buffers.positions.slice(..));
        rpass.set_vertex_buffer(1, buffers.colors.slice(..));
        rpass.draw(0..self.vertex_count, 0..1);
    }
}

// ── GPU types ─────────────────────────────────────────────────────────────

/// `mvp` uniform, column-major, 64 bytes.
#[repr(C)]
#[derive(Debug, Copy, Clone, Pod, Zeroable)]
struct TransformUniform {
    mvp: [[f32; 4]; 4],
}

impl From<OrthoProjection> for TransformUniform {
    fn from(p: OrthoProjection) -> Self {
        Self { mvp: p.to_cols_array_2d() }
    }
}

const POSITION_ATTRS: [wgpu::VertexAttribute; 1] = wgpu::vertex_attr_array![0 => Float32x3];
const COLOR_ATTRS: [wgpu::VertexAttribute; 1] = wgpu::vertex_attr_array![1 => Float32x3];

fn position_layout() -> wgpu::VertexBufferLayout<'static> {
    wgpu::VertexBufferLayout {
        array_stride: std::mem::size_of::<[f32; 3]>() as u64,
        step_mode: wgpu::VertexStepMode::Vertex,
        attributes: &POSITION_ATTRS,
    }
}

fn color_layout() -> wgpu::VertexBufferLayout<'static> {
    wgpu::VertexBufferLayout {
        array_stride: std::mem::size_of::<[f32; 3]>() as u64,
        step_mode: wgpu::VertexStepMode::Vertex,
        attributes: &COLOR_ATTRS,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strip_rejects_mismatched_lengths() {
        let positions = [[0.0; 3]; 3];
        let colors = [[1.0, 0.0, 0.0]; 2];
        let err = StripVertices::new(&positions, &colors).unwrap_err();
        assert_eq!(err.to_string(), "strip has 3 positions but 2 colors");
    }

    #[test]
    fn empty_strip_is_allowed() {
        let v = StripVertices::new(&[], &[]).unwrap();
        assert!(v.is_empty());
    }

    #[test]
    fn transform_uniform_is_one_mat4() {
        assert_eq!(std::mem::size_of::<TransformUniform>(), 64);
        let u = TransformUniform::from(OrthoProjection::new(-1.0, 1.0, -1.0, 1.0));
        assert_eq!(u.mvp[0][0], 1.0);
        assert_eq!(u.mvp[3][3], 1.0);
    }

    #[test]
    fn vertex_layouts_use_separate_locations() {
        assert_eq!(position_layout().attributes[0].shader_location, 0);
        assert_eq!(color_layout().attributes[0].shader_location, 1);
        assert_eq!(position_layout().array_stride, 12);
    }
}
